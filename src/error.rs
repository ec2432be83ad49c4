//! Error types for cadmeasure

use crate::types::ObjectId;
use thiserror::Error;

/// Main error type for measurement operations
#[derive(Debug, Error)]
pub enum MeasureError {
    /// The measurement could not be evaluated from its current subject
    #[error("{0}")]
    CannotCalculate(String),

    /// Selection was not acceptable for this measurement kind
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Object not found in document
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// Named sub-element does not exist on the object's shape
    #[error("Element {element:?} not found on object {object}")]
    ElementNotFound { object: ObjectId, element: String },

    /// Sub-element path could not be parsed
    #[error("Invalid sub-element name: {0:?}")]
    InvalidSubElement(String),

    /// Link chain loops back on itself or exceeds the configured depth
    #[error("Link cycle detected at object {0}")]
    LinkCycle(ObjectId),

    /// Attempt to write a read-only property from outside its owner
    #[error("Property {0} is read-only")]
    ReadOnlyProperty(&'static str),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for measurement operations
pub type Result<T> = std::result::Result<T, MeasureError>;

impl From<String> for MeasureError {
    fn from(s: String) -> Self {
        MeasureError::Custom(s)
    }
}

impl From<&str> for MeasureError {
    fn from(s: &str) -> Self {
        MeasureError::Custom(s.to_string())
    }
}
