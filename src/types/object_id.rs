//! Object identifiers
//!
//! Every object in a document is addressed by a 64-bit identifier that stays
//! stable for the object's lifetime. Identifier 0 is reserved and invalid.

use std::fmt;

/// A stable identifier for a document object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The null/invalid identifier (0)
    pub const NULL: ObjectId = ObjectId(0);

    /// Create a new identifier from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        ObjectId(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null identifier
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the identifier, or `None` when it is null
    #[inline]
    pub fn non_null(self) -> Option<ObjectId> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        ObjectId::NULL
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        ObjectId(value)
    }
}

impl From<ObjectId> for u64 {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}
