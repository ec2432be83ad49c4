//! Services a host document provides to measurement kinds

use super::element::{MeasureElementType, MeasureRadiusInfo, SubObjectRef};
use crate::topology::Shape;
use crate::types::{DocumentStatus, ShapeOptions};

/// Maps a selection element to its measurement element type
pub trait ElementTypeResolver {
    fn element_type(&self, element: &SubObjectRef) -> MeasureElementType;
}

/// Resolves a sub-object reference to geometry
pub trait ShapeResolver {
    /// Returns `None` when the reference does not resolve to a shape
    fn shape(&self, element: &SubObjectRef, options: ShapeOptions) -> Option<Shape>;
}

/// Evaluates the radius of a circular element
pub trait RadiusEvaluator {
    /// Returns `None` when the element has no radius
    fn measure_radius(&self, element: &SubObjectRef) -> Option<MeasureRadiusInfo>;
}

/// Transient document state visible to change handlers
pub trait DocumentState {
    fn status(&self) -> DocumentStatus;

    fn is_restoring(&self) -> bool {
        self.status().contains(DocumentStatus::RESTORING)
    }

    fn is_removing(&self) -> bool {
        self.status().contains(DocumentStatus::REMOVING)
    }
}

/// Everything a measurement kind consumes from its host
pub trait MeasureHost: ElementTypeResolver + ShapeResolver + RadiusEvaluator + DocumentState {}

impl<T> MeasureHost for T where T: ElementTypeResolver + ShapeResolver + RadiusEvaluator + DocumentState {}
