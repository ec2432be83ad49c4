//! Selection elements and per-element measurement data

use crate::types::ObjectId;
use nalgebra::Point3;
use std::fmt;

/// Measurement-oriented classification of a selected element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureElementType {
    /// Element could not be resolved
    Invalid,
    Point,
    /// Infinite line (datum axis)
    Line,
    LineSegment,
    /// Closed circular edge
    Circle,
    /// Partial circular edge
    Arc,
    /// Any other edge curve
    Curve,
    Plane,
    Cylinder,
    Cone,
    Torus,
    Volume,
    /// Any other face surface
    Surface,
}

impl fmt::Display for MeasureElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Reference to a sub-element of a document object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SubObjectRef {
    /// Owning object
    pub object: ObjectId,
    /// Sub-element path, e.g. `"Face3"` or `"Pad.Edge2"`
    pub sub_name: String,
}

impl SubObjectRef {
    pub fn new(object: ObjectId, sub_name: impl Into<String>) -> Self {
        Self {
            object,
            sub_name: sub_name.into(),
        }
    }

    /// Check whether the reference names nothing
    pub fn is_empty(&self) -> bool {
        self.object.is_null()
    }
}

impl fmt::Display for SubObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object, self.sub_name)
    }
}

/// One entry of a measurement selection
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureSelectionItem {
    pub object: SubObjectRef,
}

impl MeasureSelectionItem {
    pub fn new(object: SubObjectRef) -> Self {
        Self { object }
    }
}

impl From<SubObjectRef> for MeasureSelectionItem {
    fn from(object: SubObjectRef) -> Self {
        Self::new(object)
    }
}

/// Ordered selection handed to measurement kinds
pub type MeasureSelection = Vec<MeasureSelectionItem>;

/// Radius evaluation of a circular element.
///
/// The default value is the invalid result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureRadiusInfo {
    pub valid: bool,
    pub radius: f64,
    /// Anchor for the measurement label
    pub point_on_curve: Point3<f64>,
}

impl MeasureRadiusInfo {
    /// A successful evaluation
    pub fn new(radius: f64, point_on_curve: Point3<f64>) -> Self {
        Self {
            valid: true,
            radius,
            point_on_curve,
        }
    }

    /// The invalid result
    pub fn invalid() -> Self {
        Self {
            valid: false,
            radius: 0.0,
            point_on_curve: Point3::origin(),
        }
    }
}

impl Default for MeasureRadiusInfo {
    fn default() -> Self {
        Self::invalid()
    }
}
