//! Placement type for positioning objects and annotations
//!
//! A placement is a rigid transform: a position plus an orientation. Object
//! placements move shapes into document space, and measurements hand one back
//! to anchor their on-screen label.

use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};
use std::ops::Mul;

/// Rigid placement (rotation followed by translation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the local origin
    pub position: Point3<f64>,
    /// Orientation of the local axes
    pub rotation: UnitQuaternion<f64>,
}

impl Placement {
    /// Create a placement from a position and rotation
    pub fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    /// Identity placement at the origin
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Placement at `position` with identity orientation
    pub fn from_position(position: Point3<f64>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Placement at the origin rotated `angle` radians about `axis`
    pub fn from_axis_angle(axis: Vector3<f64>, angle: f64) -> Self {
        Self {
            rotation: UnitQuaternion::from_axis_angle(&Unit::new_normalize(axis), angle),
            ..Self::identity()
        }
    }

    /// Convert to a nalgebra isometry
    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.rotation)
    }

    /// Build from a nalgebra isometry
    pub fn from_isometry(iso: &Isometry3<f64>) -> Self {
        Self {
            position: Point3::from(iso.translation.vector),
            rotation: iso.rotation,
        }
    }

    /// Transform a point from local to parent coordinates
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        self.to_isometry().transform_point(point)
    }

    /// Apply `self` after `inner` (`self * inner`)
    pub fn compose(&self, inner: &Placement) -> Placement {
        Placement::from_isometry(&(self.to_isometry() * inner.to_isometry()))
    }

    /// Check whether this placement leaves points unchanged
    pub fn is_identity(&self) -> bool {
        self.position.coords.norm() < 1e-12 && self.rotation.angle() < 1e-12
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Placement {
    type Output = Placement;

    fn mul(self, rhs: Placement) -> Placement {
        self.compose(&rhs)
    }
}
