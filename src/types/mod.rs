//! Core value types

pub mod flags;
pub mod object_id;
pub mod placement;

pub use flags::{DocumentStatus, PropertyFlags, ShapeOptions};
pub use object_id::ObjectId;
pub use placement::Placement;

pub use nalgebra::{Point3, UnitQuaternion, Vector3};
