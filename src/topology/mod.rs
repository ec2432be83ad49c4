//! Boundary-representation model
//!
//! A small in-memory B-rep: curves and surfaces carry the geometry, edges,
//! wires, faces, shells and solids carry the topology. It provides what the
//! measurement code needs from a geometry kernel: edge enumeration over a
//! face, curve/surface kind queries, named sub-element lookup and rigid
//! transforms.

pub mod curve;
pub mod naming;
pub mod shape;
pub mod surface;

pub use curve::{arbitrary_axis, Circle, Curve, CurveType};
pub use naming::{split_sub_name, ElementKind, ElementName};
pub use shape::{Edge, Face, Shape, ShapeType, Shell, Solid, Vertex, Wire};
pub use surface::{Surface, SurfaceType};
