//! Classification of selection elements for circular measurements
//!
//! Edges and cylinders are circular by their element type alone. Planar and
//! generic faces are resolved to geometry and their bounding edges are
//! inspected: a face with at least one circular edge can be measured, a face
//! whose every edge is circular is unambiguously a circular feature.

use super::element::{MeasureElementType, SubObjectRef};
use super::host::{ElementTypeResolver, ShapeResolver};
use crate::topology::{Face, Shape};
use crate::types::ShapeOptions;
use tracing::trace;

/// How many of a face's bounding edges are circular
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircularEdges {
    /// No circular edge, including faces with no edges at all
    None,
    /// At least one circular edge and at least one other edge
    Some,
    /// At least one edge, and every edge is circular
    All,
}

impl CircularEdges {
    /// Summarize the bounding edges of `face`
    pub fn of_face(face: &Face) -> Self {
        let mut circular = 0usize;
        let mut other = 0usize;
        for edge in face.edges() {
            trace!(curve = %edge.curve_type(), "inspecting face edge");
            if edge.is_circle() {
                circular += 1;
            } else {
                other += 1;
            }
        }
        match (circular, other) {
            (0, _) => CircularEdges::None,
            (_, 0) => CircularEdges::All,
            _ => CircularEdges::Some,
        }
    }

    pub fn any(&self) -> bool {
        !matches!(self, CircularEdges::None)
    }

    pub fn all(&self) -> bool {
        matches!(self, CircularEdges::All)
    }
}

/// Classifies selection elements against a host's resolvers
pub struct ShapeElementClassifier<'a, H: ?Sized> {
    host: &'a H,
    options: ShapeOptions,
}

impl<'a, H> ShapeElementClassifier<'a, H>
where
    H: ElementTypeResolver + ShapeResolver + ?Sized,
{
    /// Create a classifier with the default shape options
    pub fn new(host: &'a H) -> Self {
        Self::with_options(host, ShapeOptions::default())
    }

    pub fn with_options(host: &'a H, options: ShapeOptions) -> Self {
        Self { host, options }
    }

    /// Element type as reported by the host
    pub fn classify(&self, element: &SubObjectRef) -> MeasureElementType {
        self.host.element_type(element)
    }

    /// Resolve the element to a face, or `None` for null and non-face shapes
    pub fn resolve_face(&self, element: &SubObjectRef) -> Option<Face> {
        match self.host.shape(element, self.options)? {
            Shape::Face(face) => Some(face),
            other => {
                trace!(element = %element, shape = %other.shape_type(), "element is not a face");
                None
            }
        }
    }

    /// Boundary summary for a face element; `None` when it is not a face
    pub fn circular_edges(&self, element: &SubObjectRef) -> CircularEdges {
        self.resolve_face(element)
            .map(|face| CircularEdges::of_face(&face))
            .unwrap_or(CircularEdges::None)
    }

    /// Whether the element is a face with at least one circular edge
    pub fn has_any_circular_edge(&self, element: &SubObjectRef) -> bool {
        self.circular_edges(element).any()
    }

    /// Whether the element is a face bounded only by circular edges
    pub fn has_only_circular_edges(&self, element: &SubObjectRef) -> bool {
        self.circular_edges(element).all()
    }
}
