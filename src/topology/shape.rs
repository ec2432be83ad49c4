//! Topological entities and the shape container
//!
//! Shapes own their sub-shapes outright: an edge shared by two faces of a
//! solid is stored once per face. Exploration visits sub-shapes depth-first
//! in storage order, so element indices (`Face1`, `Edge3`, ...) follow the
//! order in which the shape was built.

use super::curve::{Circle, Curve, CurveType};
use super::naming::{ElementKind, ElementName};
use super::surface::Surface;
use nalgebra::{Isometry3, Point3};
use std::f64::consts::TAU;
use std::fmt;

/// Distance below which two vertex positions are treated as the same vertex
const VERTEX_TOLERANCE: f64 = 1e-9;

/// Topological type of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Vertex,
    Edge,
    Wire,
    Face,
    Shell,
    Solid,
    Compound,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A point in space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub point: Point3<f64>,
}

impl Vertex {
    pub fn new(point: Point3<f64>) -> Self {
        Self { point }
    }
}

/// A bounded piece of a curve between two parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub curve: Curve,
    pub first: f64,
    pub last: f64,
}

impl Edge {
    /// Create an edge over `[first, last]` of `curve`
    pub fn new(curve: Curve, first: f64, last: f64) -> Self {
        Self { curve, first, last }
    }

    /// Straight segment between two points
    pub fn line(start: Point3<f64>, end: Point3<f64>) -> Self {
        let length = (end - start).norm();
        Self::new(Curve::line_through(start, end), 0.0, length)
    }

    /// Full circle
    pub fn circle(circle: Circle) -> Self {
        Self::new(Curve::Circle(circle), 0.0, TAU)
    }

    /// Circular arc between two angles
    pub fn arc(circle: Circle, start_angle: f64, end_angle: f64) -> Self {
        Self::new(Curve::Circle(circle), start_angle, end_angle)
    }

    /// Kind of the underlying curve
    pub fn curve_type(&self) -> CurveType {
        self.curve.curve_type()
    }

    /// Whether the underlying curve is a circle (full or partial)
    pub fn is_circle(&self) -> bool {
        self.curve_type() == CurveType::Circle
    }

    /// Parameter span covered by the edge
    pub fn sweep(&self) -> f64 {
        (self.last - self.first).abs()
    }

    /// Whether the edge covers a full period of a circular curve
    pub fn is_full_circle(&self, tolerance: f64) -> bool {
        self.is_circle() && self.sweep() >= TAU - tolerance
    }

    pub fn start_point(&self) -> Point3<f64> {
        self.curve.value(self.first)
    }

    pub fn end_point(&self) -> Point3<f64> {
        self.curve.value(self.last)
    }

    /// Apply a rigid transform
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Edge {
        Edge::new(self.curve.transformed(iso), self.first, self.last)
    }
}

/// An ordered chain of edges
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wire {
    pub edges: Vec<Edge>,
}

impl Wire {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }
}

/// A bounded region of a surface
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub surface: Surface,
    /// Boundary wires, outer wire first
    pub wires: Vec<Wire>,
}

impl Face {
    pub fn new(surface: Surface, wires: Vec<Wire>) -> Self {
        Self { surface, wires }
    }

    /// Face bounded by a single wire
    pub fn with_outer_wire(surface: Surface, edges: Vec<Edge>) -> Self {
        Self::new(surface, vec![Wire::new(edges)])
    }

    /// All bounding edges, wire by wire
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.wires.iter().flat_map(|w| w.edges.iter())
    }

    /// Apply a rigid transform
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Face {
        Face {
            surface: self.surface.transformed(iso),
            wires: self
                .wires
                .iter()
                .map(|w| Wire::new(w.edges.iter().map(|e| e.transformed(iso)).collect()))
                .collect(),
        }
    }
}

/// Connected set of faces
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shell {
    pub faces: Vec<Face>,
}

/// Volume bounded by shells
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    pub shells: Vec<Shell>,
}

/// Any topological shape
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Vertex(Vertex),
    Edge(Edge),
    Wire(Wire),
    Face(Face),
    Shell(Shell),
    Solid(Solid),
    Compound(Vec<Shape>),
}

impl Shape {
    /// Topological type of this shape
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Vertex(_) => ShapeType::Vertex,
            Shape::Edge(_) => ShapeType::Edge,
            Shape::Wire(_) => ShapeType::Wire,
            Shape::Face(_) => ShapeType::Face,
            Shape::Shell(_) => ShapeType::Shell,
            Shape::Solid(_) => ShapeType::Solid,
            Shape::Compound(_) => ShapeType::Compound,
        }
    }

    /// The edge, when this shape is one
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Shape::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// All faces, depth-first
    pub fn faces(&self) -> Vec<&Face> {
        let mut out = Vec::new();
        self.collect_faces(&mut out);
        out
    }

    /// All edges, depth-first
    pub fn edges(&self) -> Vec<&Edge> {
        let mut out = Vec::new();
        self.collect_edges(&mut out);
        out
    }

    /// Distinct vertices: explicit vertices plus edge end points
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out: Vec<Vertex> = Vec::new();
        let mut push = |p: Point3<f64>| {
            if !out.iter().any(|v| (v.point - p).norm() < VERTEX_TOLERANCE) {
                out.push(Vertex::new(p));
            }
        };
        self.visit_points(&mut push);
        out
    }

    /// Look up a named sub-element, returning an owned copy
    pub fn sub_shape(&self, name: &ElementName) -> Option<Shape> {
        let idx = name.index.checked_sub(1)?;
        match name.kind {
            ElementKind::Face => self.faces().get(idx).map(|f| Shape::Face((*f).clone())),
            ElementKind::Edge => self.edges().get(idx).map(|e| Shape::Edge((*e).clone())),
            ElementKind::Vertex => self.vertices().get(idx).map(|v| Shape::Vertex(*v)),
        }
    }

    /// Apply a rigid transform
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Shape {
        match self {
            Shape::Vertex(v) => Shape::Vertex(Vertex::new(iso.transform_point(&v.point))),
            Shape::Edge(e) => Shape::Edge(e.transformed(iso)),
            Shape::Wire(w) => Shape::Wire(Wire::new(
                w.edges.iter().map(|e| e.transformed(iso)).collect(),
            )),
            Shape::Face(f) => Shape::Face(f.transformed(iso)),
            Shape::Shell(s) => Shape::Shell(transform_shell(s, iso)),
            Shape::Solid(s) => Shape::Solid(Solid {
                shells: s.shells.iter().map(|sh| transform_shell(sh, iso)).collect(),
            }),
            Shape::Compound(items) => {
                Shape::Compound(items.iter().map(|s| s.transformed(iso)).collect())
            }
        }
    }

    fn collect_faces<'a>(&'a self, out: &mut Vec<&'a Face>) {
        match self {
            Shape::Face(f) => out.push(f),
            Shape::Shell(s) => out.extend(s.faces.iter()),
            Shape::Solid(s) => out.extend(s.shells.iter().flat_map(|sh| sh.faces.iter())),
            Shape::Compound(items) => items.iter().for_each(|s| s.collect_faces(out)),
            Shape::Vertex(_) | Shape::Edge(_) | Shape::Wire(_) => {}
        }
    }

    fn collect_edges<'a>(&'a self, out: &mut Vec<&'a Edge>) {
        match self {
            Shape::Vertex(_) => {}
            Shape::Edge(e) => out.push(e),
            Shape::Wire(w) => out.extend(w.edges.iter()),
            Shape::Compound(items) => items.iter().for_each(|s| s.collect_edges(out)),
            Shape::Face(_) | Shape::Shell(_) | Shape::Solid(_) => {
                for face in self.faces() {
                    out.extend(face.edges());
                }
            }
        }
    }

    fn visit_points(&self, visit: &mut impl FnMut(Point3<f64>)) {
        match self {
            Shape::Vertex(v) => visit(v.point),
            Shape::Compound(items) => items.iter().for_each(|s| s.visit_points(visit)),
            _ => {
                for edge in self.edges() {
                    visit(edge.start_point());
                    visit(edge.end_point());
                }
            }
        }
    }
}

fn transform_shell(shell: &Shell, iso: &Isometry3<f64>) -> Shell {
    Shell {
        faces: shell.faces.iter().map(|f| f.transformed(iso)).collect(),
    }
}

impl From<Face> for Shape {
    fn from(face: Face) -> Self {
        Shape::Face(face)
    }
}

impl From<Edge> for Shape {
    fn from(edge: Edge) -> Self {
        Shape::Edge(edge)
    }
}
