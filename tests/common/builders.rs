//! Test document builders.
//!
//! `create_fixture_document()` produces one feature per geometric situation
//! the diameter measurement has to tell apart, so selection and compute tests
//! can address them by label.

#![allow(dead_code)]

use cadmeasure::topology::{Circle, Curve, Edge, Face, Shape, Shell, Solid, Surface, Wire};
use cadmeasure::types::{Point3, Vector3};
use cadmeasure::{Document, ObjectId};
use std::f64::consts::PI;

/// Flat disc bounded by a single full circle
pub fn disc(center: Point3<f64>, radius: f64) -> Face {
    Face::with_outer_wire(
        Surface::plane(center, Vector3::z()),
        vec![Edge::circle(Circle::xy(center, radius))],
    )
}

/// Flat annulus: outer and inner circles
pub fn annulus(outer: f64, inner: f64) -> Face {
    Face::new(
        Surface::plane(Point3::origin(), Vector3::z()),
        vec![
            Wire::new(vec![Edge::circle(Circle::xy(Point3::origin(), outer))]),
            Wire::new(vec![Edge::circle(Circle::xy(Point3::origin(), inner))]),
        ],
    )
}

/// Half disc: semicircular arc closed by its diameter line
pub fn half_disc(radius: f64) -> Face {
    Face::with_outer_wire(
        Surface::plane(Point3::origin(), Vector3::z()),
        vec![
            Edge::arc(Circle::xy(Point3::origin(), radius), 0.0, PI),
            Edge::line(Point3::new(-radius, 0.0, 0.0), Point3::new(radius, 0.0, 0.0)),
        ],
    )
}

/// Axis-aligned square in the XY plane
pub fn square(side: f64) -> Face {
    let p = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(side, 0.0, 0.0),
        Point3::new(side, side, 0.0),
        Point3::new(0.0, side, 0.0),
    ];
    Face::with_outer_wire(
        Surface::plane(Point3::origin(), Vector3::z()),
        (0..4).map(|i| Edge::line(p[i], p[(i + 1) % 4])).collect(),
    )
}

/// Closed cylinder along Z: lateral face first, then bottom and top caps.
///
/// Face1 is the lateral face, bounded by Edge1 (bottom rim) and Edge2 (top
/// rim); Face2 and Face3 are the caps.
pub fn cylinder(radius: f64, height: f64) -> Shape {
    let bottom = Circle::xy(Point3::origin(), radius);
    let top = Circle::xy(Point3::new(0.0, 0.0, height), radius);
    let lateral = Face::with_outer_wire(
        Surface::cylinder(Point3::origin(), Vector3::z(), radius),
        vec![Edge::circle(bottom), Edge::circle(top)],
    );
    Shape::Solid(Solid {
        shells: vec![Shell {
            faces: vec![
                lateral,
                disc(Point3::origin(), radius),
                disc(Point3::new(0.0, 0.0, height), radius),
            ],
        }],
    })
}

/// Hemisphere bounded by its equator circle
pub fn sphere_cap(radius: f64) -> Face {
    Face::with_outer_wire(
        Surface::Sphere {
            center: Point3::origin(),
            radius,
        },
        vec![Edge::circle(Circle::xy(Point3::origin(), radius))],
    )
}

/// Quarter sphere bounded by a half equator and the diameter closing it
pub fn sphere_quarter(radius: f64) -> Face {
    Face::with_outer_wire(
        Surface::Sphere {
            center: Point3::origin(),
            radius,
        },
        vec![
            Edge::arc(Circle::xy(Point3::origin(), radius), 0.0, PI),
            Edge::line(Point3::new(-radius, 0.0, 0.0), Point3::new(radius, 0.0, 0.0)),
        ],
    )
}

/// Plane face with no boundary
pub fn unbounded_plane() -> Face {
    Face::new(Surface::plane(Point3::origin(), Vector3::z()), vec![])
}

/// Labels and ids of the fixture features
pub struct Fixture {
    pub doc: Document,
    pub disc: ObjectId,
    pub annulus: ObjectId,
    pub half_disc: ObjectId,
    pub square: ObjectId,
    pub cylinder: ObjectId,
    pub plane: ObjectId,
    pub ellipse: ObjectId,
}

/// Document with one feature per situation
pub fn create_fixture_document() -> Fixture {
    let mut doc = Document::new();
    let disc = doc.add_feature("Disc", Shape::Face(disc(Point3::origin(), 5.0)));
    let annulus = doc.add_feature("Annulus", Shape::Face(annulus(6.0, 2.0)));
    let half_disc = doc.add_feature("HalfDisc", Shape::Face(half_disc(3.0)));
    let square = doc.add_feature("Square", Shape::Face(square(4.0)));
    let cylinder = doc.add_feature("Cylinder", cylinder(2.5, 10.0));
    let plane = doc.add_feature("Plane", Shape::Face(unbounded_plane()));
    let ellipse = doc.add_feature(
        "Ellipse",
        Shape::Edge(Edge::new(
            Curve::Ellipse {
                center: Point3::origin(),
                normal: Vector3::z_axis(),
                major_axis: Vector3::x_axis(),
                major_radius: 4.0,
                minor_radius: 2.0,
            },
            0.0,
            2.0 * PI,
        )),
    );

    Fixture {
        doc,
        disc,
        annulus,
        half_disc,
        square,
        cylinder,
        plane,
        ellipse,
    }
}
