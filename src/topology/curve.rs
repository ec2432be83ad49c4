//! Edge geometry: parametric 3D curves

use nalgebra::{Isometry3, Point3, Unit, Vector3};
use std::fmt;

/// Underlying kind of a curve, independent of its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    Line,
    Circle,
    Ellipse,
    Bezier,
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "Line"),
            Self::Circle => write!(f, "Circle"),
            Self::Ellipse => write!(f, "Ellipse"),
            Self::Bezier => write!(f, "Bezier"),
        }
    }
}

/// Pick a stable in-plane X direction for a plane with the given normal.
///
/// Uses the AutoCAD arbitrary axis algorithm: world Y is the reference when
/// the normal is close to world Z, world Z otherwise.
pub fn arbitrary_axis(normal: &Unit<Vector3<f64>>) -> Unit<Vector3<f64>> {
    const ARBITRARY_AXIS_THRESHOLD: f64 = 1.0 / 64.0;

    let reference = if normal.x.abs() < ARBITRARY_AXIS_THRESHOLD
        && normal.y.abs() < ARBITRARY_AXIS_THRESHOLD
    {
        Vector3::y()
    } else {
        Vector3::z()
    };
    Unit::new_normalize(reference.cross(&normal.into_inner()))
}

/// Circle in 3D, parameterized by angle from `x_axis` around `normal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Point3<f64>,
    /// Plane normal
    pub normal: Unit<Vector3<f64>>,
    /// Direction of parameter 0
    pub x_axis: Unit<Vector3<f64>>,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a circle, deriving the parameter origin from the normal
    pub fn new(center: Point3<f64>, normal: Vector3<f64>, radius: f64) -> Self {
        let normal = Unit::new_normalize(normal);
        Circle {
            center,
            normal,
            x_axis: arbitrary_axis(&normal),
            radius,
        }
    }

    /// Circle in the XY plane
    pub fn xy(center: Point3<f64>, radius: f64) -> Self {
        Circle {
            center,
            normal: Vector3::z_axis(),
            x_axis: Vector3::x_axis(),
            radius,
        }
    }

    /// Direction of parameter PI/2
    pub fn y_axis(&self) -> Vector3<f64> {
        self.normal.cross(&self.x_axis.into_inner())
    }

    /// Point at angle `t`
    pub fn value(&self, t: f64) -> Point3<f64> {
        self.center + (self.x_axis.into_inner() * t.cos() + self.y_axis() * t.sin()) * self.radius
    }
}

/// A parametric curve carried by an edge
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// Infinite line, parameter is distance from `origin`
    Line {
        origin: Point3<f64>,
        direction: Unit<Vector3<f64>>,
    },
    /// Circle, parameter is angle in radians
    Circle(Circle),
    /// Ellipse, parameter is eccentric angle in radians
    Ellipse {
        center: Point3<f64>,
        normal: Unit<Vector3<f64>>,
        major_axis: Unit<Vector3<f64>>,
        major_radius: f64,
        minor_radius: f64,
    },
    /// Bezier curve over `[0, 1]`
    Bezier { poles: Vec<Point3<f64>> },
}

impl Curve {
    /// Line through two points, parameterized by distance from `start`
    pub fn line_through(start: Point3<f64>, end: Point3<f64>) -> Self {
        Curve::Line {
            origin: start,
            direction: Unit::new_normalize(end - start),
        }
    }

    /// Kind of this curve
    pub fn curve_type(&self) -> CurveType {
        match self {
            Curve::Line { .. } => CurveType::Line,
            Curve::Circle(_) => CurveType::Circle,
            Curve::Ellipse { .. } => CurveType::Ellipse,
            Curve::Bezier { .. } => CurveType::Bezier,
        }
    }

    /// Circle data, when this curve is a circle
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Curve::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Point at parameter `t`
    pub fn value(&self, t: f64) -> Point3<f64> {
        match self {
            Curve::Line { origin, direction } => *origin + direction.into_inner() * t,
            Curve::Circle(c) => c.value(t),
            Curve::Ellipse {
                center,
                normal,
                major_axis,
                major_radius,
                minor_radius,
            } => {
                let minor_axis = normal.cross(&major_axis.into_inner());
                *center
                    + major_axis.into_inner() * (major_radius * t.cos())
                    + minor_axis * (minor_radius * t.sin())
            }
            Curve::Bezier { poles } => de_casteljau(poles, t),
        }
    }

    /// Apply a rigid transform
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Curve {
        let dir = |v: &Unit<Vector3<f64>>| Unit::new_unchecked(iso.rotation * v.into_inner());
        match self {
            Curve::Line { origin, direction } => Curve::Line {
                origin: iso.transform_point(origin),
                direction: dir(direction),
            },
            Curve::Circle(c) => Curve::Circle(Circle {
                center: iso.transform_point(&c.center),
                normal: dir(&c.normal),
                x_axis: dir(&c.x_axis),
                radius: c.radius,
            }),
            Curve::Ellipse {
                center,
                normal,
                major_axis,
                major_radius,
                minor_radius,
            } => Curve::Ellipse {
                center: iso.transform_point(center),
                normal: dir(normal),
                major_axis: dir(major_axis),
                major_radius: *major_radius,
                minor_radius: *minor_radius,
            },
            Curve::Bezier { poles } => Curve::Bezier {
                poles: poles.iter().map(|p| iso.transform_point(p)).collect(),
            },
        }
    }
}

fn de_casteljau(poles: &[Point3<f64>], t: f64) -> Point3<f64> {
    if poles.is_empty() {
        return Point3::origin();
    }
    let mut work: Vec<Vector3<f64>> = poles.iter().map(|p| p.coords).collect();
    for level in 1..work.len() {
        for i in 0..work.len() - level {
            work[i] = work[i] * (1.0 - t) + work[i + 1] * t;
        }
    }
    Point3::from(work[0])
}
