//! Face geometry: parametric surfaces

use super::curve::arbitrary_axis;
use nalgebra::{Isometry3, Point3, Unit, Vector3};
use std::fmt;

/// Underlying kind of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Plane,
    Cylinder,
    Cone,
    Sphere,
    Torus,
    Freeform,
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plane => "Plane",
            Self::Cylinder => "Cylinder",
            Self::Cone => "Cone",
            Self::Sphere => "Sphere",
            Self::Torus => "Torus",
            Self::Freeform => "Freeform",
        };
        f.write_str(name)
    }
}

/// A surface carried by a face
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Plane {
        origin: Point3<f64>,
        normal: Unit<Vector3<f64>>,
    },
    Cylinder {
        origin: Point3<f64>,
        axis: Unit<Vector3<f64>>,
        radius: f64,
    },
    Cone {
        apex: Point3<f64>,
        axis: Unit<Vector3<f64>>,
        half_angle: f64,
    },
    Sphere {
        center: Point3<f64>,
        radius: f64,
    },
    Torus {
        center: Point3<f64>,
        axis: Unit<Vector3<f64>>,
        major_radius: f64,
        minor_radius: f64,
    },
    /// Surface known only by sample points
    Freeform { samples: Vec<Point3<f64>> },
}

impl Surface {
    /// Plane through `origin` with the given normal
    pub fn plane(origin: Point3<f64>, normal: Vector3<f64>) -> Self {
        Surface::Plane {
            origin,
            normal: Unit::new_normalize(normal),
        }
    }

    /// Cylinder around the axis through `origin`
    pub fn cylinder(origin: Point3<f64>, axis: Vector3<f64>, radius: f64) -> Self {
        Surface::Cylinder {
            origin,
            axis: Unit::new_normalize(axis),
            radius,
        }
    }

    /// Kind of this surface
    pub fn surface_type(&self) -> SurfaceType {
        match self {
            Surface::Plane { .. } => SurfaceType::Plane,
            Surface::Cylinder { .. } => SurfaceType::Cylinder,
            Surface::Cone { .. } => SurfaceType::Cone,
            Surface::Sphere { .. } => SurfaceType::Sphere,
            Surface::Torus { .. } => SurfaceType::Torus,
            Surface::Freeform { .. } => SurfaceType::Freeform,
        }
    }

    /// Radius of a cylindrical surface
    pub fn cylinder_radius(&self) -> Option<f64> {
        match self {
            Surface::Cylinder { radius, .. } => Some(*radius),
            _ => None,
        }
    }

    /// Point at the surface's parameter origin (u = 0, v = 0)
    pub fn origin_point(&self) -> Point3<f64> {
        match self {
            Surface::Plane { origin, .. } => *origin,
            Surface::Cylinder {
                origin,
                axis,
                radius,
            } => *origin + arbitrary_axis(axis).into_inner() * *radius,
            Surface::Cone { apex, .. } => *apex,
            Surface::Sphere { center, radius } => *center + Vector3::x() * *radius,
            Surface::Torus {
                center,
                axis,
                major_radius,
                minor_radius,
            } => *center + arbitrary_axis(axis).into_inner() * (major_radius + minor_radius),
            Surface::Freeform { samples } => samples.first().copied().unwrap_or_else(Point3::origin),
        }
    }

    /// Apply a rigid transform
    pub fn transformed(&self, iso: &Isometry3<f64>) -> Surface {
        let dir = |v: &Unit<Vector3<f64>>| Unit::new_unchecked(iso.rotation * v.into_inner());
        match self {
            Surface::Plane { origin, normal } => Surface::Plane {
                origin: iso.transform_point(origin),
                normal: dir(normal),
            },
            Surface::Cylinder {
                origin,
                axis,
                radius,
            } => Surface::Cylinder {
                origin: iso.transform_point(origin),
                axis: dir(axis),
                radius: *radius,
            },
            Surface::Cone {
                apex,
                axis,
                half_angle,
            } => Surface::Cone {
                apex: iso.transform_point(apex),
                axis: dir(axis),
                half_angle: *half_angle,
            },
            Surface::Sphere { center, radius } => Surface::Sphere {
                center: iso.transform_point(center),
                radius: *radius,
            },
            Surface::Torus {
                center,
                axis,
                major_radius,
                minor_radius,
            } => Surface::Torus {
                center: iso.transform_point(center),
                axis: dir(axis),
                major_radius: *major_radius,
                minor_radius: *minor_radius,
            },
            Surface::Freeform { samples } => Surface::Freeform {
                samples: samples.iter().map(|p| iso.transform_point(p)).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_types() {
        assert_eq!(
            Surface::plane(Point3::origin(), Vector3::z()).surface_type(),
            SurfaceType::Plane
        );
        assert_eq!(
            Surface::cylinder(Point3::origin(), Vector3::z(), 3.0).surface_type(),
            SurfaceType::Cylinder
        );
        assert_eq!(SurfaceType::Freeform.to_string(), "Freeform");
    }

    #[test]
    fn test_cylinder_origin_point_on_surface() {
        let cyl = Surface::cylinder(Point3::new(1.0, 1.0, 0.0), Vector3::z(), 3.0);
        let p = cyl.origin_point();
        let radial = Vector3::new(p.x - 1.0, p.y - 1.0, 0.0);
        assert!((radial.norm() - 3.0).abs() < 1e-12);
        assert_eq!(cyl.cylinder_radius(), Some(3.0));
    }

    #[test]
    fn test_plane_has_no_radius() {
        assert_eq!(Surface::plane(Point3::origin(), Vector3::z()).cylinder_radius(), None);
    }

    #[test]
    fn test_cylinder_transformed_keeps_radius() {
        let cyl = Surface::cylinder(Point3::origin(), Vector3::z(), 2.5);
        let iso = Isometry3::translation(5.0, 0.0, 0.0);
        match cyl.transformed(&iso) {
            Surface::Cylinder { origin, radius, .. } => {
                assert_eq!(origin, Point3::new(5.0, 0.0, 0.0));
                assert_eq!(radius, 2.5);
            }
            other => panic!("unexpected surface {other:?}"),
        }
    }
}
