use crate::math::{GeometryDegenerate, Vec3};

use super::material::Material;
use super::validate::{validate_scalar, validate_unit_vector, validate_vec3_finite};

/// Position of a primitive inside its scene. Two primitives with identical
/// geometry still have distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimitiveId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveKind {
    Sphere { center: Vec3, radius: f64 },
    Plane { point: Vec3, normal: Vec3 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub material: Material,
}

impl Primitive {
    pub fn sphere(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            kind: PrimitiveKind::Sphere { center, radius },
            material,
        }
    }

    /// The normal is normalized here, once; shading relies on it being unit.
    pub fn plane(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            kind: PrimitiveKind::Plane {
                point,
                normal: normal.normalize(),
            },
            material,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            PrimitiveKind::Sphere { .. } => "sphere",
            PrimitiveKind::Plane { .. } => "plane",
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: Vec3) -> Result<Vec3, GeometryDegenerate> {
        match self.kind {
            PrimitiveKind::Sphere { center, .. } => (point - center).try_normalize(),
            PrimitiveKind::Plane { normal, .. } => Ok(normal),
        }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        match self.kind {
            PrimitiveKind::Sphere { center, radius } => {
                validate_vec3_finite(center, "position")?;
                validate_scalar(radius, "radius")?;
            }
            PrimitiveKind::Plane { point, normal } => {
                validate_vec3_finite(point, "position")?;
                validate_unit_vector(normal, "normal")?;
            }
        }
        self.material.validate_physical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_normal_is_normalized_on_build() {
        let plane = Primitive::plane(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), Material::default());
        assert_eq!(plane.normal_at(Vec3::ZERO), Ok(Vec3::new(0.0, 1.0, 0.0)));
        assert!(plane.validate_physical().is_ok());
    }

    #[test]
    fn rejects_zero_plane_normal() {
        let plane = Primitive::plane(Vec3::ZERO, Vec3::ZERO, Material::default());
        assert!(plane.validate_physical().is_err());
    }

    #[test]
    fn sphere_normal_points_outward() {
        let sphere = Primitive::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Material::default());
        assert_eq!(
            sphere.normal_at(Vec3::new(0.0, 0.0, 4.0)),
            Ok(Vec3::new(0.0, 0.0, -1.0))
        );
    }

    #[test]
    fn zero_radius_sphere_has_degenerate_normal_at_center() {
        let sphere = Primitive::sphere(Vec3::ZERO, 0.0, Material::default());
        assert!(sphere.validate_physical().is_ok());
        assert_eq!(sphere.normal_at(Vec3::ZERO), Err(GeometryDegenerate));
    }

    #[test]
    fn rejects_negative_radius() {
        let sphere = Primitive::sphere(Vec3::ZERO, -1.0, Material::default());
        assert!(sphere.validate_physical().is_err());
    }
}
