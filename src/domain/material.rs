use crate::math::Vec3;

use super::validate::{validate_scalar, validate_unit_color};

/// Surface response shared by every primitive kind.
///
/// `refractivity` and `ior` are carried so scene files round-trip, but the
/// shading pipeline never reads them: transmission is not rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub reflectivity: f64,
    pub refractivity: f64,
    pub ior: f64,
}

impl Material {
    pub const fn matte(diffuse_color: Vec3) -> Self {
        Self {
            diffuse_color,
            specular_color: Vec3::ZERO,
            reflectivity: 0.0,
            refractivity: 0.0,
            ior: 1.0,
        }
    }

    pub const fn with_specular(mut self, specular_color: Vec3) -> Self {
        self.specular_color = specular_color;
        self
    }

    pub const fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        validate_unit_color(self.diffuse_color, "diffuse_color")?;
        validate_unit_color(self.specular_color, "specular_color")?;
        validate_scalar(self.reflectivity, "reflectivity")?;
        if !self.refractivity.is_finite() || !self.ior.is_finite() {
            return Err("refractivity and ior must be finite".into());
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Vec3::splat(1.0))
    }
}
