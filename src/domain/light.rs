use crate::math::Vec3;

use super::validate::{
    validate_scalar, validate_unit_vector, validate_vec3_finite, validate_vec3_non_negative,
};

/// Coefficients of `1 / (a2 * d^2 + a1 * d + a0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialAttenuation {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl RadialAttenuation {
    pub const CONSTANT: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(a0: f64, a1: f64, a2: f64) -> Self {
        Self { a0, a1, a2 }
    }

    pub fn factor(&self, distance: f64) -> f64 {
        if distance.is_infinite() {
            return 1.0;
        }
        1.0 / ((self.a2 * distance * distance) + (self.a1 * distance) + self.a0)
    }
}

impl Default for RadialAttenuation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Point,
    /// `theta` is the cone half-angle in radians. A zero half-angle disables
    /// the cone so the light behaves like a point light.
    Spot {
        direction: Vec3,
        theta: f64,
        angular_a0: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub position: Vec3,
    pub attenuation: RadialAttenuation,
    pub kind: LightKind,
}

impl Light {
    pub fn point(position: Vec3, color: Vec3, attenuation: RadialAttenuation) -> Self {
        Self {
            color,
            position,
            attenuation,
            kind: LightKind::Point,
        }
    }

    pub fn spot(
        position: Vec3,
        color: Vec3,
        attenuation: RadialAttenuation,
        direction: Vec3,
        theta: f64,
        angular_a0: f64,
    ) -> Self {
        Self {
            color,
            position,
            attenuation,
            kind: LightKind::Spot {
                direction: direction.normalize(),
                theta,
                angular_a0,
            },
        }
    }

    /// Angular falloff for a surface lit along `to_light` (unit, surface
    /// toward light).
    pub fn angular_factor(&self, to_light: Vec3) -> f64 {
        match self.kind {
            LightKind::Point => 1.0,
            LightKind::Spot { theta, .. } if theta == 0.0 => 1.0,
            LightKind::Spot {
                direction,
                theta,
                angular_a0,
            } => {
                let s = direction.dot(-to_light);
                // Cones wider than 90 degrees admit s < 0, where powf is NaN.
                if s <= 0.0 || s < theta.cos() {
                    0.0
                } else {
                    s.powf(angular_a0)
                }
            }
        }
    }

    pub fn validate_physical(&self) -> Result<(), String> {
        validate_vec3_finite(self.position, "position")?;
        validate_vec3_non_negative(self.color, "color")?;

        let RadialAttenuation { a0, a1, a2 } = self.attenuation;
        validate_scalar(a0, "radial-a0")?;
        validate_scalar(a1, "radial-a1")?;
        validate_scalar(a2, "radial-a2")?;
        if a0 == 0.0 && a1 == 0.0 && a2 == 0.0 {
            return Err("radial attenuation constants must not all be 0".into());
        }

        if let LightKind::Spot {
            direction,
            theta,
            angular_a0,
        } = self.kind
        {
            validate_unit_vector(direction, "direction")?;
            if !theta.is_finite() {
                return Err(format!("theta must be finite, got {theta}"));
            }
            validate_scalar(angular_a0, "angular-a0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot_light(theta: f64) -> Light {
        Light::spot(
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::splat(1.0),
            RadialAttenuation::CONSTANT,
            Vec3::new(0.0, -1.0, 0.0),
            theta,
            2.0,
        )
    }

    #[test]
    fn validates_point_light() {
        let light = Light::point(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0), RadialAttenuation::default());
        assert!(light.validate_physical().is_ok());
    }

    #[test]
    fn rejects_all_zero_attenuation() {
        let light = Light::point(Vec3::ZERO, Vec3::splat(1.0), RadialAttenuation::new(0.0, 0.0, 0.0));
        assert!(light.validate_physical().is_err());
    }

    #[test]
    fn rejects_negative_color_component() {
        let light = Light::point(
            Vec3::ZERO,
            Vec3::new(-0.1, 0.8, 0.9),
            RadialAttenuation::CONSTANT,
        );
        assert!(light.validate_physical().is_err());
    }

    #[test]
    fn rejects_non_finite_theta() {
        let light = spot_light(f64::NAN);
        assert!(light.validate_physical().is_err());
    }

    #[test]
    fn radial_factor_follows_quadratic() {
        let attenuation = RadialAttenuation::new(1.0, 2.0, 3.0);
        assert!((attenuation.factor(2.0) - 1.0 / 17.0).abs() < 1e-12);
        assert_eq!(attenuation.factor(f64::INFINITY), 1.0);
    }

    #[test]
    fn zero_theta_spot_acts_as_point_light() {
        let light = spot_light(0.0);
        assert_eq!(light.angular_factor(Vec3::new(1.0, 0.0, 0.0)), 1.0);
        assert_eq!(light.angular_factor(Vec3::new(0.0, 1.0, 0.0)), 1.0);
    }

    #[test]
    fn outside_cone_is_dark() {
        let light = spot_light(10f64.to_radians());
        let off_axis = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert_eq!(light.angular_factor(off_axis), 0.0);
    }

    #[test]
    fn inside_cone_uses_angular_exponent() {
        let light = spot_light(60f64.to_radians());
        // Surface directly below the light: s = 1.
        assert!((light.angular_factor(Vec3::new(0.0, 1.0, 0.0)) - 1.0).abs() < 1e-12);
        let tilted = Vec3::new(0.5, 1.0, 0.0).normalize();
        let s = tilted.y;
        assert!((light.angular_factor(tilted) - s.powf(2.0)).abs() < 1e-12);
    }

    #[test]
    fn wide_cone_behind_light_is_dark_not_nan() {
        let light = Light::spot(
            Vec3::ZERO,
            Vec3::splat(1.0),
            RadialAttenuation::CONSTANT,
            Vec3::new(1.0, 0.0, 0.0),
            120f64.to_radians(),
            0.5,
        );
        // s = -0.25, inside the 120 degree cone but behind the spot's plane.
        let to_light = Vec3::new(0.25, 0.0, -(0.9375f64).sqrt());
        assert_eq!(light.angular_factor(to_light), 0.0);
    }
}
