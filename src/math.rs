use std::ops::{Add, Div, Mul, Neg, Sub};

use thiserror::Error;

/// Returned when a direction has to be derived from a zero-length vector.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("degenerate geometry: cannot normalize a zero-length vector")]
pub struct GeometryDegenerate;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::splat(0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub fn dot(self, rhs: Self) -> f64 {
        (self.x * rhs.x) + (self.y * rhs.y) + (self.z * rhs.z)
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            (self.y * rhs.z) - (self.z * rhs.y),
            (self.z * rhs.x) - (self.x * rhs.z),
            (self.x * rhs.y) - (self.y * rhs.x),
        )
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector comes back unchanged
    /// instead of turning into NaNs.
    pub fn normalize(self) -> Self {
        self.try_normalize().unwrap_or(self)
    }

    pub fn try_normalize(self) -> Result<Self, GeometryDegenerate> {
        let len = self.magnitude();
        if len == 0.0 || !len.is_finite() {
            return Err(GeometryDegenerate);
        }
        Ok(self / len)
    }

    pub fn distance(self, rhs: Self) -> f64 {
        (rhs - self).magnitude()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Vec3) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A half-line with a unit-length direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(self, t: f64) -> Vec3 {
        self.origin + (self.direction * t)
    }
}

/// Mirrors `direction` about the unit `normal`: `d - 2(d.n)n`.
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - (normal * (2.0 * direction.dot(normal)))
}
