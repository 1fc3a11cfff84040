use std::ops::{Add, Mul, Sub};

use super::vec2::Vec2;

/// A 3-component vector. Used as a homogeneous 2D point (`z = 1`) or
/// direction (`z = 0`) when multiplied by a [`Mat3`](super::Mat3), and as a
/// position with depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Homogeneous point: translation applies.
    pub fn point(p: Vec2) -> Self {
        Self::new(p.x, p.y, 1.0)
    }

    /// Homogeneous direction: translation does not apply.
    pub fn direction(d: Vec2) -> Self {
        Self::new(d.x, d.y, 0.0)
    }

    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}
