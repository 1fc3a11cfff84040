use super::mat3::Mat3;
use super::vec2::{Vec2, NEAR_ZERO};
use super::vec3::Vec3;

/// Placement of a body in the world.
///
/// `scale` doubles as shape size: a circle's radius is `scale.x` and a box's
/// half extents are `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Draw order / depth axis. Collision ignores it.
    pub depth: f64,
    pub scale: Vec2,
    pub rotation: f64, // Angle in radians
}

impl Transform {
    /// Creates a new transform with unit scale.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self {
            position,
            depth: 0.0,
            scale: Vec2::new(1.0, 1.0),
            rotation,
        }
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.rotation = degrees.to_radians();
        self
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Position including the depth axis.
    pub fn position3(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y, self.depth)
    }

    /// Applies rotation then translation to a point. Scale is not applied.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }

    /// Inverse of [`Transform::apply`]: inverse translation then inverse rotation.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        (point - self.position).rotate(-self.rotation)
    }

    /// Model-to-world matrix: translation * rotation * scale.
    pub fn matrix(&self) -> Mat3 {
        Mat3::translation(self.position) * Mat3::rotation(self.rotation) * Mat3::scale(self.scale)
    }

    /// World-to-model matrix. A zero scale axis collapses to zero instead of
    /// producing infinities.
    pub fn inverse_matrix(&self) -> Mat3 {
        let inv = |s: f64| if s.abs() < NEAR_ZERO { 0.0 } else { 1.0 / s };
        let inv_scale = Vec2::new(inv(self.scale.x), inv(self.scale.y));
        Mat3::scale(inv_scale) * Mat3::rotation(-self.rotation) * Mat3::translation(-self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
