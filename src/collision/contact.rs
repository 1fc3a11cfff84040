use crate::math::vec2::Vec2;

/// Stores information about a contact between two shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Point of intersection in world coordinates.
    pub point: Vec2,
    /// Unit separation normal, pointing from the first shape towards the second.
    pub normal: Vec2,
    /// Overlap depth along the normal. Never negative.
    pub penetration: f64,
}

impl Contact {
    pub fn new(point: Vec2, normal: Vec2, penetration: f64) -> Self {
        Self {
            point,
            normal,
            penetration: penetration.max(0.0),
        }
    }

    /// The same contact seen from the other shape.
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }

    /// Translation that separates the second shape from the first.
    pub fn separation(&self) -> Vec2 {
        self.normal * self.penetration
    }
}
