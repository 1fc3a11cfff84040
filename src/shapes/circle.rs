use crate::math::vec2::Vec2;

/// A circle in world space. A point is a circle of radius zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Negative radii are clamped to zero.
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn point(center: Vec2) -> Self {
        Self { center, radius: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0);
        assert_eq!(c.center, Vec2::new(1.0, 2.0));
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn test_circle_negative_radius_clamped() {
        assert_eq!(Circle::new(Vec2::ZERO, -1.0).radius, 0.0);
        assert_eq!(Circle::point(Vec2::ZERO).radius, 0.0);
    }
}
