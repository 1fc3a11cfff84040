use crate::math::vec2::Vec2;

/// A segment with a cached unit normal and `normal . p0`.
///
/// The normal is the edge direction rotated clockwise, so for a
/// counter-clockwise vertex loop it faces out of the polygon.
/// Fields are computed once in [`LineSegment::new`]; treat the value as immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p0: Vec2,
    pub p1: Vec2,
    pub normal: Vec2,
    pub n_dot_p0: f64,
}

impl LineSegment {
    pub fn new(p0: Vec2, p1: Vec2) -> Self {
        let normal = -(p1 - p0).perpendicular().normalize();
        Self {
            p0,
            p1,
            normal,
            n_dot_p0: normal.dot(p0),
        }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }

    /// Returns the direction vector of the line segment (from p0 to p1).
    pub fn direction(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// True when both endpoints coincide; such a segment has a zero normal.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec2::ZERO
    }

    /// Distance of `point` from the supporting line, positive on the normal side.
    pub fn signed_distance(&self, point: Vec2) -> f64 {
        self.normal.dot(point) - self.n_dot_p0
    }

    /// True when `point` is on the inner side (or on the line) of every segment.
    pub fn point_in_segments(point: Vec2, segments: &[LineSegment]) -> bool {
        !segments.is_empty() && segments.iter().all(|s| s.signed_distance(point) <= 0.0)
    }
}
