// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An axis-aligned box defined by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Half extents are stored as absolute values.
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Aabb {
            center,
            half_extents: half_extents.abs(),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Corners in counter-clockwise order, starting top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let (c, h) = (self.center, self.half_extents);
        [
            Vec2::new(c.x - h.x, c.y + h.y),
            Vec2::new(c.x - h.x, c.y - h.y),
            Vec2::new(c.x + h.x, c.y - h.y),
            Vec2::new(c.x + h.x, c.y + h.y),
        ]
    }

    /// Nearest point of the box (boundary or interior) to `point`.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }

    /// Box enclosing a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min_pt, max_pt) = points.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (
                Vec2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vec2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Aabb::new((min_pt + max_pt) * 0.5, (max_pt - min_pt) * 0.5))
    }
}
