use crate::math::vec2::Vec2;

use super::aabb::Aabb;

/// An oriented box: center, half extents along its local axes, and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    pub center: Vec2,
    pub half_extents: Vec2,
    pub rotation: f64,
}

impl Obb {
    pub fn new(center: Vec2, half_extents: Vec2, rotation: f64) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
            rotation,
        }
    }

    /// Local x and y axes in world space (unit length).
    pub fn axes(&self) -> [Vec2; 2] {
        let x_axis = Vec2::from_angle(self.rotation);
        [x_axis, x_axis.perpendicular()]
    }

    /// Axes scaled by the half extents.
    pub fn half_extent_vectors(&self) -> [Vec2; 2] {
        let [x_axis, y_axis] = self.axes();
        [x_axis * self.half_extents.x, y_axis * self.half_extents.y]
    }

    /// World-space corners in counter-clockwise order, matching [`Aabb::corners`].
    pub fn corners(&self) -> [Vec2; 4] {
        let [hx, hy] = self.half_extent_vectors();
        let c = self.center;
        [c - hx + hy, c - hx - hy, c + hx - hy, c + hx + hy]
    }

    /// World point to box-local coordinates.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        (point - self.center).rotate(-self.rotation)
    }

    /// Box-local point to world coordinates.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.center
    }

    /// The same box expressed in its own frame.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, self.half_extents)
    }
}

impl From<Aabb> for Obb {
    fn from(aabb: Aabb) -> Self {
        Obb::new(aabb.center, aabb.half_extents, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_obb_unrotated_matches_aabb() {
        let aabb = Aabb::new(Vec2::new(2.0, 3.0), Vec2::new(1.0, 0.5));
        let obb = Obb::from(aabb);
        for (a, b) in obb.corners().iter().zip(aabb.corners().iter()) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_obb_local_world_round_trip() {
        let obb = Obb::new(Vec2::new(-1.0, 4.0), Vec2::new(2.0, 1.0), PI / 3.0);
        let p = Vec2::new(0.7, -2.2);
        let q = obb.to_world(obb.to_local(p));
        assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-12);
    }

    #[test]
    fn test_obb_quarter_turn_swaps_extents() {
        let obb = Obb::new(Vec2::ZERO, Vec2::new(2.0, 1.0), PI / 2.0);
        let [hx, hy] = obb.half_extent_vectors();
        assert_abs_diff_eq!(hx.y, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hy.x, -1.0, epsilon = 1e-12);
    }
}
