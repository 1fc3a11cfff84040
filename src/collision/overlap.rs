//! Boolean overlap tests. All bounds are inclusive: touching shapes overlap.

use crate::math::vec2::Vec2;
use crate::shapes::{Aabb, Circle, Obb};

pub fn point_in_circle(point: Vec2, circle: &Circle) -> bool {
    point.distance_squared(circle.center) <= circle.radius * circle.radius
}

pub fn point_in_aabb(point: Vec2, aabb: &Aabb) -> bool {
    let offset = (point - aabb.center).abs();
    offset.x <= aabb.half_extents.x && offset.y <= aabb.half_extents.y
}

/// Moves the point into the box frame and runs the axis-aligned test.
pub fn point_in_obb(point: Vec2, obb: &Obb) -> bool {
    point_in_aabb(obb.to_local(point), &obb.local_aabb())
}

pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let radii = a.radius + b.radius;
    a.center.distance_squared(b.center) <= radii * radii
}

pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    let offset = (b.center - a.center).abs();
    let extents = a.half_extents + b.half_extents;
    offset.x <= extents.x && offset.y <= extents.y
}

pub fn aabb_circle(aabb: &Aabb, circle: &Circle) -> bool {
    point_in_circle(aabb.clamp_point(circle.center), circle)
}

pub fn obb_circle(obb: &Obb, circle: &Circle) -> bool {
    let local = Circle::new(obb.to_local(circle.center), circle.radius);
    aabb_circle(&obb.local_aabb(), &local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn unit_box() -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_point_in_circle_inclusive() {
        let c = Circle::new(Vec2::new(1.0, 1.0), 1.0);
        assert!(point_in_circle(Vec2::new(2.0, 1.0), &c));
        assert!(point_in_circle(Vec2::new(1.2, 0.9), &c));
        assert!(!point_in_circle(Vec2::new(2.1, 1.0), &c));
    }

    #[test]
    fn test_point_in_aabb() {
        let b = unit_box();
        assert!(point_in_aabb(Vec2::new(1.0, -1.0), &b));
        assert!(point_in_aabb(Vec2::new(0.3, 0.3), &b));
        assert!(!point_in_aabb(Vec2::new(1.01, 0.0), &b));
    }

    #[test]
    fn test_point_in_obb() {
        // A square rotated 45 degrees reaches sqrt(2) along the x axis.
        let b = Obb::new(Vec2::ZERO, Vec2::new(1.0, 1.0), FRAC_PI_4);
        assert!(point_in_obb(Vec2::new(1.4, 0.0), &b));
        assert!(!point_in_obb(Vec2::new(0.9, 0.9), &b));
    }

    #[test]
    fn test_circle_circle() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        assert!(circle_circle(&a, &Circle::new(Vec2::new(2.0, 0.0), 1.0)));
        assert!(!circle_circle(&a, &Circle::new(Vec2::new(2.0, 0.1), 1.0)));
    }

    #[test]
    fn test_aabb_aabb() {
        let a = unit_box();
        assert!(aabb_aabb(&a, &Aabb::new(Vec2::new(2.0, 1.5), Vec2::new(1.0, 0.5))));
        assert!(!aabb_aabb(&a, &Aabb::new(Vec2::new(2.5, 0.0), Vec2::new(1.0, 1.0))));
    }

    #[test]
    fn test_aabb_circle() {
        let b = unit_box();
        // Near the corner: the clamped point (1, 1) is 0.707 away.
        assert!(aabb_circle(&b, &Circle::new(Vec2::new(1.5, 1.5), 0.75)));
        assert!(!aabb_circle(&b, &Circle::new(Vec2::new(1.5, 1.5), 0.7)));
        // Centre inside the box.
        assert!(aabb_circle(&b, &Circle::new(Vec2::ZERO, 0.1)));
    }

    #[test]
    fn test_obb_circle() {
        let b = Obb::new(Vec2::ZERO, Vec2::new(1.0, 1.0), FRAC_PI_4);
        assert!(obb_circle(&b, &Circle::new(Vec2::new(1.8, 0.0), 0.5)));
        assert!(!obb_circle(&b, &Circle::new(Vec2::new(2.0, 0.0), 0.5)));
    }
}
