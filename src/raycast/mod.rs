//! Parametric ray intersection against segments, boxes, circles and polygons.
//!
//! A hit is reported as the ray parameter `t` (so the hit point is
//! `origin + t * direction`) together with that world-space point. Directions are
//! not normalized, so `t` is measured in multiples of the direction vector.

use crate::math::solve_quadratic;
use crate::math::vec2::{Vec2, NEAR_ZERO};
use crate::shapes::{Aabb, Circle, LineSegment, Obb, Polygon};

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.origin + self.direction * t
    }

    fn hit(&self, time: f64) -> RayHit {
        RayHit {
            time,
            point: self.point_at(time),
        }
    }
}

/// Result of a ray intersection test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Ray parameter of the intersection, always positive
    pub time: f64,
    /// The point of intersection in world space
    pub point: Vec2,
}

/// Ray against a segment, using the segment's cached normal.
/// Parallel rays and degenerate segments never hit.
pub fn ray_cast_line(ray: &Ray, segment: &LineSegment) -> Option<RayHit> {
    let denom = segment.normal.dot(ray.direction);
    if denom.abs() < NEAR_ZERO {
        return None;
    }

    let t = (segment.n_dot_p0 - segment.normal.dot(ray.origin)) / denom;
    if t <= 0.0 || !t.is_finite() {
        return None;
    }

    let hit = ray.hit(t);
    // Inside the segment the endpoints lie in opposite directions.
    if (hit.point - segment.p0).dot(hit.point - segment.p1) > 0.0 {
        return None;
    }
    Some(hit)
}

/// Nearest hit against the edges of a vertex loop.
pub fn ray_cast_polygon(ray: &Ray, vertices: &[Vec2]) -> Option<RayHit> {
    if vertices.len() < 2 {
        return None;
    }
    Polygon::edges(vertices)
        .iter()
        .filter_map(|edge| ray_cast_line(ray, edge))
        .min_by(|a, b| a.time.total_cmp(&b.time))
}

/// Nearest hit against the four edges of an oriented box.
pub fn ray_cast_obb(ray: &Ray, obb: &Obb) -> Option<RayHit> {
    ray_cast_polygon(ray, &obb.corners())
}

pub fn ray_cast_aabb(ray: &Ray, aabb: &Aabb) -> Option<RayHit> {
    ray_cast_polygon(ray, &aabb.corners())
}

/// Solves `|O + tD - C|^2 = r^2` and keeps the first root in front of the origin.
/// A ray starting inside the circle reports the exit point.
pub fn ray_cast_circle(ray: &Ray, circle: &Circle) -> Option<RayHit> {
    let to_origin = ray.origin - circle.center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * ray.direction.dot(to_origin);
    let c = to_origin.length_squared() - circle.radius * circle.radius;

    let (t0, t1) = solve_quadratic(a, b, c)?;
    let t = if t0 > 0.0 {
        t0
    } else if t1 > 0.0 {
        t1
    } else {
        return None;
    };
    Some(ray.hit(t))
}
