use crate::math::vec2::{Vec2, NEAR_ZERO};
use crate::shapes::{Aabb, Circle, LineSegment, Obb, Polygon};

use super::contact::Contact;
use super::overlap::{point_in_aabb, point_in_obb};

/// Vertices whose depth differs by less than this share the deepest contact.
const TIE_EPSILON: f64 = 1e-9;

/// Checks for collision between two circles.
/// The normal points from `a` to `b`; coincident centres fall back to `(0, 1)`.
pub fn circle_circle(a: &Circle, b: &Circle) -> Option<Contact> {
    let dist_vec = b.center - a.center;
    let radii_sum = a.radius + b.radius;
    if dist_vec.length_squared() > radii_sum * radii_sum {
        return None;
    }

    let distance = dist_vec.length();
    let normal = if distance > NEAR_ZERO {
        dist_vec * (1.0 / distance)
    } else {
        Vec2::UP
    };

    Some(Contact::new(
        a.center + normal * a.radius,
        normal,
        radii_sum - distance,
    ))
}

/// Box against circle, normal from the box towards the circle.
///
/// With the centre inside the box the normal is the axis of least overlap and the
/// contact point is the circle centre. Otherwise the contact point is the nearest
/// point on the box.
pub fn aabb_circle(aabb: &Aabb, circle: &Circle) -> Option<Contact> {
    let offset = circle.center - aabb.center;

    if point_in_aabb(circle.center, aabb) {
        let pen = aabb.half_extents - offset.abs();
        let (normal, depth) = if pen.x < pen.y {
            (Vec2::new(offset.x.signum(), 0.0), pen.x)
        } else {
            (Vec2::new(0.0, offset.y.signum()), pen.y)
        };
        return Some(Contact::new(circle.center, normal, depth + circle.radius));
    }

    let nearest = aabb.clamp_point(circle.center);
    let to_center = circle.center - nearest;
    let distance = to_center.length();
    if distance > circle.radius {
        return None;
    }
    let normal = to_center.try_normalize()?;
    Some(Contact::new(nearest, normal, circle.radius - distance))
}

/// Oriented box against circle, solved in the box frame.
pub fn obb_circle(obb: &Obb, circle: &Circle) -> Option<Contact> {
    let local = Circle::new(obb.to_local(circle.center), circle.radius);
    let contact = aabb_circle(&obb.local_aabb(), &local)?;
    Some(Contact::new(
        obb.to_world(contact.point),
        contact.normal.rotate(obb.rotation),
        contact.penetration,
    ))
}

/// Axis-aligned boxes. The normal is the axis of least penetration, pointing from `a` to `b`.
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> Option<Contact> {
    let d = b.center - a.center;
    let pen = a.half_extents + b.half_extents - d.abs();
    if pen.x < 0.0 || pen.y < 0.0 {
        return None;
    }

    let (normal, depth) = if pen.x <= pen.y {
        (Vec2::new(sign(d.x), 0.0), pen.x)
    } else {
        (Vec2::new(0.0, sign(d.y)), pen.y)
    };

    let point = corner_inside(&b.corners(), |p| point_in_aabb(p, a))
        .or_else(|| corner_inside(&a.corners(), |p| point_in_aabb(p, b)))
        .unwrap_or_else(|| {
            let lo = Vec2::new(a.min().x.max(b.min().x), a.min().y.max(b.min().y));
            let hi = Vec2::new(a.max().x.min(b.max().x), a.max().y.min(b.max().y));
            (lo + hi) * 0.5
        });

    Some(Contact::new(point, normal, depth))
}

/// Separating axis test over the four face normals of two oriented boxes.
pub fn obb_obb(a: &Obb, b: &Obb) -> Option<Contact> {
    let d = b.center - a.center;
    let extents_a = a.half_extent_vectors();
    let extents_b = b.half_extent_vectors();
    let [ax, ay] = a.axes();
    let [bx, by] = b.axes();

    let mut best = None;
    for axis in [ax, ay, bx, by] {
        let distance = d.dot(axis).abs();
        let extent: f64 = extents_a
            .iter()
            .chain(extents_b.iter())
            .map(|h| h.dot(axis).abs())
            .sum();
        let overlap = extent - distance;
        if overlap < 0.0 {
            return None;
        }
        keep_least_overlap(&mut best, overlap, axis);
    }

    let (min_overlap, best_axis) = best?;
    let normal = if d.dot(best_axis) < 0.0 { -best_axis } else { best_axis };
    let point = corner_inside(&b.corners(), |p| point_in_obb(p, a))
        .or_else(|| corner_inside(&a.corners(), |p| point_in_obb(p, b)))
        .unwrap_or_else(|| (a.center + b.center) * 0.5);

    Some(Contact::new(point, normal, min_overlap))
}

/// Separating axis test for two convex polygons given in world space.
///
/// The normal points from `a` to `b` (by centroid). The contact point is the vertex
/// of `b` that reaches deepest into `a` along the normal; tied vertices are averaged.
/// Returns `None` for polygons with no enclosed area.
pub fn polygon_polygon(a: &[Vec2], b: &[Vec2]) -> Option<Contact> {
    if is_flat(a) || is_flat(b) {
        return None;
    }

    let mut best = None;
    for axis in edge_axes(a).chain(edge_axes(b)) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap < 0.0 {
            // Separating axis found, no collision
            return None;
        }
        keep_least_overlap(&mut best, overlap, axis);
    }

    let (min_overlap, mut normal) = best?;
    if (Polygon::centroid(b) - Polygon::centroid(a)).dot(normal) < 0.0 {
        normal = -normal;
    }

    Some(Contact::new(deepest_point(b, normal), normal, min_overlap))
}

/// Convex polygon against circle, normal from the polygon towards the circle.
///
/// Tests every edge normal plus the axis from the closest vertex to the circle centre.
pub fn polygon_circle(vertices: &[Vec2], circle: &Circle) -> Option<Contact> {
    if is_flat(vertices) {
        return None;
    }

    let closest_vertex = vertices
        .iter()
        .copied()
        .min_by(|p, q| {
            p.distance_squared(circle.center)
                .total_cmp(&q.distance_squared(circle.center))
        })?;
    let vertex_axis = (circle.center - closest_vertex).try_normalize();

    let mut min_overlap = f64::INFINITY;
    let mut best_axis = None;
    for axis in edge_axes(vertices).chain(vertex_axis) {
        let (min_p, max_p) = project(vertices, axis);
        let center_proj = circle.center.dot(axis);
        let (min_c, max_c) = (center_proj - circle.radius, center_proj + circle.radius);

        let overlap = (max_p - min_c).min(max_c - min_p);
        if overlap < 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            best_axis = Some(axis);
        }
    }

    let mut normal = best_axis?;
    if (circle.center - Polygon::centroid(vertices)).dot(normal) < 0.0 {
        normal = -normal;
    }

    Some(Contact::new(
        circle.center - normal * circle.radius,
        normal,
        min_overlap,
    ))
}

/// Point inside a convex polygon, normal along the outward normal of the nearest edge.
pub fn polygon_point(vertices: &[Vec2], point: Vec2) -> Option<Contact> {
    if is_flat(vertices) {
        return None;
    }
    let area = Polygon::signed_area(vertices);
    // Clockwise loops have inward edge normals.
    let winding = area.signum();

    let mut best: Option<(f64, Vec2)> = None;
    for edge in Polygon::edges(vertices) {
        if edge.is_degenerate() {
            continue;
        }
        let distance = winding * edge.signed_distance(point);
        if distance > 0.0 {
            return None;
        }
        if best.map_or(true, |(d, _)| distance > d) {
            best = Some((distance, edge.normal * winding));
        }
    }

    let (distance, normal) = best?;
    Some(Contact::new(point, normal, -distance))
}

/// Fewer than three vertices or zero enclosed area.
fn is_flat(vertices: &[Vec2]) -> bool {
    Polygon::signed_area(vertices).abs() < NEAR_ZERO
}

fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn corner_inside(corners: &[Vec2; 4], inside: impl Fn(Vec2) -> bool) -> Option<Vec2> {
    corners.iter().copied().find(|p| inside(*p))
}

/// Unit edge normals of a vertex loop, skipping zero-length edges.
fn edge_axes(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    Polygon::edges(vertices)
        .into_iter()
        .filter(|edge| !edge.is_degenerate())
        .map(|edge: LineSegment| edge.normal)
}

/// Keeps the axis of least overlap. Overlaps within `TIE_EPSILON` of each other are
/// settled by [`precedes`], so the pick does not depend on which shape came first.
fn keep_least_overlap(best: &mut Option<(f64, Vec2)>, overlap: f64, axis: Vec2) {
    match *best {
        None => *best = Some((overlap, axis)),
        Some((least, current)) if (overlap - least).abs() <= TIE_EPSILON => {
            let axis = if precedes(axis, current) { axis } else { current };
            *best = Some((least.min(overlap), axis));
        }
        Some((least, _)) if overlap < least => *best = Some((overlap, axis)),
        Some(_) => {}
    }
}

/// Total order on axis lines: fold each axis into `x > 0` (or `x = 0, y > 0`),
/// then prefer the larger x, then the larger y.
fn precedes(candidate: Vec2, current: Vec2) -> bool {
    let (c, b) = (canonical_axis(candidate), canonical_axis(current));
    if (c.x - b.x).abs() > TIE_EPSILON {
        c.x > b.x
    } else {
        c.y > b.y + TIE_EPSILON
    }
}

fn canonical_axis(axis: Vec2) -> Vec2 {
    if axis.x < -TIE_EPSILON || (axis.x.abs() <= TIE_EPSILON && axis.y < 0.0) {
        -axis
    } else {
        axis
    }
}

/// Projects vertices onto an axis and returns the min/max interval.
fn project(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    vertices
        .iter()
        .map(|v| v.dot(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}

fn deepest_point(vertices: &[Vec2], normal: Vec2) -> Vec2 {
    let (min_proj, _) = project(vertices, normal);
    let (sum, count) = vertices
        .iter()
        .filter(|v| v.dot(normal) - min_proj < TIE_EPSILON)
        .fold((Vec2::ZERO, 0usize), |(sum, n), v| (sum + *v, n + 1));
    if count == 0 {
        Polygon::centroid(vertices)
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    const EPSILON: f64 = 1e-9;

    fn square(center: Vec2, half: f64) -> Vec<Vec2> {
        Aabb::new(center, Vec2::new(half, half)).corners().to_vec()
    }

    #[test]
    fn test_circle_circle_colliding() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(1.5, 0.0), 1.0);
        let c = circle_circle(&a, &b).unwrap();
        assert!((c.normal.x - 1.0).abs() < EPSILON);
        assert!(c.normal.y.abs() < EPSILON);
        assert!((c.penetration - 0.5).abs() < EPSILON);
        assert!((c.point.x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_circle_no_collision() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(3.0, 0.0), 1.0);
        assert!(circle_circle(&a, &b).is_none());
    }

    #[test]
    fn test_circle_circle_touching_has_zero_depth() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(2.0, 0.0), 1.0);
        let c = circle_circle(&a, &b).unwrap();
        assert!(c.penetration.abs() < EPSILON);
    }

    #[test]
    fn test_circle_circle_concentric() {
        let a = Circle::new(Vec2::ZERO, 2.0);
        let b = Circle::new(Vec2::ZERO, 1.0);
        let c = circle_circle(&a, &b).unwrap();
        assert!((c.penetration - 3.0).abs() < EPSILON);
        assert_eq!(c.normal, Vec2::UP);
        assert!(c.normal.is_finite());
    }

    #[test]
    fn test_aabb_circle_outside() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let c = aabb_circle(&b, &Circle::new(Vec2::new(1.5, 0.0), 1.0)).unwrap();
        assert_abs_diff_eq!(c.normal.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.penetration, 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(c.point.x, 1.0, epsilon = EPSILON);
        assert!(aabb_circle(&b, &Circle::new(Vec2::new(2.5, 0.0), 1.0)).is_none());
    }

    #[test]
    fn test_aabb_circle_center_inside() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 1.0));
        let c = aabb_circle(&b, &Circle::new(Vec2::new(0.5, -0.75), 0.5)).unwrap();
        // y overlap 0.25 is smaller than x overlap 1.5, offset is downwards.
        assert_abs_diff_eq!(c.normal.y, -1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.penetration, 0.75, epsilon = EPSILON);
        assert_eq!(c.point, Vec2::new(0.5, -0.75));
    }

    #[test]
    fn test_obb_circle_rotated() {
        let obb = Obb::new(Vec2::ZERO, Vec2::new(1.0, 1.0), FRAC_PI_4);
        let c = obb_circle(&obb, &Circle::new(Vec2::new(0.0, 1.6), 0.5)).unwrap();
        // Nearest feature is the top corner at (0, sqrt(2)).
        assert_abs_diff_eq!(c.normal.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.normal.y, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.point.y, 2f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(c.penetration, 0.5 - (1.6 - 2f64.sqrt()), epsilon = 1e-9);
    }

    #[test]
    fn test_aabb_aabb_min_axis() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(-1.5, 0.2), Vec2::new(1.0, 1.0));
        let c = aabb_aabb(&a, &b).unwrap();
        assert_eq!(c.normal, Vec2::new(-1.0, 0.0));
        assert_abs_diff_eq!(c.penetration, 0.5, epsilon = EPSILON);
        assert!(point_in_aabb(c.point, &a));
        assert!(aabb_aabb(&a, &Aabb::new(Vec2::new(0.0, 2.5), Vec2::new(1.0, 0.4))).is_none());
    }

    #[test]
    fn test_aabb_aabb_contained_uses_centre_of_overlap() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let b = Aabb::new(Vec2::ZERO, Vec2::new(3.0, 0.5));
        let c = aabb_aabb(&a, &b).unwrap();
        // No corner of either box is inside the other.
        assert_eq!(c.point, Vec2::ZERO);
        assert_eq!(c.normal, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_obb_obb_agrees_with_aabb_aabb() {
        let cases = [
            (Vec2::new(1.2, 0.4), Vec2::new(0.5, 1.0)),
            (Vec2::new(-0.3, -1.7), Vec2::new(1.0, 1.0)),
            (Vec2::new(2.1, 0.0), Vec2::new(1.0, 0.2)),
            (Vec2::new(0.0, 0.0), Vec2::new(0.25, 0.25)),
        ];
        let a = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        for (center, half) in cases {
            let b = Aabb::new(center, half);
            let axis_aligned = aabb_aabb(&a, &b);
            let oriented = obb_obb(&Obb::from(a), &Obb::from(b));
            assert_eq!(axis_aligned.is_some(), oriented.is_some());
            if let (Some(p), Some(q)) = (axis_aligned, oriented) {
                assert_abs_diff_eq!(p.penetration, q.penetration, epsilon = EPSILON);
                assert_abs_diff_eq!(p.normal.x, q.normal.x, epsilon = EPSILON);
                assert_abs_diff_eq!(p.normal.y, q.normal.y, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_obb_obb_rotated_separation() {
        let a = Obb::new(Vec2::ZERO, Vec2::new(1.0, 1.0), 0.0);
        // Diamond whose left corner is at x = 2.5 - sqrt(2) = 1.086.
        let b = Obb::new(Vec2::new(2.5, 0.0), Vec2::new(1.0, 1.0), FRAC_PI_4);
        assert!(obb_obb(&a, &b).is_none());

        let b = Obb::new(Vec2::new(2.3, 0.0), Vec2::new(1.0, 1.0), FRAC_PI_4);
        let c = obb_obb(&a, &b).unwrap();
        assert_abs_diff_eq!(c.normal.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.penetration, 1.0 - (2.3 - 2f64.sqrt()), epsilon = EPSILON);
        assert!(point_in_obb(c.point, &a));
    }

    #[test]
    fn test_polygon_polygon_overlap_and_symmetry() {
        let a = square(Vec2::ZERO, 1.0);
        let b = Polygon::regular(5)
            .transformed(&crate::math::Transform::new(Vec2::new(1.6, 0.3), 0.2).with_scale(Vec2::new(2.0, 2.0)).matrix())
            .vertices;
        let ab = polygon_polygon(&a, &b).unwrap();
        let ba = polygon_polygon(&b, &a).unwrap();
        assert_abs_diff_eq!(ab.penetration, ba.penetration, epsilon = EPSILON);
        assert_abs_diff_eq!(ab.normal.x, -ba.normal.x, epsilon = EPSILON);
        assert_abs_diff_eq!(ab.normal.y, -ba.normal.y, epsilon = EPSILON);
        assert!(ab.normal.x > 0.0);
    }

    #[test]
    fn test_polygon_polygon_tied_axes_are_symmetric() {
        // Equal overlap on x and y; b's loop starts on a different edge than a's.
        let a = square(Vec2::ZERO, 1.0);
        let mut b = square(Vec2::new(1.5, 1.5), 1.0);
        b.rotate_left(1);

        let ab = polygon_polygon(&a, &b).unwrap();
        let ba = polygon_polygon(&b, &a).unwrap();
        assert!((ab.normal + ba.normal).length() < EPSILON);
        assert_abs_diff_eq!(ab.normal.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(ab.penetration, 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(ba.penetration, 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_obb_obb_tied_axes_are_symmetric() {
        let a = Obb::new(Vec2::ZERO, Vec2::new(1.0, 1.0), 0.0);
        let b = Obb::new(Vec2::new(1.5, 1.5), Vec2::new(1.0, 1.0), std::f64::consts::FRAC_PI_2);

        let ab = obb_obb(&a, &b).unwrap();
        let ba = obb_obb(&b, &a).unwrap();
        assert!((ab.normal + ba.normal).length() < EPSILON);
        assert_abs_diff_eq!(ab.normal.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(ab.penetration, ba.penetration, epsilon = EPSILON);
    }

    #[test]
    fn test_polygon_polygon_squares() {
        let a = square(Vec2::ZERO, 1.0);
        let b = square(Vec2::new(1.5, 0.5), 1.0);
        let c = polygon_polygon(&a, &b).unwrap();
        assert_abs_diff_eq!(c.penetration, 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(c.normal.x, 1.0, epsilon = EPSILON);
        // Left edge of b is the deepest; its two vertices are averaged.
        assert_abs_diff_eq!(c.point.x, 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(c.point.y, 0.5, epsilon = EPSILON);

        assert!(polygon_polygon(&a, &square(Vec2::new(2.1, 0.0), 1.0)).is_none());
    }

    #[test]
    fn test_polygon_polygon_degenerate() {
        let a = square(Vec2::ZERO, 1.0);
        let line = vec![Vec2::ZERO, Vec2::new(1.0, 0.0)];
        assert!(polygon_polygon(&a, &line).is_none());
        let collapsed = vec![Vec2::ZERO; 4];
        assert!(polygon_polygon(&a, &collapsed).is_none());
    }

    #[test]
    fn test_polygon_circle() {
        let a = square(Vec2::ZERO, 1.0);
        let c = polygon_circle(&a, &Circle::new(Vec2::new(0.0, 1.5), 1.0)).unwrap();
        assert_abs_diff_eq!(c.normal.y, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.penetration, 0.5, epsilon = EPSILON);
        assert_abs_diff_eq!(c.point.y, 0.5, epsilon = EPSILON);
        assert!(polygon_circle(&a, &Circle::new(Vec2::new(1.8, 1.8), 1.0)).is_none());
    }

    #[test]
    fn test_polygon_point() {
        let a = square(Vec2::ZERO, 1.0);
        let c = polygon_point(&a, Vec2::new(0.8, 0.1)).unwrap();
        assert_abs_diff_eq!(c.normal.x, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(c.penetration, 0.2, epsilon = EPSILON);
        assert!(polygon_point(&a, Vec2::new(1.2, 0.0)).is_none());

        let mut clockwise = a.clone();
        clockwise.reverse();
        let c = polygon_point(&clockwise, Vec2::new(0.8, 0.1)).unwrap();
        assert_abs_diff_eq!(c.normal.x, 1.0, epsilon = EPSILON);
    }
}
