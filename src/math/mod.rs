pub mod mat3;
pub mod transform;
pub mod vec2;
pub mod vec3;

pub use mat3::Mat3;
pub use transform::Transform;
pub use vec2::{Vec2, NEAR_ZERO};
pub use vec3::Vec3;

/// Real roots of `a*t^2 + b*t + c = 0`, smallest first.
///
/// Returns `None` when the discriminant is negative or the equation is not
/// quadratic (`a == 0`).
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < NEAR_ZERO {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || !discriminant.is_finite() {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t0 = (-b - sqrt_d) / (2.0 * a);
    let t1 = (-b + sqrt_d) / (2.0 * a);
    Some((t0.min(t1), t0.max(t1)))
}
