use crate::objects::Body;

/// Integrates the body's state forward in time using Semi-Implicit Euler.
///
/// The accumulated force is turned into an acceleration, velocity is updated and
/// damped by the body's drag, then the position moves with the new velocity.
/// Immovable bodies are left untouched.
pub fn integrate(body: &mut Body, dt: f64) {
    let rb = &mut body.rigid_body;
    if rb.inv_mass == 0.0 {
        // Static object, do not integrate
        return;
    }

    let acceleration = rb.acceleration * rb.inv_mass;
    rb.velocity += acceleration * dt;
    rb.velocity *= rb.drag;
    body.transform.position += rb.velocity * dt;

    // Clear force accumulator for the next step
    rb.clear_accumulators();
}

/// Applies gravity to every body and integrates it.
pub fn step<'a>(bodies: impl IntoIterator<Item = &'a mut Body>, dt: f64) {
    for body in bodies {
        body.rigid_body.apply_gravity();
        integrate(body, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Transform, Vec2};
    use crate::shapes::Shape;
    const EPSILON: f64 = 1e-9;

    fn circle_body(mass: f64) -> Body {
        Body::dynamic(Shape::Circle, Transform::identity(), mass)
    }

    #[test]
    fn test_integrate_linear_motion_no_force() {
        let mut body = circle_body(1.0);
        body.rigid_body.velocity = Vec2::new(10.0, -5.0);
        body.rigid_body.drag = 1.0;

        integrate(&mut body, 0.1);

        assert!((body.transform.position.x - 1.0).abs() < EPSILON);
        assert!((body.transform.position.y + 0.5).abs() < EPSILON);
        assert_eq!(body.rigid_body.velocity, Vec2::new(10.0, -5.0));
    }

    #[test]
    fn test_integrate_constant_force_with_drag() {
        let mut body = circle_body(2.0);
        body.rigid_body.add_force(Vec2::new(10.0, 0.0));
        // a = F/m = (5, 0); v = 0.5 * 0.99
        integrate(&mut body, 0.1);

        assert!((body.rigid_body.velocity.x - 0.495).abs() < EPSILON);
        assert!((body.transform.position.x - 0.0495).abs() < EPSILON);
        assert_eq!(body.rigid_body.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_static_object() {
        let mut body = Body::fixed(Shape::Aabb, Transform::new(Vec2::new(1.0, 1.0), 0.0));
        body.rigid_body.velocity = Vec2::new(1.0, 1.0);
        body.rigid_body.add_force(Vec2::new(10.0, 10.0));

        let initial_state = body.clone();
        integrate(&mut body, 0.1);

        assert_eq!(body, initial_state);
    }

    #[test]
    fn test_step_applies_gravity() {
        let mut bodies = vec![circle_body(1.0), circle_body(3.0)];
        for body in &mut bodies {
            body.rigid_body.gravity = Vec2::new(0.0, -10.0);
            body.rigid_body.drag = 1.0;
        }
        step(bodies.iter_mut(), 0.5);
        for body in &bodies {
            // Same acceleration regardless of mass.
            assert!((body.rigid_body.velocity.y + 5.0).abs() < EPSILON);
            assert!((body.transform.position.y + 2.5).abs() < EPSILON);
        }
    }
}
