use crate::collision::Contact;
use crate::objects::Body;

/// Inverse-mass share of each body, or `None` when neither can move.
fn mass_fractions(a: &Body, b: &Body) -> Option<(f64, f64)> {
    let total = a.rigid_body.inv_mass + b.rigid_body.inv_mass;
    if total <= 0.0 {
        return None;
    }
    Some((a.rigid_body.inv_mass / total, b.rigid_body.inv_mass / total))
}

/// Pushes the bodies apart along the contact normal, split by inverse mass,
/// then clears both force accumulators.
///
/// Returns false (and changes nothing) when both bodies are immovable.
pub fn resolve_contact_penetration(a: &mut Body, b: &mut Body, contact: &Contact) -> bool {
    let Some((fraction_a, fraction_b)) = mass_fractions(a, b) else {
        return false;
    };

    let separation = contact.separation();
    a.transform.position -= separation * fraction_a;
    b.transform.position += separation * fraction_b;

    a.rigid_body.clear_accumulators();
    b.rigid_body.clear_accumulators();
    true
}

/// Applies a restitution impulse along the contact normal if the bodies approach
/// each other. Returns true when velocities were changed.
pub fn resolve_contact_velocity(
    a: &mut Body,
    b: &mut Body,
    contact: &Contact,
    restitution: f64,
) -> bool {
    let Some((fraction_a, fraction_b)) = mass_fractions(a, b) else {
        return false;
    };

    let relative_velocity = b.rigid_body.velocity - a.rigid_body.velocity;
    let separating_speed = relative_velocity.dot(contact.normal);
    // If objects are already moving apart, no impulse needed
    if separating_speed >= 0.0 {
        return false;
    }

    let impulse = contact.normal * (-(1.0 + restitution) * separating_speed);
    a.rigid_body.velocity -= impulse * fraction_a;
    b.rigid_body.velocity += impulse * fraction_b;
    true
}
