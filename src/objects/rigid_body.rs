use crate::math::vec2::Vec2;

/// Fraction of velocity kept per integration step.
pub const DEFAULT_DRAG: f64 = 0.990;

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
    /// Reserved; the integrator does not rotate bodies.
    pub angular_velocity: f64,
    pub gravity: Vec2,
    pub drag: f64,
    /// 1.0 / mass (0.0 for immovable bodies)
    pub inv_mass: f64,
    /// Force accumulated since the last integration step. Scaled by the inverse
    /// mass when integrated, then cleared.
    pub acceleration: Vec2,
}

impl RigidBody {
    /// Creates a body of the given mass. A mass <= 0.0 makes the body immovable.
    pub fn new(mass: f64) -> Self {
        let inv_mass = if mass > 0.0 && mass.is_finite() {
            1.0 / mass
        } else {
            0.0
        };
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            gravity: Vec2::ZERO,
            drag: DEFAULT_DRAG,
            inv_mass,
            acceleration: Vec2::ZERO,
        }
    }

    pub fn immovable() -> Self {
        Self::new(0.0)
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mass of the body, `f64::INFINITY` when immovable.
    pub fn mass(&self) -> f64 {
        if self.inv_mass > 0.0 {
            1.0 / self.inv_mass
        } else {
            f64::INFINITY
        }
    }

    pub fn is_immovable(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn add_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Accumulates the gravity force `m * g`. Immovable bodies are unaffected.
    pub fn apply_gravity(&mut self) {
        if !self.is_immovable() {
            let force = self.gravity * self.mass();
            self.add_force(force);
        }
    }

    pub fn clear_accumulators(&mut self) {
        self.acceleration = Vec2::ZERO;
    }
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(1.0)
    }
}
