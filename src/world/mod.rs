pub mod collision_system;
pub mod solver;

pub use collision_system::{CollisionSystem, SystemState};
pub use solver::{resolve_contact_penetration, resolve_contact_velocity};
