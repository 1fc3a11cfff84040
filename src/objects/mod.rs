pub mod body;
pub mod collider;
pub mod rigid_body;

pub use body::{Body, BodyArena, BodyHandle};
pub use collider::{Collider, Motion};
pub use rigid_body::RigidBody;
