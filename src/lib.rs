//! Narrow-phase collision detection and resolution for 2D rigid bodies.
//!
//! The composition layer owns every [`Body`] inside a [`BodyArena`]; the
//! [`CollisionSystem`] only keeps handles to them and, once per frame, tests
//! every dynamic body against every other dynamic and static body, computes
//! contact data for overlapping pairs and pushes them apart.

pub mod math;
pub mod shapes;
pub mod collision;
pub mod raycast;
pub mod objects;
pub mod integration;
pub mod world;
pub mod config;
pub mod error;

// Re-export key types for easier use
pub use math::{Mat3, Transform, Vec2, Vec3};
pub use shapes::{Aabb, Circle, LineSegment, Obb, Polygon, Shape, ShapeFlags, ShapeKind};
pub use collision::{Contact, DispatchTable};
pub use raycast::{Ray, RayHit};
pub use objects::{Body, BodyArena, BodyHandle, Collider, Motion, RigidBody};
pub use world::{CollisionSystem, SystemState};
pub use config::{ConfigError, SolverConfig};
pub use error::{CollisionError, CollisionResult};
