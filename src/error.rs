use thiserror::Error;

use crate::shapes::ShapeKind;

/// Errors reported by [`crate::world::CollisionSystem`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    #[error("no contact generator registered for {a:?} vs {b:?}")]
    UnsupportedShapePair { a: ShapeKind, b: ShapeKind },

    #[error("collision system used before initialize()")]
    NotInitialized,

    #[error("collision system has been shut down")]
    ShutDown,
}

pub type CollisionResult<T> = Result<T, CollisionError>;
