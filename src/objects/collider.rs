use crate::shapes::{Shape, ShapeKind};

use super::body::BodyHandle;

/// Which of the collision system's two containers a body belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    #[default]
    Dynamic,
    Static,
}

/// Per-body collision flags plus the contacts recorded during the current frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub shape: Shape,
    /// Ghosts detect contacts but are never pushed or bounced.
    pub is_ghost: bool,
    pub motion: Motion,
    pub has_collided: bool,
    /// Bodies touched this frame, without duplicates. Reset every frame.
    pub collided_with: Vec<BodyHandle>,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            is_ghost: false,
            motion: Motion::Dynamic,
            has_collided: false,
            collided_with: Vec::new(),
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn ghost(mut self) -> Self {
        self.is_ghost = true;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn is_dynamic(&self) -> bool {
        self.motion == Motion::Dynamic
    }

    /// Marks a contact with `other`. Returns false if it was already recorded.
    pub fn record_collision(&mut self, other: BodyHandle) -> bool {
        self.has_collided = true;
        if self.collided_with.contains(&other) {
            return false;
        }
        self.collided_with.push(other);
        true
    }

    pub fn clear_collisions(&mut self) {
        self.has_collided = false;
        self.collided_with.clear();
    }
}
