use slotmap::{new_key_type, SlotMap};

use crate::math::transform::Transform;
use crate::math::vec2::Vec2;
use crate::shapes::{Aabb, Circle, Obb, Shape, ShapeKind};

use super::collider::{Collider, Motion};
use super::rigid_body::RigidBody;

new_key_type! {
    /// Stable, non-owning reference to a [`Body`] in a [`BodyArena`].
    pub struct BodyHandle;
}

/// Storage for bodies, owned by the caller. The collision system only keeps handles.
pub type BodyArena = SlotMap<BodyHandle, Body>;

/// Everything the collision system reads and writes for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
}

impl Body {
    pub fn new(transform: Transform, rigid_body: RigidBody, collider: Collider) -> Self {
        Self {
            transform,
            rigid_body,
            collider,
        }
    }

    /// A movable body of the given mass.
    pub fn dynamic(shape: Shape, transform: Transform, mass: f64) -> Self {
        Self::new(transform, RigidBody::new(mass), Collider::new(shape))
    }

    /// An immovable body registered with the static container.
    pub fn fixed(shape: Shape, transform: Transform) -> Self {
        Self::new(
            transform,
            RigidBody::immovable(),
            Collider::new(shape).with_motion(Motion::Static),
        )
    }

    pub fn ghost(mut self) -> Self {
        self.collider.is_ghost = true;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.collider.kind()
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// World-space circle for circle and point bodies. Radius is the x scale.
    pub fn as_circle(&self) -> Option<Circle> {
        match self.collider.shape {
            Shape::Circle => Some(Circle::new(self.position(), self.transform.scale.x.abs())),
            Shape::Point => Some(Circle::point(self.position())),
            _ => None,
        }
    }

    /// World-space box for axis-aligned bodies. Rotation is ignored.
    pub fn as_aabb(&self) -> Option<Aabb> {
        match self.collider.shape {
            Shape::Aabb => Some(Aabb::new(self.position(), self.transform.scale)),
            _ => None,
        }
    }

    /// World-space oriented box. Axis-aligned bodies become boxes with zero rotation.
    pub fn as_obb(&self) -> Option<Obb> {
        match self.collider.shape {
            Shape::Aabb => self.as_aabb().map(Obb::from),
            Shape::Obb => Some(Obb::new(
                self.position(),
                self.transform.scale,
                self.transform.rotation,
            )),
            _ => None,
        }
    }

    /// World-space vertex loop for polygon and box bodies.
    pub fn world_vertices(&self) -> Option<Vec<Vec2>> {
        match &self.collider.shape {
            Shape::Polygon(polygon) => Some(polygon.transformed_vertices(&self.transform.matrix())),
            Shape::Aabb | Shape::Obb => self.as_obb().map(|obb| obb.corners().to_vec()),
            _ => None,
        }
    }
}
