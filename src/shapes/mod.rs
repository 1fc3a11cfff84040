pub mod aabb;
pub mod circle;
pub mod line_segment;
pub mod obb;
pub mod polygon;

// Re-export the specific shape types
pub use aabb::Aabb;
pub use circle::Circle;
pub use line_segment::LineSegment;
pub use obb::Obb;
pub use polygon::Polygon;

use bitflags::bitflags;

/// The closed set of collision shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Circle,
    Aabb,
    Obb,
    Polygon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Point,
        ShapeKind::Circle,
        ShapeKind::Aabb,
        ShapeKind::Obb,
        ShapeKind::Polygon,
    ];

    /// The single bit identifying this kind.
    pub fn flag(self) -> ShapeFlags {
        match self {
            ShapeKind::Point => ShapeFlags::POINT,
            ShapeKind::Circle => ShapeFlags::CIRCLE,
            ShapeKind::Aabb => ShapeFlags::AABB,
            ShapeKind::Obb => ShapeFlags::OBB,
            ShapeKind::Polygon => ShapeFlags::POLYGON,
        }
    }
}

bitflags! {
    /// One bit per [`ShapeKind`]. OR-ing the flags of two kinds gives a key
    /// that is unique for every unordered pair.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShapeFlags: u32 {
        const POINT = 1 << 0;
        const CIRCLE = 1 << 1;
        const AABB = 1 << 2;
        const OBB = 1 << 3;
        const POLYGON = 1 << 4;
    }
}

impl ShapeFlags {
    /// Dispatch key of an unordered shape pair.
    pub fn pair(a: ShapeKind, b: ShapeKind) -> ShapeFlags {
        a.flag() | b.flag()
    }
}

/// Geometric shape of a collider. Sizes come from the owning transform's scale;
/// only polygons carry their own (local-space) geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point,
    Circle,
    Aabb,
    Obb,
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point => ShapeKind::Point,
            Shape::Circle => ShapeKind::Circle,
            Shape::Aabb => ShapeKind::Aabb,
            Shape::Obb => ShapeKind::Obb,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }
}
