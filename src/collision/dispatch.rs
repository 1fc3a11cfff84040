use std::collections::HashMap;
use std::fmt;

use log::error;

use crate::error::{CollisionError, CollisionResult};
use crate::objects::Body;
use crate::shapes::{ShapeFlags, ShapeKind};

use super::contact::Contact;
use super::generators;

/// Contact generator over two bodies. The normal points from the first body to the second.
pub type ContactFn = fn(&Body, &Body) -> Option<Contact>;

/// Maps each unordered shape pair, keyed by the OR of both shape flags,
/// to the function that generates its contact.
#[derive(Clone, Default)]
pub struct DispatchTable {
    entries: HashMap<ShapeFlags, ContactFn>,
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl DispatchTable {
    /// An empty table; every lookup fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table covering every pair except point vs point.
    pub fn new() -> Self {
        use ShapeKind::*;

        let mut table = Self::empty();
        table.register(Circle, Circle, circle_vs_circle);
        table.register(Circle, Point, circle_vs_circle);
        table.register(Aabb, Aabb, aabb_vs_aabb);
        table.register(Obb, Obb, obb_vs_obb);
        table.register(Obb, Aabb, obb_vs_obb);
        table.register(Aabb, Circle, aabb_vs_circle);
        table.register(Aabb, Point, aabb_vs_circle);
        table.register(Obb, Circle, obb_vs_circle);
        table.register(Obb, Point, obb_vs_circle);
        table.register(Polygon, Polygon, polygon_vs_polygon);
        table.register(Polygon, Aabb, polygon_vs_polygon);
        table.register(Polygon, Obb, polygon_vs_polygon);
        table.register(Polygon, Circle, polygon_vs_circle);
        table.register(Polygon, Point, polygon_vs_point);
        table
    }

    /// Installs `f` for the pair, replacing any previous entry.
    pub fn register(&mut self, a: ShapeKind, b: ShapeKind, f: ContactFn) {
        self.entries.insert(ShapeFlags::pair(a, b), f);
    }

    pub fn lookup(&self, a: ShapeKind, b: ShapeKind) -> Option<ContactFn> {
        self.entries.get(&ShapeFlags::pair(a, b)).copied()
    }

    pub fn supports(&self, a: ShapeKind, b: ShapeKind) -> bool {
        self.entries.contains_key(&ShapeFlags::pair(a, b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs the generator for the two bodies' shapes.
    pub fn collide(&self, a: &Body, b: &Body) -> CollisionResult<Option<Contact>> {
        let (kind_a, kind_b) = (a.kind(), b.kind());
        match self.lookup(kind_a, kind_b) {
            Some(f) => Ok(f(a, b)),
            None => {
                error!("unsupported shape pair {:?} vs {:?}", kind_a, kind_b);
                Err(CollisionError::UnsupportedShapePair { a: kind_a, b: kind_b })
            }
        }
    }
}

/// Calls `f` with the body matching `is_first` in front and flips the
/// result back when the arguments were swapped.
fn ordered(
    a: &Body,
    b: &Body,
    is_first: fn(ShapeKind) -> bool,
    f: impl Fn(&Body, &Body) -> Option<Contact>,
) -> Option<Contact> {
    if is_first(a.kind()) {
        f(a, b)
    } else {
        f(b, a).map(Contact::flipped)
    }
}

fn circle_vs_circle(a: &Body, b: &Body) -> Option<Contact> {
    generators::circle_circle(&a.as_circle()?, &b.as_circle()?)
}

fn aabb_vs_aabb(a: &Body, b: &Body) -> Option<Contact> {
    generators::aabb_aabb(&a.as_aabb()?, &b.as_aabb()?)
}

fn obb_vs_obb(a: &Body, b: &Body) -> Option<Contact> {
    generators::obb_obb(&a.as_obb()?, &b.as_obb()?)
}

fn aabb_vs_circle(a: &Body, b: &Body) -> Option<Contact> {
    ordered(a, b, |k| k == ShapeKind::Aabb, |fst, snd| {
        generators::aabb_circle(&fst.as_aabb()?, &snd.as_circle()?)
    })
}

fn obb_vs_circle(a: &Body, b: &Body) -> Option<Contact> {
    ordered(a, b, |k| k == ShapeKind::Obb, |fst, snd| {
        generators::obb_circle(&fst.as_obb()?, &snd.as_circle()?)
    })
}

fn polygon_vs_polygon(a: &Body, b: &Body) -> Option<Contact> {
    generators::polygon_polygon(&a.world_vertices()?, &b.world_vertices()?)
}

fn polygon_vs_circle(a: &Body, b: &Body) -> Option<Contact> {
    ordered(a, b, |k| k == ShapeKind::Polygon, |fst, snd| {
        generators::polygon_circle(&fst.world_vertices()?, &snd.as_circle()?)
    })
}

fn polygon_vs_point(a: &Body, b: &Body) -> Option<Contact> {
    ordered(a, b, |k| k == ShapeKind::Polygon, |fst, snd| {
        generators::polygon_point(&fst.world_vertices()?, snd.position())
    })
}
