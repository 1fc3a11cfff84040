use log::{debug, error, trace, warn};

use crate::collision::{Contact, ContactFn, DispatchTable};
use crate::config::SolverConfig;
use crate::error::{CollisionError, CollisionResult};
use crate::objects::{Body, BodyArena, BodyHandle};
use crate::raycast::{self, Ray, RayHit};
use crate::shapes::{Shape, ShapeKind};

use super::solver::{resolve_contact_penetration, resolve_contact_velocity};

/// Lifecycle of a [`CollisionSystem`]. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemState {
    Uninitialized,
    Initialized,
    Running,
    Shutdown,
}

/// Narrow-phase collision detection and resolution over registered bodies.
///
/// The system never owns bodies. It keeps handles into a [`BodyArena`] owned by
/// the caller, split into a dynamic and a static container. Each [`update`]
/// tests every dynamic pair and every dynamic/static pair, brute force, for the
/// configured number of solver iterations.
///
/// [`update`]: CollisionSystem::update
#[derive(Debug)]
pub struct CollisionSystem {
    state: SystemState,
    config: SolverConfig,
    iterations: u32,
    dispatch: DispatchTable,
    dynamic_bodies: Vec<BodyHandle>,
    static_bodies: Vec<BodyHandle>,
    collisions: usize,
}

impl CollisionSystem {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            state: SystemState::Uninitialized,
            config,
            iterations: config.iterations,
            dispatch: DispatchTable::empty(),
            dynamic_bodies: Vec::new(),
            static_bodies: Vec::new(),
            collisions: 0,
        }
    }

    /// Builds the dispatch table and resets the iteration count from the config.
    ///
    /// Calling it again rebuilds both, dropping any custom generators.
    /// Returns false once the system has been shut down.
    pub fn initialize(&mut self) -> bool {
        if self.state == SystemState::Shutdown {
            warn!("initialize() ignored: collision system has been shut down");
            return false;
        }

        self.dispatch = DispatchTable::new();
        self.iterations = self.config.iterations;
        if self.state == SystemState::Uninitialized {
            self.state = SystemState::Initialized;
        }
        debug!(
            "collision system initialized: {} generators, {} iterations",
            self.dispatch.len(),
            self.iterations
        );
        true
    }

    /// Tears the system down: both containers are emptied. Bodies themselves are
    /// untouched since they belong to the arena.
    pub fn shutdown(&mut self) {
        if self.state == SystemState::Shutdown {
            warn!("collision system already shut down");
            return;
        }
        self.dynamic_bodies.clear();
        self.static_bodies.clear();
        self.state = SystemState::Shutdown;
        debug!("collision system shut down");
    }

    pub fn state(&self) -> SystemState {
        self.state
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
    }

    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Installs or replaces the generator for a shape pair. Only meaningful after
    /// [`CollisionSystem::initialize`], which rebuilds the table.
    pub fn register_generator(&mut self, a: ShapeKind, b: ShapeKind, f: ContactFn) {
        self.dispatch.register(a, b, f);
    }

    /// Registers a body. Returns false if the handle is already registered.
    pub fn add_body(&mut self, handle: BodyHandle, is_dynamic: bool) -> bool {
        if self.contains(handle) {
            return false;
        }
        if is_dynamic {
            self.dynamic_bodies.push(handle);
        } else {
            self.static_bodies.push(handle);
        }
        debug!(
            "added {} body {:?}",
            if is_dynamic { "dynamic" } else { "static" },
            handle
        );
        true
    }

    /// Registers every body in the arena, classified by its collider's motion.
    pub fn add_bodies(&mut self, arena: &BodyArena) -> usize {
        let mut added = 0;
        for (handle, body) in arena.iter() {
            if self.add_body(handle, body.collider.is_dynamic()) {
                added += 1;
            }
        }
        added
    }

    /// Unregisters a body. Unknown handles are ignored and return false.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        let before = self.dynamic_bodies.len() + self.static_bodies.len();
        self.dynamic_bodies.retain(|h| *h != handle);
        self.static_bodies.retain(|h| *h != handle);
        let removed = before != self.dynamic_bodies.len() + self.static_bodies.len();
        if removed {
            debug!("removed body {:?}", handle);
        }
        removed
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.dynamic_bodies.contains(&handle) || self.static_bodies.contains(&handle)
    }

    pub fn dynamic_bodies(&self) -> &[BodyHandle] {
        &self.dynamic_bodies
    }

    pub fn static_bodies(&self) -> &[BodyHandle] {
        &self.static_bodies
    }

    /// Contacts resolved during the last update (first solver iteration only).
    pub fn collisions_this_frame(&self) -> usize {
        self.collisions
    }

    /// Runs one frame of detection and resolution.
    ///
    /// Handles whose bodies are gone from the arena are dropped first. If any
    /// registered pair has no contact generator the frame is aborted before any
    /// body is modified. Returns the number of contacts resolved.
    pub fn update(&mut self, arena: &mut BodyArena) -> CollisionResult<usize> {
        match self.state {
            SystemState::Uninitialized => return Err(CollisionError::NotInitialized),
            SystemState::Shutdown => return Err(CollisionError::ShutDown),
            SystemState::Initialized | SystemState::Running => {}
        }
        self.state = SystemState::Running;

        self.prune_stale_handles(arena);
        self.check_pairs_supported(arena)?;
        self.collisions = self.collide_all_bodies(arena)?;
        Ok(self.collisions)
    }

    /// Nearest body hit by the ray, ghosts included. Point bodies cannot be hit.
    pub fn ray_cast(&self, arena: &BodyArena, ray: &Ray) -> Option<(BodyHandle, RayHit)> {
        self.dynamic_bodies
            .iter()
            .chain(self.static_bodies.iter())
            .filter_map(|handle| {
                let body = arena.get(*handle)?;
                ray_cast_body(ray, body).map(|hit| (*handle, hit))
            })
            .min_by(|(_, a), (_, b)| a.time.total_cmp(&b.time))
    }

    fn prune_stale_handles(&mut self, arena: &BodyArena) {
        for list in [&mut self.dynamic_bodies, &mut self.static_bodies] {
            list.retain(|handle| {
                let alive = arena.contains_key(*handle);
                if !alive {
                    warn!("dropping handle {:?}: body no longer exists", handle);
                }
                alive
            });
        }
    }

    fn check_pairs_supported(&self, arena: &BodyArena) -> CollisionResult<()> {
        let kind = |handle: &BodyHandle| arena.get(*handle).map(Body::kind);
        for (i, a) in self.dynamic_bodies.iter().enumerate() {
            let Some(kind_a) = kind(a) else { continue };
            let others = self.dynamic_bodies[i + 1..]
                .iter()
                .chain(self.static_bodies.iter());
            for kind_b in others.filter_map(kind) {
                if !self.dispatch.supports(kind_a, kind_b) {
                    error!("unsupported shape pair {:?} vs {:?}", kind_a, kind_b);
                    return Err(CollisionError::UnsupportedShapePair { a: kind_a, b: kind_b });
                }
            }
        }
        Ok(())
    }

    fn collide_all_bodies(&self, arena: &mut BodyArena) -> CollisionResult<usize> {
        for handle in self.dynamic_bodies.iter().chain(self.static_bodies.iter()) {
            if let Some(body) = arena.get_mut(*handle) {
                body.collider.clear_collisions();
            }
        }

        let mut collisions = 0;
        for iteration in 0..self.iterations {
            let first_iteration = iteration == 0;
            for (i, &a) in self.dynamic_bodies.iter().enumerate() {
                let others = self.dynamic_bodies[i + 1..]
                    .iter()
                    .chain(self.static_bodies.iter());
                for &b in others {
                    if self.collide_pair(arena, a, b, first_iteration)? {
                        collisions += 1;
                    }
                }
            }
        }
        Ok(collisions)
    }

    /// Detects and resolves one pair. Returns true when the contact counts
    /// towards this frame's collisions.
    fn collide_pair(
        &self,
        arena: &mut BodyArena,
        a: BodyHandle,
        b: BodyHandle,
        first_iteration: bool,
    ) -> CollisionResult<bool> {
        let Some([body_a, body_b]) = arena.get_disjoint_mut([a, b]) else {
            return Ok(false);
        };
        let Some(contact) = self.dispatch.collide(body_a, body_b)? else {
            return Ok(false);
        };

        body_a.collider.record_collision(b);
        body_b.collider.record_collision(a);

        if body_a.collider.is_ghost || body_b.collider.is_ghost {
            trace!("ghost contact {:?} / {:?}", a, b);
            return Ok(false);
        }

        self.resolve(body_a, body_b, &contact, first_iteration);
        trace!(
            "contact {:?} / {:?}: normal {:?}, depth {:.4}",
            a,
            b,
            contact.normal,
            contact.penetration
        );
        Ok(first_iteration)
    }

    fn resolve(&self, a: &mut Body, b: &mut Body, contact: &Contact, first_iteration: bool) {
        resolve_contact_penetration(a, b, contact);
        if first_iteration {
            resolve_contact_velocity(a, b, contact, self.config.restitution);
        }
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn ray_cast_body(ray: &Ray, body: &Body) -> Option<RayHit> {
    match &body.collider.shape {
        Shape::Point => None,
        Shape::Circle => raycast::ray_cast_circle(ray, &body.as_circle()?),
        Shape::Aabb => raycast::ray_cast_aabb(ray, &body.as_aabb()?),
        Shape::Obb => raycast::ray_cast_obb(ray, &body.as_obb()?),
        Shape::Polygon(_) => raycast::ray_cast_polygon(ray, &body.world_vertices()?),
    }
}
