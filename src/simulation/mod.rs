//! WorldCore - owns the physics universe, the boundary walls, the
//! registration table and the per-frame step-and-sync pass.
//!
//! The host page drives this from its animation-frame loop:
//! `resize` on layout changes, `register_body`/`unregister_body` as elements
//! mount and unmount, `step` once per frame, then it reads the sync buffers
//! back out of wasm memory and applies CSS transforms.
//!
//! Ordering inside one step is fixed: pending intents apply first, then the
//! physics step runs to completion, then the sync pass reads transforms.
//! Nothing mutates the table mid-iteration.

use crate::domain::materials::MaterialProfile;
use crate::domain::shapes::ShapeSpec;
use crate::domain::units::SpawnCoord;
use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::{BodyId, BodyRegistry};
use crate::systems::sync::SyncBuffers;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::{BodyBinding, SyncLayout, World};

/// The simulation core for one container.
pub struct WorldCore {
    physics: PhysicsWorld,
    registry: BodyRegistry,
    sync: SyncBuffers,

    // Container state
    container_width: f32,
    container_height: f32,
    /// False until the first successful measurement; registrations queue
    /// until then instead of landing in an unbounded world.
    ready: bool,

    frame: u64,
}

impl WorldCore {
    /// Create a world with the given gravity (earth units, y-down). The
    /// world is not ready until the first `resize`.
    pub fn new(gravity_x: f32, gravity_y: f32) -> Self {
        init::create_world_core(gravity_x, gravity_y)
    }

    pub fn width(&self) -> f32 {
        self.container_width
    }

    pub fn height(&self) -> f32 {
        self.container_height
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> (f32, f32) {
        settings::gravity(self)
    }

    /// Must be called whenever the container's rendered size changes,
    /// including the first measurement. Rebuilds walls only; bodies in
    /// flight keep position and velocity.
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    /// Queue a body registration. Returns its identity; every call yields a
    /// distinct identity and a distinct physical object.
    pub fn register_body(
        &mut self,
        x: SpawnCoord,
        y: SpawnCoord,
        shape: ShapeSpec,
        material: MaterialProfile,
    ) -> BodyId {
        commands::register_body(self, x, y, shape, material)
    }

    /// Queue a body removal. No-op for unknown or already-removed ids.
    pub fn unregister_body(&mut self, id: BodyId) {
        commands::unregister_body(self, id);
    }

    /// Stop simulating and release everything. The host stops its frame
    /// loop first; a stray `step` afterwards is a no-op.
    pub fn teardown(&mut self) {
        commands::teardown(self);
    }

    /// Advance one frame: apply intents, step physics by `dt_seconds`, sync.
    pub fn step(&mut self, dt_seconds: f32) {
        step::step(self, dt_seconds);
    }

    // === Introspection ===

    pub fn live_body_count(&self) -> usize {
        self.registry.live_count()
    }

    pub fn pending_body_count(&self) -> usize {
        self.registry.pending_count()
    }

    /// True once the sync pass has written this body at least once.
    pub fn body_ready(&self, id: BodyId) -> bool {
        self.registry.find(id).is_some_and(|e| e.synced)
    }

    /// (x, y, angle) of a live body, or None for stale/queued ids.
    pub fn body_transform(&self, id: BodyId) -> Option<(f32, f32, f32)> {
        let entry = self.registry.find(id)?;
        self.physics.body_transform(entry.handle)
    }

    pub fn body_velocity(&self, id: BodyId) -> Option<(f32, f32)> {
        let entry = self.registry.find(id)?;
        self.physics.body_velocity(entry.handle)
    }

    /// Last frame's sync output.
    pub fn sync(&self) -> &SyncBuffers {
        &self.sync
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
