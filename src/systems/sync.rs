//! Sync pass output - flat transfer buffers the host reads from wasm memory.
//!
//! Layout: `ids[i]` pairs with `transforms[i*3 .. i*3+3]` = (x, y, angle),
//! body-center pixel coordinates and radians. The host subtracts half the
//! element's size itself when building the CSS transform.
//!
//! Buffers are cleared and refilled in place every frame; after warm-up the
//! pass performs no allocation, so frame times stay flat.

use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::BodyRegistry;

pub struct SyncBuffers {
    ids: Vec<u32>,
    transforms: Vec<f32>,
}

impl SyncBuffers {
    pub fn new() -> Self {
        Self {
            ids: Vec::with_capacity(32),
            transforms: Vec::with_capacity(96),
        }
    }

    /// Copy every live body's transform into the buffers. Entries whose body
    /// has vanished from the simulation are skipped, not errors.
    pub fn extract(&mut self, registry: &mut BodyRegistry, physics: &PhysicsWorld) {
        self.ids.clear();
        self.transforms.clear();

        for entry in registry.entries_mut() {
            let Some((x, y, angle)) = physics.body_transform(entry.handle) else {
                continue;
            };
            entry.synced = true;
            self.ids.push(entry.id);
            self.transforms.push(x);
            self.transforms.push(y);
            self.transforms.push(angle);
        }
    }

    /// Number of bodies written this frame.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn reset(&mut self) {
        self.ids.clear();
        self.transforms.clear();
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn transforms(&self) -> &[f32] {
        &self.transforms
    }

    pub fn ids_ptr(&self) -> *const u32 {
        self.ids.as_ptr()
    }

    pub fn ids_len(&self) -> usize {
        self.ids.len()
    }

    pub fn transforms_ptr(&self) -> *const f32 {
        self.transforms.as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.transforms.len()
    }
}

impl Default for SyncBuffers {
    fn default() -> Self {
        Self::new()
    }
}
