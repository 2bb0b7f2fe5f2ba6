use wasm_bindgen::prelude::*;

use crate::systems::binding::{BindingSpec, BodyBinding as CoreBinding};
use super::WorldCore;

/// Pointer/length bundle for the sync transfer buffers, so the host can map
/// wasm memory once per frame instead of making four calls.
///
/// `ids[i]` pairs with `transforms[i*3 .. i*3+3]` = (x, y, angle).
#[wasm_bindgen]
pub struct SyncLayout {
    ids_ptr: u32,
    ids_len_elements: u32,
    transforms_ptr: u32,
    transforms_len_elements: u32,
}

#[wasm_bindgen]
impl SyncLayout {
    #[wasm_bindgen(getter)]
    pub fn ids_ptr(&self) -> u32 {
        self.ids_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn ids_len_elements(&self) -> u32 {
        self.ids_len_elements
    }
    #[wasm_bindgen(getter)]
    pub fn transforms_ptr(&self) -> u32 {
        self.transforms_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn transforms_len_elements(&self) -> u32 {
        self.transforms_len_elements
    }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the given gravity (earth units, y-down). Call
    /// `resize` with the container's first measurement before stepping.
    #[wasm_bindgen(constructor)]
    pub fn new(gravity_x: f32, gravity_y: f32) -> Self {
        Self {
            core: WorldCore::new(gravity_x, gravity_y),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Report the container's rendered size. Call on mount and on every
    /// resize notification; walls are rebuilt, bodies are left in flight.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    /// Register a body from a JSON spawn request (see `BindingSpec`).
    /// Returns the body id, or 0 if the request did not parse.
    pub fn register_body(&mut self, json: String) -> u32 {
        match serde_json::from_str::<BindingSpec>(&json) {
            Ok(spec) => self.core.register_body(
                spec.x,
                spec.y,
                spec.shape_spec(),
                spec.material,
            ),
            Err(e) => {
                web_sys::console::warn_1(&format!("gravibox: bad spawn request: {e}").into());
                0
            }
        }
    }

    /// Remove a body by id. No-op for unknown or already-removed ids.
    pub fn unregister_body(&mut self, id: u32) {
        self.core.unregister_body(id);
    }

    /// Advance one animation frame. `dt_ms` is the elapsed time the host's
    /// frame loop measured; it is clamped internally.
    pub fn step(&mut self, dt_ms: f32) {
        self.core.step(dt_ms / 1000.0);
    }

    /// Release all bodies and walls. Stop the frame loop before calling;
    /// a stray `step` afterwards is a harmless no-op.
    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    pub fn live_body_count(&self) -> usize {
        self.core.live_body_count()
    }

    pub fn pending_body_count(&self) -> usize {
        self.core.pending_body_count()
    }

    /// True once the body's transform has been written at least once - the
    /// host's cue to make the element visible.
    pub fn body_ready(&self, id: u32) -> bool {
        self.core.body_ready(id)
    }

    // === SYNC TRANSFER BUFFERS ===

    /// Number of bodies written by the last sync pass.
    pub fn sync_count(&self) -> usize {
        self.core.sync().len()
    }

    pub fn sync_ids_ptr(&self) -> *const u32 {
        self.core.sync().ids_ptr()
    }

    pub fn sync_ids_len(&self) -> usize {
        self.core.sync().ids_len()
    }

    pub fn sync_transforms_ptr(&self) -> *const f32 {
        self.core.sync().transforms_ptr()
    }

    pub fn sync_transforms_len(&self) -> usize {
        self.core.sync().transforms_len()
    }

    pub fn sync_layout(&self) -> SyncLayout {
        let sync = self.core.sync();
        SyncLayout {
            ids_ptr: sync.ids_ptr() as u32,
            ids_len_elements: sync.ids_len() as u32,
            transforms_ptr: sync.transforms_ptr() as u32,
            transforms_len_elements: sync.transforms_len() as u32,
        }
    }
}

impl World {
    /// Core access for native callers (tests, non-wasm hosts).
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

/// Declarative wrapper for one element: registers its body on `attach`,
/// removes it on `detach`. The world is passed in explicitly each time;
/// bindings never discover a world ambiently.
#[wasm_bindgen]
pub struct BodyBinding {
    inner: CoreBinding,
}

#[wasm_bindgen]
impl BodyBinding {
    /// Build a binding from a JSON spawn request. A malformed request
    /// degrades to the default spec (origin spawn, fallback size) with a
    /// console warning; the element will look inert, not crash the page.
    #[wasm_bindgen(constructor)]
    pub fn new(json: String) -> Self {
        let spec = match serde_json::from_str::<BindingSpec>(&json) {
            Ok(spec) => spec,
            Err(e) => {
                web_sys::console::warn_1(&format!("gravibox: bad binding spec: {e}").into());
                BindingSpec::default()
            }
        };
        Self {
            inner: CoreBinding::new(spec),
        }
    }

    /// Register this element's body; idempotent while attached.
    pub fn attach(&mut self, world: &mut World) -> u32 {
        self.inner.attach(&mut world.core)
    }

    /// Unregister. Safe to call before registration ever applied, twice,
    /// or after world teardown.
    pub fn detach(&mut self, world: &mut World) {
        self.inner.detach(&mut world.core);
    }

    pub fn body_id(&self) -> Option<u32> {
        self.inner.body_id()
    }

    /// True once the element has a synced transform and may be revealed.
    pub fn is_ready(&self, world: &World) -> bool {
        self.inner.is_ready(&world.core)
    }
}
