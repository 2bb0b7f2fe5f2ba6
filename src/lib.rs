//! Gravibox Engine - physics-to-visual sync in WASM
//!
//! Bridges a rigid-body simulation with DOM elements rendered by the host
//! page: the page drives `step()` from its animation-frame loop and reads
//! each body's transform back out of wasm memory.
//!
//! Architecture:
//! - domain/     - Plain data: coordinates, shapes, materials
//! - systems/    - Physics world, registration table, sync pass, bindings
//! - simulation/ - Orchestration (WorldCore) and the wasm facade

pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps host-facing paths short)
pub use domain::materials::MaterialProfile;
pub use domain::shapes::{ShapeKind, ShapeSpec};
pub use domain::units::SpawnCoord;
pub use systems::binding::BindingSpec;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Gravibox WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{BodyBinding, SyncLayout, World, WorldCore};
pub use systems::registry::BodyId;
