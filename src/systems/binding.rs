//! BodyBinding - ties one visual element's lifetime to one dynamic body.
//!
//! The binding never writes position; the world's sync pass is the only
//! writer. The host keeps the element hidden until `is_ready` reports true,
//! so it never flashes at the coordinate origin before its first transform.
//!
//! The world handle is passed explicitly to `attach`/`detach` - bindings do
//! not discover their world ambiently, and two worlds never share a table.

use serde::Deserialize;

use crate::domain::materials::MaterialProfile;
use crate::domain::shapes::{ShapeKind, ShapeSpec};
use crate::domain::units::SpawnCoord;
use crate::simulation::WorldCore;
use crate::systems::registry::BodyId;

/// Spawn request for one element, as the host page sends it.
///
/// `measured_width`/`measured_height` carry the element's rendered bounding
/// box; both are zero when the element (or an ancestor) was hidden at attach
/// time, and the fixed fallback size kicks in.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BindingSpec {
    pub x: SpawnCoord,
    pub y: SpawnCoord,
    pub shape: ShapeKind,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub radius: Option<f32>,
    pub measured_width: f32,
    pub measured_height: f32,
    pub material: MaterialProfile,
}

impl BindingSpec {
    /// Run the size-resolution chain for this element.
    pub fn shape_spec(&self) -> ShapeSpec {
        ShapeSpec::resolve(
            self.shape,
            self.width,
            self.height,
            self.radius,
            self.measured_width,
            self.measured_height,
        )
    }
}

enum BindingState {
    Detached,
    Attached(BodyId),
}

pub struct BodyBinding {
    spec: BindingSpec,
    state: BindingState,
}

impl BodyBinding {
    pub fn new(spec: BindingSpec) -> Self {
        Self {
            spec,
            state: BindingState::Detached,
        }
    }

    /// Register this element's body. Attaching while already attached keeps
    /// the existing body and returns its id (remount guard - the world hands
    /// out a fresh body for every register call, so the guard lives here).
    pub fn attach(&mut self, world: &mut WorldCore) -> BodyId {
        if let BindingState::Attached(id) = self.state {
            return id;
        }
        let id = world.register_body(
            self.spec.x,
            self.spec.y,
            self.spec.shape_spec(),
            self.spec.material,
        );
        self.state = BindingState::Attached(id);
        id
    }

    /// Unregister. Unconditional and race-tolerant: safe before the queued
    /// registration was ever applied, safe twice, safe after world teardown.
    pub fn detach(&mut self, world: &mut WorldCore) {
        if let BindingState::Attached(id) = std::mem::replace(&mut self.state, BindingState::Detached)
        {
            world.unregister_body(id);
        }
    }

    pub fn body_id(&self) -> Option<BodyId> {
        match self.state {
            BindingState::Attached(id) => Some(id),
            BindingState::Detached => None,
        }
    }

    /// True once the sync pass has written this body's transform at least
    /// once - the host's cue to reveal the element.
    pub fn is_ready(&self, world: &WorldCore) -> bool {
        self.body_id().is_some_and(|id| world.body_ready(id))
    }
}
