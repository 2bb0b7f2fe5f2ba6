use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::BodyRegistry;
use crate::systems::sync::SyncBuffers;

use super::WorldCore;

pub(super) fn create_world_core(gravity_x: f32, gravity_y: f32) -> WorldCore {
    WorldCore {
        physics: PhysicsWorld::new(gravity_x, gravity_y),
        registry: BodyRegistry::new(),
        sync: SyncBuffers::new(),
        container_width: 0.0,
        container_height: 0.0,
        ready: false,
        frame: 0,
    }
}
