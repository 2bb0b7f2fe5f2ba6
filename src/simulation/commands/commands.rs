use crate::domain::materials::MaterialProfile;
use crate::domain::shapes::ShapeSpec;
use crate::domain::units::SpawnCoord;
use crate::systems::registry::BodyId;

use super::WorldCore;

pub(super) fn resize(world: &mut WorldCore, width: f32, height: f32) {
    // A hidden container measures zero; walls with zero extent would be the
    // degenerate-collider case, so the measurement is simply ignored.
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    world.container_width = width;
    world.container_height = height;
    world.physics.rebuild_boundaries(width, height);

    if !world.ready {
        world.ready = true;
        // Registrations queued before the first measurement resolve against
        // it now, as if they had attached a frame later.
        world.registry.resolve_pending(width, height);
    }
}

pub(super) fn register_body(
    world: &mut WorldCore,
    x: SpawnCoord,
    y: SpawnCoord,
    shape: ShapeSpec,
    material: MaterialProfile,
) -> BodyId {
    // Spawn coordinates are pinned to the container size of this moment;
    // later resizes never move an already-requested body.
    let (x, y) = if world.ready {
        (
            SpawnCoord::Px(x.resolve(world.container_width)),
            SpawnCoord::Px(y.resolve(world.container_height)),
        )
    } else {
        (x, y)
    };

    world.registry.queue_register(x, y, shape, material)
}

pub(super) fn unregister_body(world: &mut WorldCore, id: BodyId) {
    world.registry.queue_unregister(id);
}

pub(super) fn teardown(world: &mut WorldCore) {
    for handle in world.registry.clear() {
        world.physics.remove_body(handle);
    }
    world.physics.clear();
    world.sync.reset();
    world.ready = false;
    world.container_width = 0.0;
    world.container_height = 0.0;
}
