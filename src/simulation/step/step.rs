use crate::systems::registry::PendingOp;

use super::WorldCore;

pub(super) fn step(world: &mut WorldCore, dt_seconds: f32) {
    // Before the first measurement there are no walls; everything stays
    // queued and the frame is not counted.
    if !world.ready {
        return;
    }

    // Intents queued since the last frame take effect here, before the
    // physics step. Nothing touches the table after this point, so a body
    // unregistered between frames is never written by this frame's sync.
    apply_pending(world);

    world.physics.step(dt_seconds);
    world.sync.extract(&mut world.registry, &world.physics);

    world.frame += 1;
}

fn apply_pending(world: &mut WorldCore) {
    if !world.registry.has_pending() {
        return;
    }

    for op in world.registry.take_pending() {
        match op {
            PendingOp::Register(reg) => {
                // Coordinates are already px for a ready world; resolve is a
                // pass-through there and handles the pre-ready leftovers.
                let x = reg.x.resolve(world.container_width);
                let y = reg.y.resolve(world.container_height);
                let handle = world.physics.insert_dynamic(x, y, reg.shape, reg.material);
                world.registry.insert_live(reg.id, handle);
            }
            PendingOp::Unregister(id) => {
                // Stale ids fall through silently; detach races are normal
                // churn, not faults.
                if let Some(handle) = world.registry.remove_live(id) {
                    world.physics.remove_body(handle);
                }
            }
        }
    }
}
