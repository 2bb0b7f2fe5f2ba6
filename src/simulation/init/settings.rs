use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.physics.set_gravity(x, y);
}

pub(super) fn gravity(world: &WorldCore) -> (f32, f32) {
    world.physics.gravity()
}
