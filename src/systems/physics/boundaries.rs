//! Static boundary walls around the container rectangle.
//!
//! Walls sit just outside the container edge and extend past the corners so
//! a fast body cannot slip through a seam between two walls before the next
//! collision check.

use rapier2d::prelude as rapier;
use rapier::nalgebra::Vector2;

use super::PhysicsWorld;

/// Wall slab thickness, px.
pub const WALL_THICKNESS: f32 = 50.0;
/// Extra length past each corner, px.
pub const WALL_OVERLAP: f32 = 100.0;
pub const WALL_FRICTION: f32 = 0.5;

pub(super) fn rebuild(world: &mut PhysicsWorld, width: f32, height: f32) {
    // Old walls go first; dynamic bodies are not touched.
    let old = std::mem::take(&mut world.walls);
    for handle in old {
        world.remove_body(handle);
    }

    let half_t = WALL_THICKNESS / 2.0;
    let half_w = (width + WALL_OVERLAP) / 2.0;
    let half_h = (height + WALL_OVERLAP) / 2.0;

    // (center_x, center_y, half_width, half_height)
    let frames = [
        (width / 2.0, height + half_t, half_w, half_t), // floor
        (width / 2.0, -half_t, half_w, half_t),         // ceiling
        (-half_t, height / 2.0, half_t, half_h),        // left wall
        (width + half_t, height / 2.0, half_t, half_h), // right wall
    ];

    for (cx, cy, hx, hy) in frames {
        let body = rapier::RigidBodyBuilder::fixed().translation(Vector2::new(cx, cy));
        let handle = world.rigid_body_set.insert(body);
        let collider = rapier::ColliderBuilder::cuboid(hx, hy).friction(WALL_FRICTION);
        world
            .collider_set
            .insert_with_parent(collider, handle, &mut world.rigid_body_set);
        world.walls.push(handle);
    }
}
