//! PhysicsWorld - thin wrapper around the rapier2d pipeline.
//!
//! All positions are CSS pixels with y growing downward, exactly the
//! coordinate space the host page lays elements out in. Gravity comes in
//! "earth units": the host passes (0, 1) and we scale to px/s² internally.

mod boundaries;

pub use boundaries::{WALL_FRICTION, WALL_OVERLAP, WALL_THICKNESS};

use rapier2d::prelude as rapier;
use rapier::nalgebra::Vector2;

use crate::domain::materials::MaterialProfile;
use crate::domain::shapes::ShapeSpec;

/// One gravity unit in px/s². (0, 1) reads as "earth gravity, pointing down"
/// for pixel-scale scenes.
pub const GRAVITY_PX_PER_UNIT: f32 = 1000.0;

/// Hard cap on a single step's dt. Background tabs can hand us multi-second
/// frame gaps; integrating those would fire bodies through the walls.
pub const MAX_STEP_DT: f32 = 1.0 / 30.0;

/// The rapier universe for one container.
pub struct PhysicsWorld {
    gravity: Vector2<f32>,
    integration_parameters: rapier::IntegrationParameters,
    physics_pipeline: rapier::PhysicsPipeline,
    island_manager: rapier::IslandManager,
    broad_phase: rapier::DefaultBroadPhase,
    narrow_phase: rapier::NarrowPhase,
    rigid_body_set: rapier::RigidBodySet,
    collider_set: rapier::ColliderSet,
    impulse_joint_set: rapier::ImpulseJointSet,
    multibody_joint_set: rapier::MultibodyJointSet,
    ccd_solver: rapier::CCDSolver,
    walls: Vec<rapier::RigidBodyHandle>,
}

impl PhysicsWorld {
    pub fn new(gravity_x: f32, gravity_y: f32) -> Self {
        Self {
            gravity: Vector2::new(
                gravity_x * GRAVITY_PX_PER_UNIT,
                gravity_y * GRAVITY_PX_PER_UNIT,
            ),
            integration_parameters: rapier::IntegrationParameters::default(),
            physics_pipeline: rapier::PhysicsPipeline::new(),
            island_manager: rapier::IslandManager::new(),
            broad_phase: rapier::DefaultBroadPhase::new(),
            narrow_phase: rapier::NarrowPhase::new(),
            rigid_body_set: rapier::RigidBodySet::new(),
            collider_set: rapier::ColliderSet::new(),
            impulse_joint_set: rapier::ImpulseJointSet::new(),
            multibody_joint_set: rapier::MultibodyJointSet::new(),
            ccd_solver: rapier::CCDSolver::new(),
            walls: Vec::new(),
        }
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.gravity = Vector2::new(x * GRAVITY_PX_PER_UNIT, y * GRAVITY_PX_PER_UNIT);
    }

    /// Gravity in host units (px/s² divided back out).
    pub fn gravity(&self) -> (f32, f32) {
        (
            self.gravity.x / GRAVITY_PX_PER_UNIT,
            self.gravity.y / GRAVITY_PX_PER_UNIT,
        )
    }

    /// Replace the four boundary walls for a new container size. Dynamic
    /// bodies keep their position and velocity.
    pub fn rebuild_boundaries(&mut self, width: f32, height: f32) {
        boundaries::rebuild(self, width, height);
    }

    /// Insert a dynamic body at (x, y) with the given shape and material.
    pub fn insert_dynamic(
        &mut self,
        x: f32,
        y: f32,
        shape: ShapeSpec,
        material: MaterialProfile,
    ) -> rapier::RigidBodyHandle {
        let material = material.sanitized();

        let body = rapier::RigidBodyBuilder::dynamic()
            .translation(Vector2::new(x, y))
            .ccd_enabled(true);
        let handle = self.rigid_body_set.insert(body);

        let collider = match shape {
            ShapeSpec::Rect { width, height } => {
                rapier::ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            }
            ShapeSpec::Circle { radius } => rapier::ColliderBuilder::ball(radius),
        }
        .friction(material.friction)
        .restitution(material.restitution)
        .density(material.density);

        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);

        handle
    }

    /// Remove a body (and its collider) from the simulation. Stale handles
    /// are tolerated: removing an already-removed body is a no-op.
    pub fn remove_body(&mut self, handle: rapier::RigidBodyHandle) -> bool {
        if self.rigid_body_set.get(handle).is_none() {
            return false;
        }
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
        true
    }

    /// Current transform of a body: (x, y, angle in radians), body center.
    pub fn body_transform(&self, handle: rapier::RigidBodyHandle) -> Option<(f32, f32, f32)> {
        let body = self.rigid_body_set.get(handle)?;
        let pos = body.translation();
        Some((pos.x, pos.y, body.rotation().angle()))
    }

    /// Current linear velocity of a body in px/s.
    pub fn body_velocity(&self, handle: rapier::RigidBodyHandle) -> Option<(f32, f32)> {
        let body = self.rigid_body_set.get(handle)?;
        let vel = body.linvel();
        Some((vel.x, vel.y))
    }

    /// Advance the simulation by `dt` seconds (clamped to [0, MAX_STEP_DT]).
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_STEP_DT);
        if dt <= 0.0 {
            return;
        }
        self.integration_parameters.dt = dt;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Release every body, wall included. Used by World teardown.
    ///
    /// The broad/narrow phase and CCD solver still hold proxies keyed by the
    /// discarded collider handles; they must be recreated too, or the next
    /// step after a re-ready aborts inside the pipeline.
    pub fn clear(&mut self) {
        self.rigid_body_set = rapier::RigidBodySet::new();
        self.collider_set = rapier::ColliderSet::new();
        self.island_manager = rapier::IslandManager::new();
        self.broad_phase = rapier::DefaultBroadPhase::new();
        self.narrow_phase = rapier::NarrowPhase::new();
        self.impulse_joint_set = rapier::ImpulseJointSet::new();
        self.multibody_joint_set = rapier::MultibodyJointSet::new();
        self.ccd_solver = rapier::CCDSolver::new();
        self.walls.clear();
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Wall frames as (center_x, center_y, half_width, half_height).
    pub(crate) fn wall_frames(&self) -> Vec<(f32, f32, f32, f32)> {
        let mut frames = Vec::with_capacity(self.walls.len());
        for handle in &self.walls {
            let Some(body) = self.rigid_body_set.get(*handle) else {
                continue;
            };
            for collider_handle in body.colliders() {
                let Some(collider) = self.collider_set.get(*collider_handle) else {
                    continue;
                };
                if let Some(cuboid) = collider.shape().as_cuboid() {
                    let pos = collider.translation();
                    frames.push((
                        pos.x,
                        pos.y,
                        cuboid.half_extents.x,
                        cuboid.half_extents.y,
                    ));
                }
            }
        }
        frames
    }
}
