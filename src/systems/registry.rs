//! Registration table - associates body identities with their physics
//! handles, plus the pending-intent queue.
//!
//! Single-writer discipline: attach/detach only enqueue intents here; the
//! live table is mutated exclusively at the start of a step, never while the
//! sync pass iterates it. A body unregistered between frames is therefore
//! never written by a later sync pass.

use rapier2d::prelude::RigidBodyHandle;

use crate::domain::materials::MaterialProfile;
use crate::domain::shapes::ShapeSpec;
use crate::domain::units::SpawnCoord;

/// Stable identity of one registered body. Allocated monotonically from 1
/// and never reused; 0 is the "registration failed" sentinel at the wasm
/// boundary.
pub type BodyId = u32;

/// A live (body, element) association.
pub struct Entry {
    pub id: BodyId,
    pub handle: RigidBodyHandle,
    /// Set once the sync pass has written this body's transform at least
    /// once. The host keeps the element hidden until then.
    pub synced: bool,
}

/// A registration waiting for the next step (or, before the first container
/// measurement, for world readiness).
pub struct PendingRegistration {
    pub id: BodyId,
    /// Px when queued against a ready world; percent coords queued earlier
    /// are rewritten to px at first measurement.
    pub x: SpawnCoord,
    pub y: SpawnCoord,
    pub shape: ShapeSpec,
    pub material: MaterialProfile,
}

pub(crate) enum PendingOp {
    Register(PendingRegistration),
    Unregister(BodyId),
}

pub struct BodyRegistry {
    entries: Vec<Entry>,
    pending: Vec<PendingOp>,
    next_id: BodyId,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate an identity and queue the registration.
    pub fn queue_register(
        &mut self,
        x: SpawnCoord,
        y: SpawnCoord,
        shape: ShapeSpec,
        material: MaterialProfile,
    ) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.pending.push(PendingOp::Register(PendingRegistration {
            id,
            x,
            y,
            shape,
            material,
        }));
        id
    }

    /// Queue a removal. A registration still sitting in the queue is
    /// cancelled in place; unknown ids are a silent no-op at apply time.
    pub fn queue_unregister(&mut self, id: BodyId) {
        let queued = self.pending.iter().position(
            |op| matches!(op, PendingOp::Register(reg) if reg.id == id),
        );
        match queued {
            Some(idx) => {
                self.pending.remove(idx);
            }
            None => self.pending.push(PendingOp::Unregister(id)),
        }
    }

    /// Rewrite queued percent coordinates to pixels. Called once, at the
    /// first container measurement, so pre-ready registrations resolve
    /// against the size they would have seen at attach time.
    pub(crate) fn resolve_pending(&mut self, width: f32, height: f32) {
        for op in &mut self.pending {
            if let PendingOp::Register(reg) = op {
                reg.x = SpawnCoord::Px(reg.x.resolve(width));
                reg.y = SpawnCoord::Px(reg.y.resolve(height));
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn take_pending(&mut self) -> Vec<PendingOp> {
        std::mem::take(&mut self.pending)
    }

    pub fn insert_live(&mut self, id: BodyId, handle: RigidBodyHandle) {
        self.entries.push(Entry {
            id,
            handle,
            synced: false,
        });
    }

    /// Remove a live entry, returning its physics handle. None for stale ids.
    pub fn remove_live(&mut self, id: BodyId) -> Option<RigidBodyHandle> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.swap_remove(idx).handle)
    }

    pub fn find(&self, id: BodyId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    /// Drop everything, queued intents included, handing back the live
    /// handles so the caller can release the physics side.
    pub fn clear(&mut self) -> Vec<RigidBodyHandle> {
        self.pending.clear();
        self.entries.drain(..).map(|e| e.handle).collect()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shapes::ShapeSpec;

    fn queue_one(reg: &mut BodyRegistry) -> BodyId {
        reg.queue_register(
            SpawnCoord::Px(10.0),
            SpawnCoord::Px(10.0),
            ShapeSpec::Circle { radius: 5.0 },
            MaterialProfile::default(),
        )
    }

    #[test]
    fn ids_are_distinct_and_start_at_one() {
        let mut reg = BodyRegistry::new();
        let a = queue_one(&mut reg);
        let b = queue_one(&mut reg);
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(reg.pending_count(), 2);
    }

    #[test]
    fn unregister_cancels_a_queued_registration() {
        let mut reg = BodyRegistry::new();
        let id = queue_one(&mut reg);
        reg.queue_unregister(id);
        assert_eq!(reg.pending_count(), 0);

        // A second unregister now queues a (harmless) removal intent.
        reg.queue_unregister(id);
        assert_eq!(reg.pending_count(), 1);
    }

    #[test]
    fn resolve_pending_rewrites_percent_to_px() {
        let mut reg = BodyRegistry::new();
        reg.queue_register(
            SpawnCoord::Percent(50.0),
            SpawnCoord::Percent(10.0),
            ShapeSpec::Circle { radius: 5.0 },
            MaterialProfile::default(),
        );
        reg.resolve_pending(400.0, 200.0);
        match reg.take_pending().pop().unwrap() {
            PendingOp::Register(r) => {
                assert_eq!(r.x, SpawnCoord::Px(200.0));
                assert_eq!(r.y, SpawnCoord::Px(20.0));
            }
            PendingOp::Unregister(_) => panic!("expected a registration"),
        }
    }
}
