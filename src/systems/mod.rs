//! Systems - the moving parts: physics world, registration table, sync pass,
//! and the per-element body binding.

pub mod binding;
pub mod physics;
pub mod registry;
pub mod sync;
