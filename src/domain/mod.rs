//! Domain data - plain types shared by the physics and sync systems.

pub mod materials;
pub mod shapes;
pub mod units;
