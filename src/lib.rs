//! Arbor - tick-driven sapling growth for voxel terrain

pub mod core;
pub mod world;
pub mod structure;
pub mod sapling;

#[cfg(test)]
pub(crate) mod testing;
