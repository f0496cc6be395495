//! World access: the terrain capability the growth logic runs against,
//! the randomness source, and an in-memory grid implementation.

pub mod terrain;
pub mod random;
pub mod grid;

pub use terrain::{blocks, Terrain, MAX_LIGHT};
pub use random::GrowthRng;
pub use grid::{Cell, GridWorld};
