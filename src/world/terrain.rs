//! Terrain capability consumed by the growth logic.

use crate::core::types::{BlockId, IVec3};

/// Brightest light level a cell can report.
pub const MAX_LIGHT: u8 = 15;

/// Well-known block IDs.
pub mod blocks {
    use crate::core::types::BlockId;

    pub const AIR: BlockId = 0;
    pub const STONE: BlockId = 1;
    pub const GRASS: BlockId = 2;
    pub const DIRT: BlockId = 3;
    pub const LOG: BlockId = 17;
    pub const LEAVES: BlockId = 18;
    pub const FARMLAND: BlockId = 60;
    pub const SAPLING: BlockId = 200;
}

/// Read/write access to terrain cells.
///
/// Y is the vertical axis; footprints extend along X and Z. Every cell holds
/// a block ID plus an 8-bit sub-type whose meaning is owned by the block.
pub trait Terrain {
    /// Block ID at `pos` ([`blocks::AIR`] when empty).
    fn block_id(&self, pos: IVec3) -> BlockId;

    /// Sub-type at `pos` (0 when empty).
    fn subtype(&self, pos: IVec3) -> u8;

    /// Combined light level at `pos`, 0..=[`MAX_LIGHT`].
    fn light_level(&self, pos: IVec3) -> u8;

    /// Whether nothing solid sits anywhere above `pos`.
    fn sees_sky(&self, pos: IVec3) -> bool;

    /// Replace the cell at `pos`.
    fn set_block(&mut self, pos: IVec3, id: BlockId, subtype: u8);

    /// Change only the sub-type at `pos`, keeping the block ID.
    fn set_subtype(&mut self, pos: IVec3, subtype: u8);

    /// Whether this instance owns canonical state (as opposed to a replica
    /// mirroring another instance).
    fn is_authoritative(&self) -> bool;

    /// Check if the cell is empty (air)
    fn is_empty(&self, pos: IVec3) -> bool {
        self.block_id(pos) == blocks::AIR
    }

    /// Set the cell to air
    fn clear(&mut self, pos: IVec3) {
        self.set_block(pos, blocks::AIR, 0);
    }
}
