//! Clear-then-restore bookkeeping for structure placement.

use crate::core::types::{BlockId, IVec3};
use crate::world::Terrain;

/// A cell's contents captured before it was cleared
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedCell {
    pub position: IVec3,
    pub id: BlockId,
    pub subtype: u8,
}

/// Footprint cells cleared ahead of a generator call.
///
/// Either [`commit`](Self::commit) to keep whatever the generator left, or
/// [`rollback`](Self::rollback) to put every cell back exactly as it was.
#[must_use = "a cleared footprint must be committed or rolled back"]
#[derive(Debug)]
pub struct FootprintTransaction {
    saved: Vec<SavedCell>,
}

impl FootprintTransaction {
    /// Record and clear every cell in `cells`.
    pub fn clear(world: &mut dyn Terrain, cells: &[IVec3]) -> Self {
        let saved: Vec<SavedCell> = cells
            .iter()
            .map(|&position| SavedCell {
                position,
                id: world.block_id(position),
                subtype: world.subtype(position),
            })
            .collect();

        for cell in &saved {
            world.clear(cell.position);
        }

        Self { saved }
    }

    /// Cells held by this transaction
    pub fn saved(&self) -> &[SavedCell] {
        &self.saved
    }

    /// Keep the world as it is now. Returns the number of cells released.
    pub fn commit(self) -> usize {
        self.saved.len()
    }

    /// Restore every cleared cell to its recorded id and sub-type.
    pub fn rollback(self, world: &mut dyn Terrain) {
        for cell in &self.saved {
            world.set_block(cell.position, cell.id, cell.subtype);
        }
    }
}
