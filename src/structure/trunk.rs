//! Minimal trunk-and-canopy generator.
//!
//! Places a straight log column (1x1 or 2x2) topped by a single leaf layer.
//! Used by the simulation binary and benches wherever real tree shapes are
//! not needed.

use crate::core::types::{BlockId, IVec3};
use crate::world::{blocks, GrowthRng, Terrain};

/// Straight trunk generator
#[derive(Clone, Debug)]
pub struct TrunkGenerator {
    /// Block used for the trunk
    pub log: BlockId,
    /// Block used for the canopy
    pub leaves: BlockId,
    /// Shortest trunk height
    pub min_height: u32,
    /// Extra random height in `[0, height_variation)`
    pub height_variation: u32,
    /// Trunk width: 1 for a single column, 2 for a 2x2 trunk
    pub width: i32,
}

impl TrunkGenerator {
    /// Single-column trunk
    pub fn narrow(min_height: u32, height_variation: u32) -> Self {
        Self {
            log: blocks::LOG,
            leaves: blocks::LEAVES,
            min_height,
            height_variation,
            width: 1,
        }
    }

    /// 2x2 trunk. The anchor is the +X/+Z corner of the trunk, matching how
    /// growth anchors square footprints.
    pub fn wide(min_height: u32, height_variation: u32) -> Self {
        Self {
            width: 2,
            ..Self::narrow(min_height, height_variation)
        }
    }

    /// Trunk columns (bottom cell) for an anchor
    fn columns(&self, anchor: IVec3) -> Vec<IVec3> {
        if self.width >= 2 {
            vec![
                anchor + IVec3::new(-1, 0, -1),
                anchor + IVec3::new(0, 0, -1),
                anchor + IVec3::new(-1, 0, 0),
                anchor,
            ]
        } else {
            vec![anchor]
        }
    }

    fn roll_height(&self, rng: &mut dyn GrowthRng) -> i32 {
        let extra = if self.height_variation > 0 {
            rng.next_below(self.height_variation)
        } else {
            0
        };
        let height = self.min_height.saturating_add(extra).max(1);
        i32::try_from(height).unwrap_or(i32::MAX)
    }
}

impl super::StructureGenerator for TrunkGenerator {
    fn generate(&self, world: &mut dyn Terrain, rng: &mut dyn GrowthRng, anchor: IVec3) -> bool {
        let height = self.roll_height(rng);
        let columns = self.columns(anchor);

        // Trunk needs ground underneath and open air all the way up
        let rooted = columns.iter().all(|&c| !world.is_empty(c - IVec3::Y));
        let clear = columns
            .iter()
            .all(|&c| (0..=height).all(|dy| world.is_empty(c + IVec3::new(0, dy, 0))));
        if !rooted || !clear {
            return false;
        }

        for &column in &columns {
            for dy in 0..height {
                world.set_block(column + IVec3::new(0, dy, 0), self.log, 0);
            }
        }

        // One canopy layer around and over the trunk top, only into air
        for &column in &columns {
            let top = column + IVec3::new(0, height, 0);
            for offset in [IVec3::ZERO, IVec3::X, IVec3::NEG_X, IVec3::Z, IVec3::NEG_Z] {
                let pos = top + offset;
                if world.is_empty(pos) {
                    world.set_block(pos, self.leaves, 0);
                }
            }
        }

        true
    }
}
