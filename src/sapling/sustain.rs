//! Planting rules and removal of saplings that lost their footing.

use crate::core::types::{IVec3, Result};
use crate::sapling::growth::SaplingGrowth;
use crate::sapling::subtype::{strip_mark, SaplingState, Variant};
use crate::world::Terrain;

/// Variant an uprooted or broken sapling yields, mark stripped
pub fn dropped_variant(subtype: u8) -> Option<Variant> {
    Variant::from_code(strip_mark(subtype))
}

impl SaplingGrowth {
    /// Check whether the soil under `pos` can hold a sapling
    pub fn is_allowed_soil(&self, world: &dyn Terrain, pos: IVec3) -> bool {
        self.soils.sustains(world.block_id(pos - IVec3::Y))
    }

    /// Check whether a sapling at `pos` may stay: allowed soil below, and
    /// either enough light or open sky.
    pub fn can_sustain(&self, world: &dyn Terrain, pos: IVec3) -> bool {
        let lit = world.light_level(pos) >= self.config.sustain_light || world.sees_sky(pos);
        lit && self.is_allowed_soil(world, pos)
    }

    /// Plant an unmarked sapling into an empty cell on allowed soil.
    ///
    /// Returns `false` and leaves the world untouched when the cell is
    /// occupied or the soil is wrong.
    pub fn plant(&self, world: &mut dyn Terrain, pos: IVec3, variant: Variant) -> bool {
        if !world.is_empty(pos) || !self.is_allowed_soil(world, pos) {
            return false;
        }
        world.set_block(pos, self.config.sapling_block, SaplingState::new(variant).encode());
        true
    }

    /// Remove the sapling at `pos` and return the variant it drops.
    pub fn uproot(&self, world: &mut dyn Terrain, pos: IVec3) -> Result<Variant> {
        let state = self.sapling_at(world, pos)?;
        world.clear(pos);
        log::debug!("Uprooted {:?} sapling at {}", state.variant, pos);
        Ok(state.variant)
    }
}
