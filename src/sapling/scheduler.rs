//! Per-tick growth: light gate, random admission, then mark-or-grow.

use crate::core::types::{IVec3, Result};
use crate::sapling::growth::{GrowthResult, SaplingGrowth};
use crate::sapling::subtype::Variant;
use crate::world::{GrowthRng, Terrain};

/// What a single tick did to a sapling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// World is a replica; nothing evaluated
    Replica,
    /// The sapling could no longer stay and was removed, dropping its variant
    Uprooted(Variant),
    /// Too dark above the sapling
    Dark,
    /// Admission roll failed
    Missed,
    /// First phase passed; the sapling is now marked
    Marked,
    /// Second phase passed; growth was attempted
    Growth(GrowthResult),
}

impl TickOutcome {
    /// Check if this tick changed nothing
    pub fn is_gate_miss(&self) -> bool {
        matches!(self, TickOutcome::Replica | TickOutcome::Dark | TickOutcome::Missed)
    }
}

impl SaplingGrowth {
    /// Advance the sapling at `pos` by one tick.
    ///
    /// A sapling needs two admitted ticks to grow: the first only sets its
    /// mark, the second runs [`grow`](Self::grow).
    pub fn on_tick(
        &self,
        world: &mut dyn Terrain,
        pos: IVec3,
        rng: &mut dyn GrowthRng,
    ) -> Result<TickOutcome> {
        if !world.is_authoritative() {
            return Ok(TickOutcome::Replica);
        }

        let state = self.sapling_at(world, pos)?;

        if !self.can_sustain(world, pos) {
            let dropped = self.uproot(world, pos)?;
            return Ok(TickOutcome::Uprooted(dropped));
        }

        let light = world.light_level(pos + IVec3::Y);
        if light < self.config.growth_light {
            log::trace!("Sapling at {} too dark to grow (light {})", pos, light);
            return Ok(TickOutcome::Dark);
        }

        if !rng.one_in(self.config.growth_chance) {
            return Ok(TickOutcome::Missed);
        }

        if !state.marked {
            world.set_subtype(pos, state.with_mark().encode());
            log::debug!("Marked {:?} sapling at {}", state.variant, pos);
            return Ok(TickOutcome::Marked);
        }

        self.grow(world, pos, rng).map(TickOutcome::Growth)
    }
}
