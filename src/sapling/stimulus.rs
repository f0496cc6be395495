//! Instant-growth stimulus (fertilizer applied to a block).
//!
//! Several independent handlers may watch the same stimulus; the first one
//! that recognises its block claims it so nobody else applies it again.

use crate::core::types::{BlockId, IVec3, Result};
use crate::sapling::growth::{GrowthResult, SaplingGrowth};
use crate::world::{GrowthRng, Terrain};

/// Request to mature whatever sits at `position` immediately
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthStimulus {
    position: IVec3,
    block_id: BlockId,
    claimed: bool,
}

impl GrowthStimulus {
    pub fn new(position: IVec3, block_id: BlockId) -> Self {
        Self {
            position,
            block_id,
            claimed: false,
        }
    }

    /// Stimulus aimed at whatever block currently sits at `position`
    pub fn at(world: &dyn Terrain, position: IVec3) -> Self {
        Self::new(position, world.block_id(position))
    }

    pub fn position(&self) -> IVec3 {
        self.position
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Mark as handled
    pub fn claim(&mut self) {
        self.claimed = true;
    }
}

impl SaplingGrowth {
    /// Handle an instant-growth stimulus.
    ///
    /// Unclaimed stimuli aimed at the sapling block are claimed on every
    /// instance; only an authoritative world actually grows the sapling,
    /// skipping the light, admission and mark gates. Returns `None` when
    /// the stimulus was ignored or no growth ran.
    pub fn on_stimulus(
        &self,
        world: &mut dyn Terrain,
        rng: &mut dyn GrowthRng,
        stimulus: &mut GrowthStimulus,
    ) -> Result<Option<GrowthResult>> {
        if stimulus.is_claimed() || stimulus.block_id() != self.sapling_block() {
            return Ok(None);
        }
        stimulus.claim();

        if !world.is_authoritative() {
            return Ok(None);
        }

        let result = self.grow(world, stimulus.position(), rng)?;
        log::debug!("Stimulus at {} forced growth: {:?}", stimulus.position(), result);
        Ok(Some(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sapling::registry::GrowthPlan;
    use crate::sapling::subtype::Variant;
    use crate::structure::StructureKind;
    use crate::testing::{grass_world, put_sapling, recording_growth, ScriptedRng};
    use crate::world::{blocks, GridWorld};

    const POS: IVec3 = IVec3::new(0, 1, 0);

    #[test]
    fn test_stimulus_grows_unmarked_sapling() {
        let (growth, log) = recording_growth(true);
        let mut world = grass_world();
        put_sapling(&mut world, POS, Variant::Acacia, false);
        let mut rng = ScriptedRng::always(0);
        let mut stimulus = GrowthStimulus::at(&world, POS);

        let result = growth.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap();
        assert_eq!(result, Some(GrowthResult::Grown(GrowthPlan::single(StructureKind::Acacia))));
        assert!(stimulus.is_claimed());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_stimulus_bypasses_darkness_and_rolls() {
        let (growth, log) = recording_growth(true);
        let mut world = grass_world().with_ambient_light(0);
        put_sapling(&mut world, POS, Variant::Fir, false);
        // Any admission roll would miss
        let mut rng = ScriptedRng::always(6);
        let mut stimulus = GrowthStimulus::new(POS, blocks::SAPLING);

        let result = growth.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap();
        assert!(result.unwrap().is_grown());
        assert!(rng.bounds().is_empty());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_claimed_stimulus_ignored() {
        let (growth, log) = recording_growth(true);
        let mut world = grass_world();
        put_sapling(&mut world, POS, Variant::Acacia, false);
        let mut rng = ScriptedRng::always(0);
        let mut stimulus = GrowthStimulus::new(POS, blocks::SAPLING);
        stimulus.claim();

        assert_eq!(growth.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap(), None);
        assert!(log.borrow().is_empty());
        assert_eq!(world.block_id(POS), blocks::SAPLING);
    }

    #[test]
    fn test_foreign_block_not_claimed() {
        let (growth, log) = recording_growth(true);
        let mut world = grass_world();
        let mut rng = ScriptedRng::always(0);
        let mut stimulus = GrowthStimulus::at(&world, IVec3::ZERO);
        assert_eq!(stimulus.block_id(), blocks::GRASS);

        assert_eq!(growth.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap(), None);
        assert!(!stimulus.is_claimed());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_only_first_handler_applies() {
        let (first, first_log) = recording_growth(true);
        let (second, second_log) = recording_growth(true);
        let mut world = grass_world();
        put_sapling(&mut world, POS, Variant::Acacia, false);
        let mut rng = ScriptedRng::always(0);
        let mut stimulus = GrowthStimulus::new(POS, blocks::SAPLING);

        first.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap();
        second.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap();

        assert_eq!(first_log.borrow().len(), 1);
        assert!(second_log.borrow().is_empty());
    }

    #[test]
    fn test_replica_claims_without_growing() {
        let (growth, log) = recording_growth(true);
        let mut world = GridWorld::replica();
        world.set_block(POS - IVec3::Y, blocks::GRASS, 0);
        put_sapling(&mut world, POS, Variant::Acacia, false);
        world.take_modified();
        let mut rng = ScriptedRng::always(0);
        let mut stimulus = GrowthStimulus::new(POS, blocks::SAPLING);

        assert_eq!(growth.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap(), None);
        assert!(stimulus.is_claimed());
        assert!(world.take_modified().is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_lone_redwood_stimulus_claimed_but_nothing_grows() {
        let (growth, log) = recording_growth(true);
        let mut world = grass_world();
        put_sapling(&mut world, POS, Variant::Redwood, false);
        let mut rng = ScriptedRng::always(0);
        let mut stimulus = GrowthStimulus::new(POS, blocks::SAPLING);

        let result = growth.on_stimulus(&mut world, &mut rng, &mut stimulus).unwrap();
        assert_eq!(result, Some(GrowthResult::NoStructure));
        assert!(stimulus.is_claimed());
        assert!(log.borrow().is_empty());
    }
}
