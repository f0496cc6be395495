//! The growth procedure: choose a structure, clear its footprint, run the
//! generator and undo the clearing if it did not fit.

use crate::core::error::Error;
use crate::core::types::{BlockId, IVec3, Result};
use crate::sapling::config::GrowthConfig;
use crate::sapling::footprint::find_cluster;
use crate::sapling::registry::{GrowthPlan, VariantRegistry};
use crate::sapling::soil::{SoilPredicate, SoilSet};
use crate::sapling::subtype::SaplingState;
use crate::sapling::transaction::FootprintTransaction;
use crate::structure::GeneratorSet;
use crate::world::{GrowthRng, Terrain};

/// Result of one growth attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthResult {
    /// Nothing can grow from this sapling as it stands (a lone redwood)
    NoStructure,
    /// The structure was placed
    Grown(GrowthPlan),
    /// The generator found no room; the footprint was restored
    Obstructed(GrowthPlan),
}

impl GrowthResult {
    pub fn is_grown(&self) -> bool {
        matches!(self, GrowthResult::Grown(_))
    }
}

/// Growth behaviour of the sapling block
pub struct SaplingGrowth {
    pub(crate) config: GrowthConfig,
    registry: VariantRegistry,
    generators: GeneratorSet,
    pub(crate) soils: Box<dyn SoilPredicate>,
}

impl SaplingGrowth {
    /// Build from a validated config. Allowed soils come from
    /// `config.allowed_soils` unless replaced with [`with_soils`](Self::with_soils).
    pub fn new(config: GrowthConfig, generators: GeneratorSet) -> Result<Self> {
        config.validate()?;

        let registry = VariantRegistry::new(config.huge_chance);
        for kind in registry.structures() {
            if !generators.contains(kind) {
                log::debug!("No generator registered for {:?}", kind);
            }
        }

        let soils = SoilSet::new(config.allowed_soils.iter().copied());
        if soils.is_empty() {
            log::warn!("No allowed soils configured; saplings cannot be planted or sustained");
        } else {
            log::debug!("{} allowed soil block(s)", soils.len());
        }
        let soils = Box::new(soils);
        Ok(Self {
            config,
            registry,
            generators,
            soils,
        })
    }

    /// Replace the allowed-soil predicate
    pub fn with_soils(mut self, soils: impl SoilPredicate + 'static) -> Self {
        self.soils = Box::new(soils);
        self
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Block ID this growth logic is bound to
    pub fn sapling_block(&self) -> BlockId {
        self.config.sapling_block
    }

    /// Decode the sapling at `pos`, rejecting foreign blocks and corrupt
    /// sub-types.
    pub fn sapling_at(&self, world: &dyn Terrain, pos: IVec3) -> Result<SaplingState> {
        let found = world.block_id(pos);
        if found != self.config.sapling_block {
            return Err(Error::NotSapling { found, position: pos });
        }

        let subtype = world.subtype(pos);
        SaplingState::decode(subtype).ok_or_else(|| {
            log::warn!("Rejecting sapling at {} with sub-type {:#04x}", pos, subtype);
            Error::InvalidSubtype { subtype, position: pos }
        })
    }

    /// Check whether the block under `pos` suppresses the huge roll
    fn soil_restricted(&self, world: &dyn Terrain, pos: IVec3) -> bool {
        let below = pos - IVec3::Y;
        self.config
            .is_restricted_soil(world.block_id(below), world.subtype(below))
    }

    /// Decide what the sapling at `pos` would grow into, without touching
    /// the world. May draw the huge roll from `rng`.
    pub fn plan(
        &self,
        world: &dyn Terrain,
        pos: IVec3,
        rng: &mut dyn GrowthRng,
    ) -> Result<Option<GrowthPlan>> {
        let state = self.sapling_at(world, pos)?;
        let profile = self.registry.profile(state.variant);

        let restricted = self.soil_restricted(world, pos);
        let cluster = if profile.needs_cluster_scan() {
            find_cluster(world, self.config.sapling_block, pos, state.variant)
        } else {
            None
        };

        Ok(profile.select(restricted, cluster, rng))
    }

    /// Grow the sapling at `pos` right now, bypassing every gate.
    pub fn grow(
        &self,
        world: &mut dyn Terrain,
        pos: IVec3,
        rng: &mut dyn GrowthRng,
    ) -> Result<GrowthResult> {
        let Some(plan) = self.plan(world, pos, rng)? else {
            log::trace!("Sapling at {} has nothing to grow into", pos);
            return Ok(GrowthResult::NoStructure);
        };

        let generator = self
            .generators
            .get(plan.structure)
            .ok_or(Error::MissingGenerator(plan.structure))?;

        let tx = FootprintTransaction::clear(world, &plan.cells(pos));
        let anchor = plan.anchor(pos);
        log::trace!("Cleared {:?} ahead of {:?}", tx.saved(), plan.structure);

        if generator.generate(world, rng, anchor) {
            let cells = tx.commit();
            log::debug!("Grew {:?} at {} ({} cells)", plan.structure, anchor, cells);
            Ok(GrowthResult::Grown(plan))
        } else {
            tx.rollback(world);
            log::debug!("{:?} did not fit at {}, sapling restored", plan.structure, anchor);
            Ok(GrowthResult::Obstructed(plan))
        }
    }
}

impl std::fmt::Debug for SaplingGrowth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaplingGrowth")
            .field("config", &self.config)
            .field("generators", &self.generators)
            .finish_non_exhaustive()
    }
}
