//! Variant registry: which structures each sapling variant can become.
//!
//! One table row per variant drives a single dispatch routine,
//! [`VariantProfile::select`].

use crate::core::types::{IVec2, IVec3};
use crate::sapling::subtype::Variant;
use crate::structure::{Foliage, StructureKind};
use crate::world::GrowthRng;

/// Default rarity of the huge roll for single-cell variants (1 in N)
pub const DEFAULT_HUGE_CHANCE: u32 = 20;

/// How a variant decides between its ordinary and huge structure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HugeRule {
    /// No huge alternative
    Never,
    /// 1-in-N roll on a single cell, suppressed on restricted soil
    Roll(u32),
    /// Huge structure requires a 2x2 cluster of same-variant saplings
    Cluster,
}

/// Cells a structure replaces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Footprint {
    Single,
    /// 2x2 square extending +X/+Z from its corner
    Square,
}

/// Growth parameters for one variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantProfile {
    /// Structure grown from a lone sapling. `None` means a lone sapling of
    /// this variant never grows.
    pub single: Option<StructureKind>,
    /// Rarer or cluster-only alternative
    pub huge: Option<StructureKind>,
    pub huge_rule: HugeRule,
}

/// Which structure to place and where, relative to the triggering cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPlan {
    pub structure: StructureKind,
    /// Offset of the footprint's corner on X (`x`) and Z (`y`), each 0 or -1
    pub offset: IVec2,
    pub footprint: Footprint,
}

impl GrowthPlan {
    pub fn single(structure: StructureKind) -> Self {
        Self {
            structure,
            offset: IVec2::ZERO,
            footprint: Footprint::Single,
        }
    }

    pub fn square(structure: StructureKind, offset: IVec2) -> Self {
        Self {
            structure,
            offset,
            footprint: Footprint::Square,
        }
    }

    /// Corner cell of the footprint
    pub fn corner(&self, origin: IVec3) -> IVec3 {
        origin + IVec3::new(self.offset.x, 0, self.offset.y)
    }

    /// Every cell the footprint covers, corner first
    pub fn cells(&self, origin: IVec3) -> Vec<IVec3> {
        let corner = self.corner(origin);
        match self.footprint {
            Footprint::Single => vec![corner],
            Footprint::Square => vec![
                corner,
                corner + IVec3::X,
                corner + IVec3::Z,
                corner + IVec3::new(1, 0, 1),
            ],
        }
    }

    /// Position handed to the generator: the corner for a single cell,
    /// shifted by one on X and Z for a square so the generator's origin
    /// sits at the cluster's centre.
    pub fn anchor(&self, origin: IVec3) -> IVec3 {
        match self.footprint {
            Footprint::Single => self.corner(origin),
            Footprint::Square => self.corner(origin) + IVec3::new(1, 0, 1),
        }
    }
}

impl VariantProfile {
    /// Pick the structure for this variant.
    ///
    /// `cluster` is the corner offset of a matching 2x2 cluster, only
    /// consulted by cluster variants. The huge roll draws from `rng` only
    /// when the soil is not restricted.
    pub fn select(
        &self,
        soil_restricted: bool,
        cluster: Option<IVec2>,
        rng: &mut dyn GrowthRng,
    ) -> Option<GrowthPlan> {
        match self.huge_rule {
            HugeRule::Never => self.single.map(GrowthPlan::single),
            HugeRule::Roll(chance) => {
                if let Some(huge) = self.huge {
                    if !soil_restricted && rng.one_in(chance) {
                        return Some(GrowthPlan::single(huge));
                    }
                }
                self.single.map(GrowthPlan::single)
            }
            HugeRule::Cluster => match (self.huge, cluster) {
                (Some(huge), Some(offset)) => Some(GrowthPlan::square(huge, offset)),
                _ => self.single.map(GrowthPlan::single),
            },
        }
    }

    pub fn needs_cluster_scan(&self) -> bool {
        self.huge_rule == HugeRule::Cluster
    }
}

/// Static variant table
#[derive(Clone, Debug)]
pub struct VariantRegistry {
    profiles: [VariantProfile; 7],
}

impl VariantRegistry {
    /// Standard table with the given huge-roll rarity for autumn variants
    pub fn new(huge_chance: u32) -> Self {
        let autumn = |foliage| VariantProfile {
            single: Some(StructureKind::Autumn(foliage)),
            huge: Some(StructureKind::BigAutumn(foliage)),
            huge_rule: HugeRule::Roll(huge_chance),
        };

        Self {
            profiles: [
                autumn(Foliage::Brown),
                autumn(Foliage::Orange),
                autumn(Foliage::Purple),
                autumn(Foliage::Yellow),
                VariantProfile {
                    single: Some(StructureKind::Fir),
                    huge: Some(StructureKind::HugeFir),
                    huge_rule: HugeRule::Cluster,
                },
                VariantProfile {
                    single: None,
                    huge: Some(StructureKind::Redwood),
                    huge_rule: HugeRule::Cluster,
                },
                VariantProfile {
                    single: Some(StructureKind::Acacia),
                    huge: None,
                    huge_rule: HugeRule::Never,
                },
            ],
        }
    }

    pub fn profile(&self, variant: Variant) -> &VariantProfile {
        &self.profiles[variant.code() as usize]
    }

    /// Every structure kind some variant can produce
    pub fn structures(&self) -> Vec<StructureKind> {
        let mut kinds = Vec::new();
        for profile in &self.profiles {
            for kind in [profile.single, profile.huge].into_iter().flatten() {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        kinds
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_HUGE_CHANCE)
    }
}
