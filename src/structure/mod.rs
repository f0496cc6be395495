//! Structure generators a mature sapling can turn into.
//!
//! The growth logic treats a generator as opaque: it is handed an anchor
//! position and either places its structure (returning `true`) or leaves
//! the world untouched and reports that it did not fit.

pub mod trunk;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::IVec3;
use crate::world::{GrowthRng, Terrain};

pub use trunk::TrunkGenerator;

/// Leaf colour of the autumn tree families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foliage {
    Brown,
    Orange,
    Purple,
    Yellow,
}

impl Foliage {
    pub const ALL: [Foliage; 4] = [Foliage::Brown, Foliage::Orange, Foliage::Purple, Foliage::Yellow];
}

/// Every structure family a sapling can grow into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Ordinary autumn tree
    Autumn(Foliage),
    /// Rare tall autumn tree, still rooted in a single cell
    BigAutumn(Foliage),
    /// Small fir on a single cell
    Fir,
    /// Large fir on a 2x2 footprint
    HugeFir,
    /// Redwood on a 2x2 footprint
    Redwood,
    Acacia,
}

impl StructureKind {
    /// All structure kinds, autumn families first
    pub fn all() -> Vec<StructureKind> {
        let mut kinds: Vec<StructureKind> = Foliage::ALL
            .iter()
            .flat_map(|&f| [StructureKind::Autumn(f), StructureKind::BigAutumn(f)])
            .collect();
        kinds.extend([
            StructureKind::Fir,
            StructureKind::HugeFir,
            StructureKind::Redwood,
            StructureKind::Acacia,
        ]);
        kinds
    }
}

/// Places a structure into the world.
pub trait StructureGenerator {
    /// Try to place the structure with its origin at `anchor`.
    ///
    /// Returns `false` when there was not enough room; the generator must
    /// not have written anything in that case.
    fn generate(&self, world: &mut dyn Terrain, rng: &mut dyn GrowthRng, anchor: IVec3) -> bool;
}

impl<F> StructureGenerator for F
where
    F: Fn(&mut dyn Terrain, &mut dyn GrowthRng, IVec3) -> bool,
{
    fn generate(&self, world: &mut dyn Terrain, rng: &mut dyn GrowthRng, anchor: IVec3) -> bool {
        self(world, rng, anchor)
    }
}

/// Generators registered per structure kind
#[derive(Default)]
pub struct GeneratorSet {
    generators: HashMap<StructureKind, Box<dyn StructureGenerator>>,
}

impl GeneratorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, returning the one it replaced
    pub fn register(
        &mut self,
        kind: StructureKind,
        generator: impl StructureGenerator + 'static,
    ) -> Option<Box<dyn StructureGenerator>> {
        self.generators.insert(kind, Box::new(generator))
    }

    /// Builder-style `register`
    pub fn with(mut self, kind: StructureKind, generator: impl StructureGenerator + 'static) -> Self {
        self.register(kind, generator);
        self
    }

    pub fn get(&self, kind: StructureKind) -> Option<&dyn StructureGenerator> {
        self.generators.get(&kind).map(|g| g.as_ref())
    }

    pub fn contains(&self, kind: StructureKind) -> bool {
        self.generators.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl std::fmt::Debug for GeneratorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorSet")
            .field("kinds", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}
