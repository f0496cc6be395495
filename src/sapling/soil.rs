//! Which soils can hold a sapling.

use std::collections::HashSet;

use crate::core::types::BlockId;

/// Decides whether a block can sustain a sapling planted on top of it.
pub trait SoilPredicate {
    fn sustains(&self, soil: BlockId) -> bool;
}

impl<F: Fn(BlockId) -> bool> SoilPredicate for F {
    fn sustains(&self, soil: BlockId) -> bool {
        self(soil)
    }
}

/// Fixed set of allowed soil IDs
#[derive(Clone, Debug, Default)]
pub struct SoilSet {
    ids: HashSet<BlockId>,
}

impl SoilSet {
    pub fn new(ids: impl IntoIterator<Item = BlockId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl SoilPredicate for SoilSet {
    fn sustains(&self, soil: BlockId) -> bool {
        self.ids.contains(&soil)
    }
}
