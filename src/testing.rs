//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::types::{IVec2, IVec3};
use crate::sapling::{GrowthConfig, SaplingGrowth, SaplingState, Variant};
use crate::structure::{GeneratorSet, StructureGenerator, StructureKind};
use crate::world::{blocks, GridWorld, GrowthRng, Terrain};

/// RNG replaying a fixed script of draws.
pub(crate) struct ScriptedRng {
    draws: VecDeque<u32>,
    fallback: Option<u32>,
    bounds: Vec<u32>,
}

impl ScriptedRng {
    /// Replay `draws` in order; panics once they run out.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            fallback: None,
            bounds: Vec::new(),
        }
    }

    /// Return `value` for every draw.
    pub fn always(value: u32) -> Self {
        Self {
            draws: VecDeque::new(),
            fallback: Some(value),
            bounds: Vec::new(),
        }
    }

    /// Bounds of every draw taken so far.
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }
}

impl GrowthRng for ScriptedRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.bounds.push(bound);
        let value = self
            .draws
            .pop_front()
            .or(self.fallback)
            .expect("rng script exhausted");
        assert!(value < bound, "scripted draw {} out of range for bound {}", value, bound);
        value
    }
}

/// One generator invocation: which structure, where, and whether the
/// anchor cell had already been cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GeneratorCall {
    pub kind: StructureKind,
    pub anchor: IVec3,
    pub anchor_was_empty: bool,
}

pub(crate) type CallLog = Rc<RefCell<Vec<GeneratorCall>>>;

/// Generator that records its calls and returns a fixed outcome. On
/// success it drops a log on the anchor.
struct RecordingGenerator {
    kind: StructureKind,
    succeed: bool,
    log: CallLog,
}

impl StructureGenerator for RecordingGenerator {
    fn generate(&self, world: &mut dyn Terrain, _rng: &mut dyn GrowthRng, anchor: IVec3) -> bool {
        self.log.borrow_mut().push(GeneratorCall {
            kind: self.kind,
            anchor,
            anchor_was_empty: world.is_empty(anchor),
        });
        if self.succeed {
            world.set_block(anchor, blocks::LOG, 0);
        }
        self.succeed
    }
}

/// Recording generators for every structure kind, sharing one call log.
pub(crate) fn recording_generators(succeed: bool) -> (GeneratorSet, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut set = GeneratorSet::new();
    for kind in StructureKind::all() {
        set.register(
            kind,
            RecordingGenerator {
                kind,
                succeed,
                log: Rc::clone(&log),
            },
        );
    }
    (set, log)
}

/// Growth logic with default config and recording generators.
pub(crate) fn recording_growth(succeed: bool) -> (SaplingGrowth, CallLog) {
    let (generators, log) = recording_generators(succeed);
    let growth = SaplingGrowth::new(GrowthConfig::default(), generators)
        .expect("default config is valid");
    (growth, log)
}

/// Daylit world with a grass layer at y = 0 spanning -4..=4 on X and Z.
pub(crate) fn grass_world() -> GridWorld {
    let mut world = GridWorld::new();
    world.fill_layer(0, IVec2::new(-4, -4), IVec2::new(4, 4), blocks::GRASS);
    world
}

/// Write a sapling cell directly, bypassing placement rules.
pub(crate) fn put_sapling(world: &mut GridWorld, pos: IVec3, variant: Variant, marked: bool) {
    let state = SaplingState { variant, marked };
    world.set_block(pos, blocks::SAPLING, state.encode());
}
