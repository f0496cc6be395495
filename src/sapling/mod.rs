//! Sapling growth automaton.
//!
//! A sapling cell grows in two admitted ticks: the first sets its mark, the
//! second picks a structure from the [`registry`], clears the footprint and
//! runs the structure's generator, restoring the footprint if the generator
//! reports that the structure did not fit.

pub mod subtype;
pub mod registry;
pub mod footprint;
pub mod transaction;
pub mod config;
pub mod soil;
pub mod growth;
pub mod scheduler;
pub mod sustain;
pub mod stimulus;

pub use config::{GrowthConfig, SoilIdentity};
pub use footprint::find_cluster;
pub use growth::{GrowthResult, SaplingGrowth};
pub use registry::{Footprint, GrowthPlan, HugeRule, VariantProfile, VariantRegistry};
pub use scheduler::TickOutcome;
pub use soil::{SoilPredicate, SoilSet};
pub use stimulus::GrowthStimulus;
pub use subtype::{SaplingState, Variant};
pub use sustain::dropped_variant;
pub use transaction::FootprintTransaction;
