//! Error types for sapling growth

use thiserror::Error;

use crate::core::types::{BlockId, IVec3};
use crate::structure::StructureKind;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid sapling sub-type {subtype:#04x} at {position}")]
    InvalidSubtype { subtype: u8, position: IVec3 },

    #[error("Block {found} at {position} is not a sapling")]
    NotSapling { found: BlockId, position: IVec3 },

    #[error("No generator registered for {0:?}")]
    MissingGenerator(StructureKind),
}
