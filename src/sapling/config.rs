//! Growth configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{BlockId, Result};
use crate::sapling::registry::DEFAULT_HUGE_CHANCE;
use crate::world::{blocks, MAX_LIGHT};

/// A (block, sub-type) pair identifying one kind of soil
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoilIdentity {
    pub id: BlockId,
    pub subtype: u8,
}

impl SoilIdentity {
    pub fn new(id: BlockId, subtype: u8) -> Self {
        Self { id, subtype }
    }
}

/// Tunables for sapling growth. Missing JSON fields fall back to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Block ID saplings are stored under
    pub sapling_block: BlockId,
    /// Minimum light above the sapling for a growth roll
    pub growth_light: u8,
    /// Minimum light at the sapling (unless it sees the sky) to stay planted
    pub sustain_light: u8,
    /// A lit sapling advances on 1 tick in N
    pub growth_chance: u32,
    /// Autumn saplings pick their big structure 1 time in N
    pub huge_chance: u32,
    /// Soil that suppresses the huge roll. `None` disables the restriction.
    pub restricted_soil: Option<SoilIdentity>,
    /// Soils a sapling can be planted on and stay on
    pub allowed_soils: Vec<BlockId>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            sapling_block: blocks::SAPLING,
            growth_light: 9,
            sustain_light: 8,
            growth_chance: 7,
            huge_chance: DEFAULT_HUGE_CHANCE,
            restricted_soil: None,
            allowed_soils: vec![blocks::GRASS, blocks::DIRT, blocks::FARMLAND],
        }
    }
}

impl GrowthConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded growth config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write this config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.sapling_block == blocks::AIR {
            return Err(Error::Config("sapling_block cannot be air".to_string()));
        }
        if self.growth_chance == 0 {
            return Err(Error::Config("growth_chance must be at least 1".to_string()));
        }
        if self.huge_chance == 0 {
            return Err(Error::Config("huge_chance must be at least 1".to_string()));
        }
        if self.growth_light > MAX_LIGHT || self.sustain_light > MAX_LIGHT {
            return Err(Error::Config(format!(
                "light thresholds must not exceed {}",
                MAX_LIGHT
            )));
        }
        Ok(())
    }

    /// Check whether the soil under a sapling suppresses the huge roll
    pub fn is_restricted_soil(&self, id: BlockId, subtype: u8) -> bool {
        self.restricted_soil == Some(SoilIdentity::new(id, subtype))
    }
}
