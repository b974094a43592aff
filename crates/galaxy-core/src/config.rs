//! Simulation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, Result};
use crate::types::Arena;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Arena width in pixels.
    pub arena_width: f64,
    /// Arena height in pixels.
    pub arena_height: f64,
    /// Run the built-in overlap detector. Hosts that deliver their own
    /// overlap events turn this off.
    pub detect_overlaps: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            detect_overlaps: true,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.arena_width >= MIN_ARENA_WIDTH && self.arena_height >= MIN_ARENA_HEIGHT) {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
                min_width: MIN_ARENA_WIDTH,
                min_height: MIN_ARENA_HEIGHT,
            });
        }
        Ok(())
    }
}
