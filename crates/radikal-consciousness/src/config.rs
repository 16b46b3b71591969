//! Radikal configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file exists.

use crate::ritual::DEFAULT_ROUNDS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadikalConfig {
    /// Demonstration parameters.
    pub ritual: RitualConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RitualConfig {
    /// How many times the bug is triggered.
    pub rounds: usize,
    /// Seed for the random source. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self { rounds: DEFAULT_ROUNDS, seed: None }
    }
}

impl RadikalConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} — using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {} — using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
