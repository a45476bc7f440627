//! Game tuning
//!
//! Everything balance-related in one serde-friendly struct so it can be
//! tweaked from JSON without touching the simulation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DECAY_INTERVAL_MS;
use crate::error::{ConfigError, Result};
use crate::pet::DecayRates;
use crate::sim::{MinigameKind, SessionConfig, presets};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Pet ===
    /// How often passive decay runs
    pub decay_interval_ms: u64,
    /// What each decay step takes away
    pub decay: DecayRates,

    // === Minigames ===
    pub feeding: SessionConfig,
    pub pool: SessionConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decay_interval_ms: DECAY_INTERVAL_MS,
            decay: DecayRates::default(),
            feeding: presets::feeding(),
            pool: presets::pool(),
        }
    }
}

impl Settings {
    /// Session configuration for a minigame
    pub fn minigame(&self, kind: MinigameKind) -> &SessionConfig {
        match kind {
            MinigameKind::Feeding => &self.feeding,
            MinigameKind::Pool => &self.pool,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.decay_interval_ms == 0 {
            return Err(ConfigError::InvalidSetting(
                "decay_interval_ms must be non-zero".to_string(),
            ));
        }
        let rates = [
            self.decay.happiness,
            self.decay.hunger,
            self.decay.cleanliness,
            self.decay.energy,
            self.decay.fun,
        ];
        if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(ConfigError::InvalidSetting(format!(
                "decay rates must be finite and non-negative: {:?}",
                self.decay
            )));
        }
        self.feeding.validate()?;
        self.pool.validate()?;
        Ok(())
    }

    /// Parse and validate settings; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
