//! Session configuration.
//!
//! Screen bounds are only read when entities are created (layout, spawn
//! edges); the simulation never reacts to a resize.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_SEED, TICK_RATE};

/// Errors raised while loading or validating a [`SessionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid screen size {width}x{height}")]
    InvalidScreen { width: f64, height: f64 },

    #[error("tick rate must be positive")]
    InvalidTickRate,
}

/// Configuration for starting a new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Playfield width in world units.
    pub screen_width: f64,
    /// Playfield height in world units.
    pub screen_height: f64,
    /// RNG seed for determinism. Same seed + same inputs = same session.
    pub seed: u64,
    /// Host tick rate (Hz), used by fixed-step hosts.
    pub tick_rate: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            seed: DEFAULT_SEED,
            tick_rate: TICK_RATE,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.screen_width) || !valid(self.screen_height) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }

    /// Seconds per tick at the configured rate.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }
}
