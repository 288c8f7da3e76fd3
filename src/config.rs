//! Runtime configuration
//!
//! Read once at startup from `CALTRACK_*` environment variables.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::models::DietPreference;

pub const ENV_DAILY_TARGET: &str = "CALTRACK_DAILY_TARGET";
pub const ENV_DIET_PREFERENCE: &str = "CALTRACK_DIET_PREFERENCE";
pub const ENV_SIMULATED_LATENCY_MS: &str = "CALTRACK_SIMULATED_LATENCY_MS";

pub const DEFAULT_DAILY_TARGET: u32 = 2000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidTarget { var: &'static str, value: String },

    #[error("{var} must be one of vegetarian, non-vegetarian, unset; got '{value}'")]
    InvalidPreference { var: &'static str, value: String },

    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidLatency { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub daily_target: u32,
    pub diet_preference: DietPreference,
    pub simulated_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_target: DEFAULT_DAILY_TARGET,
            diet_preference: DietPreference::Unset,
            simulated_latency_ms: 0,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_DAILY_TARGET) {
            config.daily_target = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&t| t > 0)
                .ok_or(ConfigError::InvalidTarget {
                    var: ENV_DAILY_TARGET,
                    value: raw,
                })?;
        }

        if let Some(raw) = lookup(ENV_DIET_PREFERENCE) {
            config.diet_preference =
                DietPreference::from_str(&raw).ok_or(ConfigError::InvalidPreference {
                    var: ENV_DIET_PREFERENCE,
                    value: raw,
                })?;
        }

        if let Some(raw) = lookup(ENV_SIMULATED_LATENCY_MS) {
            config.simulated_latency_ms =
                raw.trim().parse().map_err(|_| ConfigError::InvalidLatency {
                    var: ENV_SIMULATED_LATENCY_MS,
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
