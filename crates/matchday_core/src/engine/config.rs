//! Match configuration
//!
//! Defaults reproduce a regular 90-minute match with guarded transitions.
//! `MATCHDAY_CONFIG_PATH` may point at a JSON file overriding any field.

use serde::{Deserialize, Serialize};
use std::{env, fs};
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "MATCHDAY_CONFIG_PATH";

/// How a match reacts to a mutator called from the wrong state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Reject with `MatchError::InvalidTransition`.
    #[default]
    Strict,
    /// Log a warning and apply the change anyway. Status never moves backwards.
    Permissive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    pub transition_policy: TransitionPolicy,
    /// Minute the clock shows after the final whistle (default: 90)
    pub full_time_minute: u8,
    /// Used when a yellow card is given without a reason
    pub default_card_reason: String,
    /// Stadium name is "<home team> <suffix>" when none is given
    pub stadium_suffix: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            transition_policy: TransitionPolicy::Strict,
            full_time_minute: 90,
            default_card_reason: "rule violation".to_string(),
            stadium_suffix: "Stadium".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl MatchConfig {
    pub fn strict() -> Self {
        Self::default()
    }

    /// Unguarded transitions, as older match logs were recorded.
    pub fn permissive() -> Self {
        Self { transition_policy: TransitionPolicy::Permissive, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.full_time_minute == 0 {
            return Err(ConfigError::Invalid("full_time_minute must be positive".to_string()));
        }
        if self.default_card_reason.trim().is_empty() {
            return Err(ConfigError::Invalid("default_card_reason must not be blank".to_string()));
        }
        Ok(())
    }

    /// Load from the file named by `MATCHDAY_CONFIG_PATH`, or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
        Self::from_json(&content)
    }
}
