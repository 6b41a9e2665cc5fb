//! Configuration, loaded from TOML with environment overrides.

pub mod cooldown_config;
pub mod decay_config;
pub mod defaults;
pub mod link_config;
pub mod observability_config;
pub mod storage_config;
pub mod term_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cooldown_config::CooldownConfig;
pub use decay_config::DecayConfig;
pub use link_config::LinkConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use term_config::TermConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`KARMA_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KarmaConfig {
    pub cooldown: CooldownConfig,
    pub decay: DecayConfig,
    pub links: LinkConfig,
    pub terms: TermConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl KarmaConfig {
    /// Load from an optional TOML file, then apply `KARMA_*` environment
    /// overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from a variable lookup. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("KARMA_COOLDOWN_SECS").and_then(|v| v.parse::<u64>().ok()) {
            self.cooldown.seconds = Some(v);
        }
        if let Some(v) = lookup("KARMA_DECAY_ENABLED").and_then(|v| v.parse::<bool>().ok()) {
            self.decay.enabled = v;
        }
        if let Some(v) = lookup("KARMA_DECAY_INTERVAL_SECS").and_then(|v| v.parse::<u64>().ok()) {
            self.decay.interval_secs = v;
        }
        if let Some(v) = lookup("KARMA_LINK_THRESHOLD").and_then(|v| v.parse::<i64>().ok()) {
            self.links.threshold = Some(v);
        }
        if let Some(v) = lookup("KARMA_TERM_PATTERN") {
            self.terms.pattern = v;
        }
        if let Some(v) = lookup("KARMA_DB_PATH") {
            self.storage.db_path = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decay.enabled && self.decay.interval_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "decay.interval_secs".to_string(),
                message: "must be greater than 0 when decay is enabled".to_string(),
            });
        }
        if self.decay.interval_secs > i64::MAX as u64 / 1000 {
            return Err(ConfigError::ValidationFailed {
                field: "decay.interval_secs".to_string(),
                message: "is too large".to_string(),
            });
        }
        if self.cooldown.seconds.is_some_and(|s| s > i64::MAX as u64 / 1000) {
            return Err(ConfigError::ValidationFailed {
                field: "cooldown.seconds".to_string(),
                message: "is too large".to_string(),
            });
        }
        if self.terms.pattern.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "terms.pattern".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Err(e) = regex::Regex::new(&self.terms.pattern) {
            return Err(ConfigError::ValidationFailed {
                field: "terms.pattern".to_string(),
                message: e.to_string(),
            });
        }
        Ok(())
    }
}
