use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Record actions and reverse them once they age past `interval_secs`.
    pub enabled: bool,
    /// Age (seconds) after which a recorded action is undone.
    pub interval_secs: u64,
}

impl DecayConfig {
    pub fn interval(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.interval_secs as i64)
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_DECAY_ENABLED,
            interval_secs: defaults::DEFAULT_DECAY_INTERVAL_SECS,
        }
    }
}
