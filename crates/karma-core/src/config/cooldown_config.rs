use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-user, per-term rate limiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownConfig {
    /// Seconds a user must wait before modifying the same term again.
    /// `None` or `0` disables the gate.
    pub seconds: Option<u64>,
}

impl CooldownConfig {
    /// The effective cooldown, or `None` when the gate is disabled.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.seconds
            .filter(|s| *s > 0)
            .map(|s| chrono::Duration::seconds(s as i64))
    }
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            seconds: defaults::DEFAULT_COOLDOWN_SECS,
        }
    }
}
