use serde::{Deserialize, Serialize};

use super::defaults;

/// Term linking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Minimum own score a term needs before it can be linked into another.
    pub threshold: Option<i64>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_LINK_THRESHOLD,
        }
    }
}
