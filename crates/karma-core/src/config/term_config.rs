use serde::{Deserialize, Serialize};

use super::defaults;

/// Term matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    /// Regex fragment a term must match in chat text.
    pub pattern: String,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            pattern: defaults::DEFAULT_TERM_PATTERN.to_string(),
        }
    }
}
