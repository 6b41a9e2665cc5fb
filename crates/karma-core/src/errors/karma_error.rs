use super::{ActionError, ConfigError, StorageError};

/// Top-level error type. Aggregates subsystem errors via `From` conversions.
///
/// Domain outcomes (cooldowns, missing terms, rejected links) are not errors;
/// they are reported as reply text. Only infrastructure failures land here.
#[derive(Debug, thiserror::Error)]
pub enum KarmaError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("action error: {0}")]
    Action(#[from] ActionError),
}

/// Convenience alias used across the workspace.
pub type KarmaResult<T> = Result<T, KarmaError>;
