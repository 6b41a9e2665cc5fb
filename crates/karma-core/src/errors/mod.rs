//! Error handling for the karma engine.
//! One error enum per subsystem, `thiserror` only.

pub mod action_error;
pub mod config_error;
pub mod karma_error;
pub mod storage_error;

pub use action_error::ActionError;
pub use config_error::ConfigError;
pub use karma_error::{KarmaError, KarmaResult};
pub use storage_error::StorageError;
