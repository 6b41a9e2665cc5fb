//! # karma-core
//!
//! Foundation crate for the karma scoring engine.
//! Defines the shared types, traits, errors, config, and storage key layout.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod keys;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::KarmaConfig;
pub use context::KarmaContext;
pub use errors::{KarmaError, KarmaResult};
pub use models::{Action, CooldownStatus, LinkOutcome, Modifier, SortOrder};
pub use traits::{Clock, IScoreStore, IUserDirectory, SystemClock};
