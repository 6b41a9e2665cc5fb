//! # karma-storage
//!
//! SQLite implementation of [`IScoreStore`](karma_core::IScoreStore):
//! sorted sets, plain sets, and expiring marker keys in three tables,
//! behind a single serialized write connection.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::SqliteScoreStore;

use karma_core::errors::{KarmaError, StorageError};

/// Wrap a SQLite failure message as a workspace error.
pub fn to_storage_err(message: String) -> KarmaError {
    KarmaError::Storage(StorageError::SqliteError { message })
}
