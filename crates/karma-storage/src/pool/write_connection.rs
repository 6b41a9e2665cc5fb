//! Single connection behind a `std::sync::Mutex`.
//! Every store call takes the lock for its whole duration, which is what
//! makes each individual call atomic. The lock never blocks on a runtime,
//! so the store may be used from sync and async hosts alike.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use karma_core::config::StorageConfig;
use karma_core::errors::{KarmaResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a connection to the given database path.
    pub fn open(path: &Path, config: &StorageConfig) -> KarmaResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> KarmaResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(
            &conn,
            &StorageConfig {
                wal_mode: false,
                ..StorageConfig::default()
            },
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the lock and execute a closure with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> KarmaResult<T>
    where
        F: FnOnce(&Connection) -> KarmaResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::SqliteError {
            message: "write lock poisoned".to_string(),
        })?;
        f(&guard)
    }
}
