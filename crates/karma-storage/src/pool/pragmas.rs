//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use karma_core::config::StorageConfig;
use karma_core::errors::KarmaResult;

use crate::to_storage_err;

/// Apply performance and safety pragmas to a connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> KarmaResult<()> {
    conn.busy_timeout(std::time::Duration::from_millis(u64::from(config.busy_timeout_ms)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    if config.wal_mode {
        // journal_mode returns the resulting mode as a row; in-memory
        // databases report "memory" and that is fine.
        let _mode: String = conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
            .map_err(|e| to_storage_err(e.to_string()))?;
    }

    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> KarmaResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
