//! Expiring marker keys. Expiry is evaluated against the caller's clock;
//! stale rows are purged lazily whenever a key is touched.

use rusqlite::{params, Connection, OptionalExtension};

use karma_core::errors::KarmaResult;

use crate::to_storage_err;

/// Store a marker that lives until `expires_at_ms`.
pub fn set(conn: &Connection, key: &str, expires_at_ms: i64) -> KarmaResult<()> {
    conn.execute(
        "INSERT INTO expiring_keys (key, expires_at_ms) VALUES (?1, ?2)
         ON CONFLICT (key) DO UPDATE SET expires_at_ms = excluded.expires_at_ms",
        params![key, expires_at_ms],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Milliseconds left on a live key, or `None` (removing it if expired).
pub fn remaining_ms(conn: &Connection, key: &str, now_ms: i64) -> KarmaResult<Option<i64>> {
    let expires_at: Option<i64> = conn
        .query_row(
            "SELECT expires_at_ms FROM expiring_keys WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match expires_at {
        Some(at) if at > now_ms => Ok(Some(at - now_ms)),
        Some(_) => {
            conn.execute("DELETE FROM expiring_keys WHERE key = ?1", params![key])
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Drop every expired marker. Returns the number removed.
pub fn purge_expired(conn: &Connection, now_ms: i64) -> KarmaResult<usize> {
    conn.execute(
        "DELETE FROM expiring_keys WHERE expires_at_ms <= ?1",
        params![now_ms],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
