//! Operations spanning every key kind.

use rusqlite::{params, Connection};

use karma_core::errors::{KarmaResult, StorageError};

use crate::to_storage_err;

/// Remove a key from every table.
pub fn delete(conn: &Connection, key: &str) -> KarmaResult<bool> {
    let mut removed = 0;
    for sql in [
        "DELETE FROM sorted_sets WHERE key = ?1",
        "DELETE FROM sets WHERE key = ?1",
        "DELETE FROM expiring_keys WHERE key = ?1",
    ] {
        removed += conn
            .execute(sql, params![key])
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(removed > 0)
}

pub fn exists(conn: &Connection, key: &str, now_ms: i64) -> KarmaResult<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sorted_sets WHERE key = ?1)
             OR EXISTS (SELECT 1 FROM sets WHERE key = ?1)
             OR EXISTS (SELECT 1 FROM expiring_keys WHERE key = ?1 AND expires_at_ms > ?2)",
        params![key, now_ms],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Every live key matching a glob pattern, sorted.
pub fn matching(conn: &Connection, pattern: &str, now_ms: i64) -> KarmaResult<Vec<String>> {
    if pattern.is_empty() {
        return Err(StorageError::InvalidPattern {
            pattern: pattern.to_string(),
        }
        .into());
    }
    let mut stmt = conn
        .prepare(
            "SELECT key FROM sorted_sets WHERE key GLOB ?1
             UNION
             SELECT key FROM sets WHERE key GLOB ?1
             UNION
             SELECT key FROM expiring_keys WHERE key GLOB ?1 AND expires_at_ms > ?2
             ORDER BY key ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![pattern, now_ms], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
