//! Plain set operations over the `sets` table.

use rusqlite::{params, Connection};

use karma_core::errors::KarmaResult;

use crate::to_storage_err;

pub fn add(conn: &Connection, key: &str, member: &str) -> KarmaResult<bool> {
    let n = conn
        .execute(
            "INSERT OR IGNORE INTO sets (key, member) VALUES (?1, ?2)",
            params![key, member],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n > 0)
}

pub fn remove(conn: &Connection, key: &str, member: &str) -> KarmaResult<bool> {
    let n = conn
        .execute(
            "DELETE FROM sets WHERE key = ?1 AND member = ?2",
            params![key, member],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n > 0)
}

pub fn members(conn: &Connection, key: &str) -> KarmaResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT member FROM sets WHERE key = ?1 ORDER BY member ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![key], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn is_member(conn: &Connection, key: &str, member: &str) -> KarmaResult<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sets WHERE key = ?1 AND member = ?2)",
        params![key, member],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
