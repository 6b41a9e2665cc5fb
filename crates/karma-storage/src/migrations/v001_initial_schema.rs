//! v001: sorted sets, plain sets, expiring keys.

use rusqlite::Connection;

use karma_core::errors::KarmaResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> KarmaResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS sorted_sets (
            key     TEXT NOT NULL,
            member  TEXT NOT NULL,
            score   INTEGER NOT NULL,
            PRIMARY KEY (key, member)
        );

        CREATE TABLE IF NOT EXISTS sets (
            key     TEXT NOT NULL,
            member  TEXT NOT NULL,
            PRIMARY KEY (key, member)
        );

        CREATE TABLE IF NOT EXISTS expiring_keys (
            key            TEXT PRIMARY KEY,
            expires_at_ms  INTEGER NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
