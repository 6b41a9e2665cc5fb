//! v002: index for score-ordered scans (leaderboards, decay cutoffs).

use rusqlite::Connection;

use karma_core::errors::KarmaResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> KarmaResult<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_sorted_sets_score ON sorted_sets(key, score, member);
        CREATE INDEX IF NOT EXISTS idx_expiring_keys_expiry ON expiring_keys(expires_at_ms);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
