//! Sorted-set operations over the `sorted_sets` table.

use rusqlite::{params, Connection, OptionalExtension};

use karma_core::errors::KarmaResult;
use karma_core::SortOrder;

use crate::to_storage_err;

pub fn incr_by(conn: &Connection, key: &str, member: &str, delta: i64) -> KarmaResult<i64> {
    conn.query_row(
        "INSERT INTO sorted_sets (key, member, score) VALUES (?1, ?2, ?3)
         ON CONFLICT (key, member) DO UPDATE SET score = score + excluded.score
         RETURNING score",
        params![key, member, delta],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn score(conn: &Connection, key: &str, member: &str) -> KarmaResult<Option<i64>> {
    conn.query_row(
        "SELECT score FROM sorted_sets WHERE key = ?1 AND member = ?2",
        params![key, member],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn add(conn: &Connection, key: &str, member: &str, score: i64) -> KarmaResult<bool> {
    let existed = self::score(conn, key, member)?.is_some();
    conn.execute(
        "INSERT INTO sorted_sets (key, member, score) VALUES (?1, ?2, ?3)
         ON CONFLICT (key, member) DO UPDATE SET score = excluded.score",
        params![key, member, score],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(!existed)
}

pub fn remove(conn: &Connection, key: &str, member: &str) -> KarmaResult<bool> {
    let n = conn
        .execute(
            "DELETE FROM sorted_sets WHERE key = ?1 AND member = ?2",
            params![key, member],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n > 0)
}

pub fn card(conn: &Connection, key: &str) -> KarmaResult<usize> {
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sorted_sets WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

/// Resolve an inclusive, possibly negative rank range against a set of
/// `len` members into `(offset, limit)`. `None` when the range is empty.
pub fn resolve_rank_range(start: i64, stop: i64, len: usize) -> Option<(i64, i64)> {
    let len = len as i64;
    if len == 0 {
        return None;
    }
    let start = if start < 0 { len + start } else { start }.max(0);
    let stop = if stop < 0 { len + stop } else { stop }.min(len - 1);
    if start > stop {
        return None;
    }
    Some((start, stop - start + 1))
}

pub fn range(
    conn: &Connection,
    key: &str,
    start: i64,
    stop: i64,
    order: SortOrder,
) -> KarmaResult<Vec<(String, i64)>> {
    let Some((offset, limit)) = resolve_rank_range(start, stop, card(conn, key)?) else {
        return Ok(Vec::new());
    };
    let sql = match order {
        SortOrder::Ascending => {
            "SELECT member, score FROM sorted_sets WHERE key = ?1
             ORDER BY score ASC, member ASC LIMIT ?2 OFFSET ?3"
        }
        SortOrder::Descending => {
            "SELECT member, score FROM sorted_sets WHERE key = ?1
             ORDER BY score DESC, member ASC LIMIT ?2 OFFSET ?3"
        }
    };
    collect_pairs(conn, sql, params![key, limit, offset])
}

pub fn range_by_score(
    conn: &Connection,
    key: &str,
    min: i64,
    max: i64,
) -> KarmaResult<Vec<(String, i64)>> {
    collect_pairs(
        conn,
        "SELECT member, score FROM sorted_sets
         WHERE key = ?1 AND score >= ?2 AND score <= ?3
         ORDER BY score ASC, member ASC",
        params![key, min, max],
    )
}

pub fn remove_range_by_score(conn: &Connection, key: &str, min: i64, max: i64) -> KarmaResult<usize> {
    conn.execute(
        "DELETE FROM sorted_sets WHERE key = ?1 AND score >= ?2 AND score <= ?3",
        params![key, min, max],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn remove_range_by_rank(conn: &Connection, key: &str, start: i64, stop: i64) -> KarmaResult<usize> {
    let Some((offset, limit)) = resolve_rank_range(start, stop, card(conn, key)?) else {
        return Ok(0);
    };
    conn.execute(
        "DELETE FROM sorted_sets WHERE key = ?1 AND member IN (
            SELECT member FROM sorted_sets WHERE key = ?1
            ORDER BY score ASC, member ASC LIMIT ?2 OFFSET ?3
         )",
        params![key, limit, offset],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn collect_pairs(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> KarmaResult<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
