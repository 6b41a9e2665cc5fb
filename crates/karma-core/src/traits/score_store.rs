use crate::errors::KarmaResult;
use crate::models::SortOrder;

/// Ordered key-value store holding all persisted karma state.
///
/// Modeled on a sorted-set store: named sorted sets with integer scores,
/// plain sets, and expiring marker keys. Every single call is atomic;
/// sequences of calls are not.
///
/// Rank ranges are inclusive and accept negative indices counted from the
/// end (`-1` is the last element). Members with equal scores are ordered by
/// member, ascending, in both directions.
pub trait IScoreStore: Send + Sync {
    // --- Sorted sets ---
    /// Add `delta` to a member's score (creating it at 0) and return the new score.
    fn zincr_by(&self, key: &str, member: &str, delta: i64) -> KarmaResult<i64>;
    fn zscore(&self, key: &str, member: &str) -> KarmaResult<Option<i64>>;
    /// Set a member's score. Returns true if the member was new.
    fn zadd(&self, key: &str, member: &str, score: i64) -> KarmaResult<bool>;
    fn zrem(&self, key: &str, member: &str) -> KarmaResult<bool>;
    fn zcard(&self, key: &str) -> KarmaResult<usize>;
    fn zrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
        order: SortOrder,
    ) -> KarmaResult<Vec<(String, i64)>>;
    /// Members with `min <= score <= max`, ascending.
    fn zrange_by_score(&self, key: &str, min: i64, max: i64) -> KarmaResult<Vec<(String, i64)>>;
    fn zrem_range_by_score(&self, key: &str, min: i64, max: i64) -> KarmaResult<usize>;
    /// Remove by ascending rank range.
    fn zrem_range_by_rank(&self, key: &str, start: i64, stop: i64) -> KarmaResult<usize>;

    // --- Sets ---
    fn sadd(&self, key: &str, member: &str) -> KarmaResult<bool>;
    fn srem(&self, key: &str, member: &str) -> KarmaResult<bool>;
    /// Members in lexical order.
    fn smembers(&self, key: &str) -> KarmaResult<Vec<String>>;
    fn sismember(&self, key: &str, member: &str) -> KarmaResult<bool>;

    // --- Keys ---
    /// Remove a key of any kind. Returns true if anything was removed.
    fn del(&self, key: &str) -> KarmaResult<bool>;
    fn exists(&self, key: &str) -> KarmaResult<bool>;
    /// Remaining lifetime of an expiring key; `None` if absent or expired.
    fn ttl(&self, key: &str) -> KarmaResult<Option<chrono::Duration>>;
    /// Create or refresh an expiring marker key.
    fn set_ex(&self, key: &str, ttl: chrono::Duration) -> KarmaResult<()>;
    /// Every live key matching a glob pattern (`*`, `?`, `[...]`), sorted.
    fn keys(&self, pattern: &str) -> KarmaResult<Vec<String>>;
}
