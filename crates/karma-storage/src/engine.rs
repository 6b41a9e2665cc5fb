//! `SqliteScoreStore`: owns the connection, runs schema migrations at open,
//! and implements IScoreStore.

use std::path::Path;
use std::sync::Arc;

use karma_core::config::StorageConfig;
use karma_core::errors::KarmaResult;
use karma_core::traits::{Clock, IScoreStore, SystemClock};
use karma_core::SortOrder;

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{expiring_ops, key_ops, set_ops, sorted_set_ops};

/// Sorted-set store persisted in SQLite.
pub struct SqliteScoreStore {
    writer: WriteConnection,
    /// Decides expiry of marker keys.
    clock: Arc<dyn Clock>,
}

impl SqliteScoreStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path, config: &StorageConfig) -> KarmaResult<Self> {
        let store = Self {
            writer: WriteConnection::open(path, config)?,
            clock: Arc::new(SystemClock),
        };
        store.initialize()?;
        tracing::debug!(path = %path.display(), "opened score store");
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> KarmaResult<Self> {
        let store = Self {
            writer: WriteConnection::open_in_memory()?,
            clock: Arc::new(SystemClock),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Replace the clock used for key expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Get a reference to the connection (for advanced operations and tests).
    pub fn writer(&self) -> &WriteConnection {
        &self.writer
    }

    /// Remove every expired marker key.
    pub fn purge_expired(&self) -> KarmaResult<usize> {
        let now = self.now_ms();
        self.writer
            .with_conn(|conn| expiring_ops::purge_expired(conn, now))
    }

    fn initialize(&self) -> KarmaResult<()> {
        self.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    fn now_ms(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }
}

impl IScoreStore for SqliteScoreStore {
    fn zincr_by(&self, key: &str, member: &str, delta: i64) -> KarmaResult<i64> {
        self.writer
            .with_conn(|conn| sorted_set_ops::incr_by(conn, key, member, delta))
    }

    fn zscore(&self, key: &str, member: &str) -> KarmaResult<Option<i64>> {
        self.writer
            .with_conn(|conn| sorted_set_ops::score(conn, key, member))
    }

    fn zadd(&self, key: &str, member: &str, score: i64) -> KarmaResult<bool> {
        self.writer
            .with_conn(|conn| sorted_set_ops::add(conn, key, member, score))
    }

    fn zrem(&self, key: &str, member: &str) -> KarmaResult<bool> {
        self.writer
            .with_conn(|conn| sorted_set_ops::remove(conn, key, member))
    }

    fn zcard(&self, key: &str) -> KarmaResult<usize> {
        self.writer.with_conn(|conn| sorted_set_ops::card(conn, key))
    }

    fn zrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
        order: SortOrder,
    ) -> KarmaResult<Vec<(String, i64)>> {
        self.writer
            .with_conn(|conn| sorted_set_ops::range(conn, key, start, stop, order))
    }

    fn zrange_by_score(&self, key: &str, min: i64, max: i64) -> KarmaResult<Vec<(String, i64)>> {
        self.writer
            .with_conn(|conn| sorted_set_ops::range_by_score(conn, key, min, max))
    }

    fn zrem_range_by_score(&self, key: &str, min: i64, max: i64) -> KarmaResult<usize> {
        self.writer
            .with_conn(|conn| sorted_set_ops::remove_range_by_score(conn, key, min, max))
    }

    fn zrem_range_by_rank(&self, key: &str, start: i64, stop: i64) -> KarmaResult<usize> {
        self.writer
            .with_conn(|conn| sorted_set_ops::remove_range_by_rank(conn, key, start, stop))
    }

    fn sadd(&self, key: &str, member: &str) -> KarmaResult<bool> {
        self.writer.with_conn(|conn| set_ops::add(conn, key, member))
    }

    fn srem(&self, key: &str, member: &str) -> KarmaResult<bool> {
        self.writer.with_conn(|conn| set_ops::remove(conn, key, member))
    }

    fn smembers(&self, key: &str) -> KarmaResult<Vec<String>> {
        self.writer.with_conn(|conn| set_ops::members(conn, key))
    }

    fn sismember(&self, key: &str, member: &str) -> KarmaResult<bool> {
        self.writer
            .with_conn(|conn| set_ops::is_member(conn, key, member))
    }

    fn del(&self, key: &str) -> KarmaResult<bool> {
        self.writer.with_conn(|conn| key_ops::delete(conn, key))
    }

    fn exists(&self, key: &str) -> KarmaResult<bool> {
        let now = self.now_ms();
        self.writer.with_conn(|conn| key_ops::exists(conn, key, now))
    }

    fn ttl(&self, key: &str) -> KarmaResult<Option<chrono::Duration>> {
        let now = self.now_ms();
        let remaining = self
            .writer
            .with_conn(|conn| expiring_ops::remaining_ms(conn, key, now))?;
        Ok(remaining.map(chrono::Duration::milliseconds))
    }

    fn set_ex(&self, key: &str, ttl: chrono::Duration) -> KarmaResult<()> {
        let expires_at = self.now_ms().saturating_add(ttl.num_milliseconds());
        self.writer
            .with_conn(|conn| expiring_ops::set(conn, key, expires_at))
    }

    fn keys(&self, pattern: &str) -> KarmaResult<Vec<String>> {
        let now = self.now_ms();
        self.writer
            .with_conn(|conn| key_ops::matching(conn, pattern, now))
    }
}
