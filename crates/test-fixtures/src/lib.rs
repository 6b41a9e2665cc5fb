//! Test helpers shared across the workspace.
//!
//! Every harness runs against an in-memory SQLite store whose expiry clock
//! is the same [`ManualClock`] the context uses, so tests move time forward
//! explicitly instead of sleeping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use karma_core::traits::{Clock, IUserDirectory};
use karma_core::{KarmaConfig, KarmaContext};
use karma_storage::SqliteScoreStore;

/// Fixed starting instant for deterministic tests: 2024-01-01T00:00:00Z.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixed date")
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().expect("clock lock poisoned") += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().expect("clock lock poisoned") = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// User directory backed by a fixed map.
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    names: HashMap<String, String>,
}

impl StaticDirectory {
    pub fn with(mut self, id: &str, name: &str) -> Self {
        self.names.insert(id.to_string(), name.to_string());
        self
    }
}

impl IUserDirectory for StaticDirectory {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.names.get(user_id).cloned()
    }
}

/// A context wired to an in-memory store and a manual clock.
pub struct Harness {
    pub ctx: KarmaContext,
    pub clock: Arc<ManualClock>,
    pub store: Arc<SqliteScoreStore>,
}

impl Harness {
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }
}

/// Build a harness for `config`, starting at [`base_time`].
pub fn harness(config: KarmaConfig) -> Harness {
    let clock = Arc::new(ManualClock::new(base_time()));
    let store = Arc::new(
        SqliteScoreStore::open_in_memory()
            .expect("in-memory store opens")
            .with_clock(clock.clone()),
    );
    let ctx = KarmaContext::new(config, store.clone()).with_clock(clock.clone());
    Harness { ctx, clock, store }
}

/// Harness with default configuration (no cooldown, no decay).
pub fn default_harness() -> Harness {
    harness(KarmaConfig::default())
}

/// Configuration with decay enabled over `interval_secs`.
pub fn decay_config(interval_secs: u64) -> KarmaConfig {
    let mut config = KarmaConfig::default();
    config.decay.enabled = true;
    config.decay.interval_secs = interval_secs;
    config
}

/// Configuration with a cooldown of `seconds`.
pub fn cooldown_config(seconds: u64) -> KarmaConfig {
    let mut config = KarmaConfig::default();
    config.cooldown.seconds = Some(seconds);
    config
}
