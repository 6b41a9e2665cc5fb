// Single source of truth for all default values.

// --- Cooldown ---
/// Cooldown is off unless configured.
pub const DEFAULT_COOLDOWN_SECS: Option<u64> = None;

// --- Decay ---
pub const DEFAULT_DECAY_ENABLED: bool = false;
pub const DEFAULT_DECAY_INTERVAL_SECS: u64 = 30 * 24 * 3600; // 30 days

// --- Links ---
pub const DEFAULT_LINK_THRESHOLD: Option<i64> = None;

// --- Terms ---
pub const DEFAULT_TERM_PATTERN: &str = r"\S{2,}";

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "karma.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
