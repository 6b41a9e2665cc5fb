/// Karma engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of entries shown by `karma`, `karma best` and `karma worst` without an explicit count.
pub const DEFAULT_LIST_SIZE: usize = 5;

/// Upper bound on the number of entries a leaderboard request may ask for.
pub const MAX_LIST_SIZE: usize = 25;

/// Delta applied by `TERM++`.
pub const INCREMENT: i64 = 1;

/// Delta applied by `TERM--`.
pub const DECREMENT: i64 = -1;
