//! Storage key layout.
//!
//! | Key                            | Kind        | Contents                         |
//! |--------------------------------|-------------|----------------------------------|
//! | `karma:scores`                 | sorted set  | term -> own score                |
//! | `karma:links:<term>`           | set         | terms linked into `<term>`       |
//! | `karma:linked_by:<term>`       | set         | terms that link to `<term>`      |
//! | `karma:modifiers:<term>`       | sorted set  | user id -> modification count    |
//! | `karma:users:<term>`           | set         | legacy, unweighted modifiers     |
//! | `karma:actions`                | sorted set  | action token -> unix seconds     |
//! | `karma:cooldown:<user>:<term>` | expiring    | cooldown marker                  |
//! | `karma:migrations`             | set         | completed data migration steps   |

pub const SCORES: &str = "karma:scores";
pub const ACTIONS: &str = "karma:actions";
pub const MIGRATIONS: &str = "karma:migrations";

pub const LINKS_PREFIX: &str = "karma:links:";
pub const LINKED_BY_PREFIX: &str = "karma:linked_by:";
pub const MODIFIERS_PREFIX: &str = "karma:modifiers:";
pub const LEGACY_USERS_PREFIX: &str = "karma:users:";
pub const COOLDOWN_PREFIX: &str = "karma:cooldown:";

/// Outgoing links of `term`.
pub fn links(term: &str) -> String {
    format!("{LINKS_PREFIX}{term}")
}

/// Reverse index: every term whose link set contains `term`.
pub fn linked_by(term: &str) -> String {
    format!("{LINKED_BY_PREFIX}{term}")
}

/// Weighted modifier counts of `term`.
pub fn modifiers(term: &str) -> String {
    format!("{MODIFIERS_PREFIX}{term}")
}

/// Pre-weighting modifier membership set of `term`.
pub fn legacy_users(term: &str) -> String {
    format!("{LEGACY_USERS_PREFIX}{term}")
}

/// Cooldown marker for `user` on `term`.
///
/// `%` and `:` in the user id are percent-escaped, so the first `:` after the
/// prefix always ends the user part (Matrix-style ids contain colons).
pub fn cooldown(user: &str, term: &str) -> String {
    let user = user.replace('%', "%25").replace(':', "%3A");
    format!("{COOLDOWN_PREFIX}{user}:{term}")
}

/// Glob pattern matching every key that starts with `prefix`.
pub fn pattern(prefix: &str) -> String {
    format!("{prefix}*")
}

/// Recover the term from a per-term key such as `karma:links:foo`.
pub fn term_of<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix).filter(|t| !t.is_empty())
}
