//! Reply text. Every user-visible string lives here.

use karma_core::Modifier;

pub const NO_TERMS: &str = "No terms have karma yet.";
pub const DELETE_FORBIDDEN: &str = "Only privileged users can delete terms.";
pub const MODIFIED_USAGE: &str = "Usage: karma modified <term>";
pub const DELETE_USAGE: &str = "Usage: karma delete <term>";

pub fn score(term: &str, total: i64) -> String {
    format!("{term}: {total}")
}

/// `foo: 2`, or with links `foo: 3 (2), linked to: bar: 1`.
pub fn check(term: &str, total: i64, own: i64, breakdown: &[(String, i64)]) -> String {
    if breakdown.is_empty() {
        return score(term, total);
    }
    let linked = breakdown
        .iter()
        .map(|(link, s)| score(link, *s))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{term}: {total} ({own}), linked to: {linked}")
}

/// Numbered leaderboard, one line per entry.
pub fn leaderboard(entries: &[(String, i64)]) -> String {
    if entries.is_empty() {
        return NO_TERMS.to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, (term, s))| format!("{}. {term} ({s})", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn modified(term: &str, modifiers: &[Modifier]) -> String {
    if modifiers.is_empty() {
        return format!("{term} has never been modified.");
    }
    let who = modifiers
        .iter()
        .map(|m| format!("{} ({})", m.name, m.count))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{term} has been modified by: {who}")
}

pub fn deleted(term: &str) -> String {
    format!("{term} has been deleted.")
}

pub fn missing(term: &str) -> String {
    format!("{term} does not exist.")
}

pub fn linked(term: &str, other: &str) -> String {
    format!("{term} is now linked to {other}.")
}

pub fn already_linked(term: &str, other: &str) -> String {
    format!("{term} is already linked to {other}.")
}

pub fn below_threshold(other: &str, threshold: i64) -> String {
    format!("{other} needs a score of at least {threshold} to be linked.")
}

pub fn self_link(term: &str) -> String {
    format!("{term} cannot be linked to itself.")
}

pub fn unlinked(term: &str, other: &str) -> String {
    format!("{term} is no longer linked to {other}.")
}

pub fn not_linked(term: &str, other: &str) -> String {
    format!("{term} is not linked to {other}.")
}

pub fn cooldown(term: &str, secs: u64) -> String {
    let unit = if secs == 1 { "second" } else { "seconds" };
    format!("You have to wait {secs} {unit} before modifying {term} again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_without_links_shows_only_total() {
        assert_eq!(check("foo", 2, 2, &[]), "foo: 2");
    }

    #[test]
    fn check_with_links_shows_breakdown() {
        let links = vec![("bar".to_string(), 1), ("baz".to_string(), -4)];
        assert_eq!(
            check("foo", -1, 2, &links),
            "foo: -1 (2), linked to: bar: 1, baz: -4"
        );
    }

    #[test]
    fn cooldown_pluralizes() {
        assert_eq!(
            cooldown("foo", 1),
            "You have to wait 1 second before modifying foo again."
        );
        assert_eq!(
            cooldown("foo", 30),
            "You have to wait 30 seconds before modifying foo again."
        );
    }

    #[test]
    fn empty_leaderboard() {
        assert_eq!(leaderboard(&[]), NO_TERMS);
    }
}
