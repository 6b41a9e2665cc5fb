//! Pluggable strategies with their default implementations.

/// Maps raw chat text to a term identity.
pub trait TermNormalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}

/// Default normalizer: trim surrounding whitespace and lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseTrim;

impl TermNormalizer for LowercaseTrim {
    fn normalize(&self, raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

/// Splits a term's score across its legacy (unweighted) modifiers.
///
/// Returns one allocation per user, in the order given.
pub trait ModifierDistributor: Send + Sync {
    fn distribute(&self, score: i64, users: &[String]) -> Vec<i64>;
}

/// Default distributor: `|score|` split evenly, the remainder handed out one
/// by one from the front, and every listed user credited at least once.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvenSplit;

impl ModifierDistributor for EvenSplit {
    fn distribute(&self, score: i64, users: &[String]) -> Vec<i64> {
        if users.is_empty() {
            return Vec::new();
        }
        let n = users.len() as i64;
        let total = score.abs();
        let base = total / n;
        let remainder = total % n;
        (0..n)
            .map(|i| (base + i64::from(i < remainder)).max(1))
            .collect()
    }
}

/// Places synthesized actions in time when backfilling decay history.
///
/// `index` runs over `0..total`; the returned offset is subtracted from now.
pub trait DecayDistributor: Send + Sync {
    fn age_offset(&self, index: usize, total: usize) -> chrono::Duration;
}

/// Default placement: offsets spread evenly over `[0, interval)`, so the
/// backfilled score fades out gradually over one decay interval.
#[derive(Debug, Clone, Copy)]
pub struct LinearSpread {
    pub interval: chrono::Duration,
}

impl LinearSpread {
    pub fn new(interval: chrono::Duration) -> Self {
        Self { interval }
    }
}

impl DecayDistributor for LinearSpread {
    fn age_offset(&self, index: usize, total: usize) -> chrono::Duration {
        if total == 0 {
            return chrono::Duration::zero();
        }
        let secs = self.interval.num_seconds() as i128 * index as i128 / total as i128;
        chrono::Duration::seconds(secs as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalizer_trims_and_lowercases() {
        assert_eq!(LowercaseTrim.normalize("  FooBar "), "foobar");
    }

    #[test]
    fn even_split_hands_remainder_to_front() {
        assert_eq!(EvenSplit.distribute(7, &users(&["a", "b", "c"])), vec![3, 2, 2]);
    }

    #[test]
    fn even_split_uses_magnitude_of_negative_scores() {
        assert_eq!(EvenSplit.distribute(-4, &users(&["a", "b"])), vec![2, 2]);
    }

    #[test]
    fn even_split_credits_every_user_at_least_once() {
        assert_eq!(EvenSplit.distribute(1, &users(&["a", "b", "c"])), vec![1, 1, 1]);
        assert_eq!(EvenSplit.distribute(0, &users(&["a"])), vec![1]);
    }

    #[test]
    fn linear_spread_stays_inside_interval() {
        let spread = LinearSpread::new(chrono::Duration::seconds(100));
        assert_eq!(spread.age_offset(0, 4), chrono::Duration::zero());
        assert_eq!(spread.age_offset(2, 4), chrono::Duration::seconds(50));
        assert!(spread.age_offset(3, 4) < chrono::Duration::seconds(100));
    }
}
