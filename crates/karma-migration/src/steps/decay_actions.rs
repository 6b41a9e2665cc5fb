//! Action backfill: scores accumulated before decay tracking have no
//! history, so one action per unit of score is synthesized. Known modifiers
//! are attributed first, most active first, up to their counts; whatever is
//! left is anonymous. This approximates history, it does not recover it.

use karma_core::errors::KarmaResult;
use karma_core::{keys, Action, KarmaContext, SortOrder};
use karma_decay::ActionLog;

/// Returns the number of actions synthesized.
pub fn run(ctx: &KarmaContext) -> KarmaResult<usize> {
    let store = &ctx.store;
    let log = ActionLog::new(ctx);
    let now = ctx.now();
    let mut synthesized = 0;

    for (term, score) in store.zrange(keys::SCORES, 0, -1, SortOrder::Ascending)? {
        if score == 0 {
            continue;
        }
        let total = score.unsigned_abs() as usize;
        let delta = score.signum();
        let users = attribute(
            store.zrange(&keys::modifiers(&term), 0, -1, SortOrder::Descending)?,
            total,
        );

        for (index, user) in users.iter().enumerate() {
            let at = now - ctx.decay_distributor.age_offset(index, total);
            log.record(&Action::new(&term, user.as_deref(), delta, at))?;
        }
        tracing::debug!(term = %term, score, actions = total, "backfilled decay history");
        synthesized += total;
    }
    Ok(synthesized)
}

/// Expand `(user, count)` pairs into exactly `total` slots, padding with
/// anonymous slots.
fn attribute(modifiers: Vec<(String, i64)>, total: usize) -> Vec<Option<String>> {
    let mut slots: Vec<Option<String>> = Vec::with_capacity(total);
    for (user, count) in modifiers {
        let room = total - slots.len();
        let take = (count.max(0) as usize).min(room);
        slots.extend(std::iter::repeat(Some(user)).take(take));
    }
    slots.resize(total, None);
    slots
}

#[cfg(test)]
mod tests {
    use super::attribute;

    fn pairs(items: &[(&str, i64)]) -> Vec<(String, i64)> {
        items.iter().map(|(u, c)| (u.to_string(), *c)).collect()
    }

    #[test]
    fn known_users_first_then_anonymous() {
        let slots = attribute(pairs(&[("alice", 2), ("bob", 1)]), 5);
        assert_eq!(
            slots,
            vec![
                Some("alice".to_string()),
                Some("alice".to_string()),
                Some("bob".to_string()),
                None,
                None
            ]
        );
    }

    #[test]
    fn attribution_is_capped_at_total() {
        let slots = attribute(pairs(&[("alice", 5), ("bob", 5)]), 3);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| s.as_deref() == Some("alice")));
    }
}
