//! Modifier weighting: legacy sets only said *who* touched a term, not how
//! often. Counts are approximated from the term's score by the configured
//! [`ModifierDistributor`](karma_core::traits::ModifierDistributor).

use karma_core::errors::KarmaResult;
use karma_core::{keys, KarmaContext};

/// Returns the number of terms converted.
pub fn run(ctx: &KarmaContext) -> KarmaResult<usize> {
    let store = &ctx.store;
    let mut converted = 0;
    for key in store.keys(&keys::pattern(keys::LEGACY_USERS_PREFIX))? {
        let Some(term) = keys::term_of(&key, keys::LEGACY_USERS_PREFIX) else {
            continue;
        };
        let users = store.smembers(&key)?;
        if !users.is_empty() {
            let score = store.zscore(keys::SCORES, term)?.unwrap_or(0);
            let weights = ctx.modifier_distributor.distribute(score, &users);
            let target = keys::modifiers(term);
            for (user, weight) in users.iter().zip(weights) {
                // Counts already present came from real modifications; keep them.
                if weight > 0 && store.zscore(&target, user)?.is_none() {
                    store.zadd(&target, user, weight)?;
                }
            }
            tracing::debug!(term, users = users.len(), score, "weighted legacy modifiers");
            converted += 1;
        }
        store.del(&key)?;
    }
    Ok(converted)
}
