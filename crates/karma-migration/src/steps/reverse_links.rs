//! Reverse-link backfill: `karma:links:a ∋ b` implies `karma:linked_by:b ∋ a`.

use karma_core::errors::KarmaResult;
use karma_core::{keys, KarmaContext};

/// Returns the number of reverse entries added.
pub fn run(ctx: &KarmaContext) -> KarmaResult<usize> {
    let store = &ctx.store;
    let mut added = 0;
    for key in store.keys(&keys::pattern(keys::LINKS_PREFIX))? {
        let Some(source) = keys::term_of(&key, keys::LINKS_PREFIX) else {
            continue;
        };
        for target in store.smembers(&key)? {
            if store.sadd(&keys::linked_by(&target), source)? {
                added += 1;
            }
        }
    }
    Ok(added)
}
