//! A tracked term: own score, outgoing links, modifier attribution.
//!
//! A term exists implicitly as soon as anything is stored under its key;
//! absence reads as a zero score with no links and no modifiers.

use std::fmt;
use std::hash::{Hash, Hasher};

use karma_core::errors::KarmaResult;
use karma_core::{keys, Action, KarmaContext, LinkOutcome, Modifier, SortOrder};
use karma_decay::ActionLog;

pub struct Term<'a> {
    ctx: &'a KarmaContext,
    name: String,
}

impl<'a> Term<'a> {
    /// View of the term `raw` normalizes to.
    pub fn new(ctx: &'a KarmaContext, raw: &str) -> Self {
        Self {
            ctx,
            name: ctx.normalize(raw),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn own_score(&self) -> KarmaResult<i64> {
        Ok(self.ctx.store.zscore(keys::SCORES, &self.name)?.unwrap_or(0))
    }

    /// Outgoing links, sorted.
    pub fn links(&self) -> KarmaResult<Vec<String>> {
        self.ctx.store.smembers(&keys::links(&self.name))
    }

    /// Terms that link to this one, sorted.
    pub fn linked_by(&self) -> KarmaResult<Vec<String>> {
        self.ctx.store.smembers(&keys::linked_by(&self.name))
    }

    /// Each outgoing link with its current own score.
    pub fn breakdown(&self) -> KarmaResult<Vec<(String, i64)>> {
        self.links()?
            .into_iter()
            .map(|link| {
                let score = self.ctx.store.zscore(keys::SCORES, &link)?.unwrap_or(0);
                Ok((link, score))
            })
            .collect()
    }

    /// Own score plus the own score of every linked term, one level deep.
    pub fn total_score(&self) -> KarmaResult<i64> {
        let linked: i64 = self.breakdown()?.iter().map(|(_, s)| s).sum();
        Ok(self.own_score()? + linked)
    }

    /// Link `other` into this term. The reverse index is written alongside
    /// the forward link.
    pub fn link(&self, other: &Term<'_>) -> KarmaResult<LinkOutcome> {
        if self.name == other.name {
            return Ok(LinkOutcome::SelfLink);
        }
        let store = &self.ctx.store;
        if store.sismember(&keys::links(&self.name), &other.name)? {
            return Ok(LinkOutcome::AlreadyLinked);
        }
        if let Some(threshold) = self.ctx.config.links.threshold {
            if other.own_score()? < threshold {
                return Ok(LinkOutcome::BelowThreshold(threshold));
            }
        }

        store.sadd(&keys::links(&self.name), &other.name)?;
        store.sadd(&keys::linked_by(&other.name), &self.name)?;
        tracing::debug!(term = %self.name, linked = %other.name, "linked terms");
        Ok(LinkOutcome::Linked)
    }

    /// Remove a link. Returns whether it existed.
    pub fn unlink(&self, other: &Term<'_>) -> KarmaResult<bool> {
        let store = &self.ctx.store;
        let existed = store.srem(&keys::links(&self.name), &other.name)?;
        store.srem(&keys::linked_by(&other.name), &self.name)?;
        if existed {
            tracing::debug!(term = %self.name, unlinked = %other.name, "unlinked terms");
        }
        Ok(existed)
    }

    /// Apply `delta` on behalf of `user` and return the new total score.
    ///
    /// Records an [`Action`] when decay is enabled so the change can be
    /// reversed later.
    pub fn modify(&self, user: Option<&str>, delta: i64) -> KarmaResult<i64> {
        let store = &self.ctx.store;
        let own = store.zincr_by(keys::SCORES, &self.name, delta)?;
        if let Some(user) = user {
            store.zincr_by(&keys::modifiers(&self.name), user, 1)?;
        }
        if self.ctx.decay_enabled() {
            let action = Action::new(&self.name, user, delta, self.ctx.now());
            ActionLog::new(self.ctx).record(&action)?;
        }
        tracing::debug!(term = %self.name, delta, own, "modified term");
        self.total_score()
    }

    /// Who changed this term and how often, most active first.
    pub fn modified(&self) -> KarmaResult<Vec<Modifier>> {
        let entries = self.ctx.store.zrange(
            &keys::modifiers(&self.name),
            0,
            -1,
            SortOrder::Descending,
        )?;
        Ok(entries
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(user_id, count)| Modifier {
                name: self
                    .ctx
                    .users
                    .display_name(&user_id)
                    .unwrap_or_else(|| user_id.clone()),
                user_id,
                count,
            })
            .collect())
    }

    /// A term with a zero score and no modification history has nothing to delete.
    pub fn exists(&self) -> KarmaResult<bool> {
        Ok(self.own_score()? != 0 || self.ctx.store.zcard(&keys::modifiers(&self.name))? > 0)
    }

    /// Remove the term everywhere: score, attribution, pending actions,
    /// outgoing links, and every incoming link. Returns false when there was
    /// nothing to delete.
    pub fn delete(&self) -> KarmaResult<bool> {
        if !self.exists()? {
            return Ok(false);
        }
        let store = &self.ctx.store;

        store.zrem(keys::SCORES, &self.name)?;
        store.del(&keys::modifiers(&self.name))?;
        store.del(&keys::legacy_users(&self.name))?;

        for target in self.links()? {
            store.srem(&keys::linked_by(&target), &self.name)?;
        }
        store.del(&keys::links(&self.name))?;

        let sources = self.linked_by()?;
        for source in &sources {
            store.srem(&keys::links(source), &self.name)?;
        }
        store.del(&keys::linked_by(&self.name))?;

        let actions = ActionLog::new(self.ctx).remove_term(&self.name)?;
        tracing::info!(
            term = %self.name,
            incoming_links = sources.len(),
            actions,
            "deleted term"
        );
        Ok(true)
    }
}

impl PartialEq for Term<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Term<'_> {}

impl Hash for Term<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Term").field(&self.name).finish()
    }
}
