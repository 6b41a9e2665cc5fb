//! The time-ordered `karma:actions` sorted set.

use chrono::{DateTime, Utc};

use karma_core::errors::KarmaResult;
use karma_core::{keys, Action, KarmaContext, SortOrder};

pub struct ActionLog<'a> {
    ctx: &'a KarmaContext,
}

impl<'a> ActionLog<'a> {
    pub fn new(ctx: &'a KarmaContext) -> Self {
        Self { ctx }
    }

    pub fn record(&self, action: &Action) -> KarmaResult<()> {
        let token = action.to_token()?;
        self.ctx.store.zadd(keys::ACTIONS, &token, action.score())?;
        Ok(())
    }

    pub fn len(&self) -> KarmaResult<usize> {
        self.ctx.store.zcard(keys::ACTIONS)
    }

    pub fn is_empty(&self) -> KarmaResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Raw tokens recorded at or before `cutoff`, oldest first.
    pub fn expired_tokens(&self, cutoff: DateTime<Utc>) -> KarmaResult<Vec<String>> {
        Ok(self
            .ctx
            .store
            .zrange_by_score(keys::ACTIONS, i64::MIN, cutoff.timestamp())?
            .into_iter()
            .map(|(token, _)| token)
            .collect())
    }

    pub fn remove_token(&self, token: &str) -> KarmaResult<bool> {
        self.ctx.store.zrem(keys::ACTIONS, token)
    }

    /// Every decodable action, oldest first. Malformed tokens are skipped.
    pub fn all(&self) -> KarmaResult<Vec<Action>> {
        Ok(self
            .ctx
            .store
            .zrange(keys::ACTIONS, 0, -1, SortOrder::Ascending)?
            .into_iter()
            .filter_map(|(token, _)| Action::from_token(&token).ok())
            .collect())
    }

    pub fn for_term(&self, term: &str) -> KarmaResult<Vec<Action>> {
        Ok(self.all()?.into_iter().filter(|a| a.term == term).collect())
    }

    /// Forget every pending action of `term`. Returns how many were removed.
    pub fn remove_term(&self, term: &str) -> KarmaResult<usize> {
        let mut removed = 0;
        for (token, _) in self
            .ctx
            .store
            .zrange(keys::ACTIONS, 0, -1, SortOrder::Ascending)?
        {
            let Ok(action) = Action::from_token(&token) else {
                continue;
            };
            if action.term == term && self.ctx.store.zrem(keys::ACTIONS, &token)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
