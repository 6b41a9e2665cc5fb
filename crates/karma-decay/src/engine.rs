use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use karma_core::errors::KarmaResult;
use karma_core::{keys, Action, KarmaContext};

use crate::action_log::ActionLog;

/// Outcome of one decay pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecayReport {
    /// Actions reversed and removed.
    pub expired: usize,
    /// Undecodable tokens removed without reversal.
    pub dropped: usize,
    /// Terms whose score changed.
    pub terms: BTreeSet<String>,
}

impl DecayReport {
    pub fn is_empty(&self) -> bool {
        self.expired == 0 && self.dropped == 0
    }
}

/// Reverses actions that have aged out of the decay window.
///
/// Reversal mirrors recording exactly: the action's delta comes off the
/// term's own score and the acting user loses one modification. Counts never
/// go below zero; entries that reach zero are removed.
pub struct DecayEngine<'a> {
    ctx: &'a KarmaContext,
}

impl<'a> DecayEngine<'a> {
    pub fn new(ctx: &'a KarmaContext) -> Self {
        Self { ctx }
    }

    /// Actions at or before this instant are expired.
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.ctx.now() - self.ctx.config.decay.interval()
    }

    /// Reconcile every expired action. A no-op when decay is disabled.
    pub fn run(&self) -> KarmaResult<DecayReport> {
        let mut report = DecayReport::default();
        if !self.ctx.decay_enabled() {
            return Ok(report);
        }

        let log = ActionLog::new(self.ctx);
        let cutoff = self.cutoff();
        for token in log.expired_tokens(cutoff)? {
            match Action::from_token(&token) {
                Ok(action) => {
                    self.reverse(&action)?;
                    report.terms.insert(action.term);
                    report.expired += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "dropping undecodable action");
                    report.dropped += 1;
                }
            }
            log.remove_token(&token)?;
        }

        for term in &report.terms {
            self.ctx
                .store
                .zrem_range_by_score(&keys::modifiers(term), i64::MIN, 0)?;
        }

        if !report.is_empty() {
            tracing::info!(
                expired = report.expired,
                dropped = report.dropped,
                terms = report.terms.len(),
                cutoff = %cutoff,
                "decay pass reversed expired actions"
            );
        }
        Ok(report)
    }

    fn reverse(&self, action: &Action) -> KarmaResult<()> {
        let store = &self.ctx.store;
        let score = store.zincr_by(keys::SCORES, &action.term, -action.delta)?;
        tracing::debug!(term = %action.term, delta = action.delta, score, "reversed action");

        if let Some(user) = &action.user {
            let key = keys::modifiers(&action.term);
            match store.zscore(&key, user)? {
                Some(count) if count > 1 => {
                    store.zincr_by(&key, user, -1)?;
                }
                Some(_) => {
                    store.zrem(&key, user)?;
                }
                None => {}
            }
        }
        Ok(())
    }
}
