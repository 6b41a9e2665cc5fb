use karma_core::errors::KarmaResult;
use karma_core::{keys, KarmaContext};

use crate::steps::{self, MigrationStep};

/// What one [`MigrationRunner::run_all`] pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Steps that ran and were marked complete during this pass.
    pub applied: Vec<MigrationStep>,
    /// Steps already marked complete before this pass.
    pub already_done: Vec<MigrationStep>,
    /// Steps that were not eligible to run yet and remain unmarked.
    pub deferred: Vec<MigrationStep>,
    pub reverse_links_added: usize,
    pub terms_weighted: usize,
    pub actions_synthesized: usize,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Runs the upgrade steps in order, each at most once per store.
pub struct MigrationRunner<'a> {
    ctx: &'a KarmaContext,
}

impl<'a> MigrationRunner<'a> {
    pub fn new(ctx: &'a KarmaContext) -> Self {
        Self { ctx }
    }

    pub fn is_done(&self, step: MigrationStep) -> KarmaResult<bool> {
        self.ctx.store.sismember(keys::MIGRATIONS, step.marker())
    }

    fn mark_done(&self, step: MigrationStep) -> KarmaResult<()> {
        self.ctx.store.sadd(keys::MIGRATIONS, step.marker())?;
        Ok(())
    }

    /// Run every pending step. Safe to call on every startup.
    pub fn run_all(&self) -> KarmaResult<MigrationReport> {
        let mut report = MigrationReport::default();
        for step in MigrationStep::ALL {
            if self.is_done(step)? {
                report.already_done.push(step);
                continue;
            }
            match self.run_step(step)? {
                Some(count) => {
                    match step {
                        MigrationStep::ReverseLinks => report.reverse_links_added = count,
                        MigrationStep::WeightedModifiers => report.terms_weighted = count,
                        MigrationStep::DecayActions => report.actions_synthesized = count,
                    }
                    report.applied.push(step);
                }
                None => report.deferred.push(step),
            }
        }
        if !report.is_noop() {
            tracing::info!(
                applied = ?report.applied,
                reverse_links = report.reverse_links_added,
                terms_weighted = report.terms_weighted,
                actions = report.actions_synthesized,
                "data migrations applied"
            );
        }
        Ok(report)
    }

    /// Run a single step, ignoring its marker. Returns `None` when the step
    /// is not eligible yet and was left unmarked.
    pub fn run_step(&self, step: MigrationStep) -> KarmaResult<Option<usize>> {
        let count = match step {
            MigrationStep::ReverseLinks => steps::reverse_links::run(self.ctx)?,
            MigrationStep::WeightedModifiers => steps::weighted_modifiers::run(self.ctx)?,
            MigrationStep::DecayActions => {
                // Without decay there is nothing to replay; try again once
                // it is switched on.
                if !self.ctx.decay_enabled() {
                    tracing::debug!("decay disabled, deferring action backfill");
                    return Ok(None);
                }
                // Existing history means actions are already being tracked.
                if karma_decay::ActionLog::new(self.ctx).is_empty()? {
                    steps::decay_actions::run(self.ctx)?
                } else {
                    0
                }
            }
        };
        self.mark_done(step)?;
        tracing::debug!(step = %step, count, "migration step complete");
        Ok(Some(count))
    }
}
