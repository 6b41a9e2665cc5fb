use karma_core::errors::KarmaResult;
use karma_core::{keys, CooldownStatus, KarmaContext, LinkOutcome, SortOrder};
use karma_decay::DecayEngine;
use karma_migration::MigrationRunner;
use karma_terms::{CooldownGate, Term};

use crate::command::Command;
use crate::parser::CommandParser;
use crate::replies;

/// Who sent the message being handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub user: String,
    /// May delete terms.
    pub privileged: bool,
}

impl Invocation {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            privileged: false,
        }
    }

    pub fn privileged(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            privileged: true,
        }
    }
}

/// Runs commands against one [`KarmaContext`].
pub struct Dispatcher<'a> {
    ctx: &'a KarmaContext,
    parser: CommandParser,
}

impl<'a> Dispatcher<'a> {
    /// Compile the matcher table and bring stored data up to date.
    pub fn new(ctx: &'a KarmaContext) -> KarmaResult<Self> {
        let parser = CommandParser::new(&ctx.config.terms)?;
        MigrationRunner::new(ctx).run_all()?;
        Ok(Self { ctx, parser })
    }

    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// Parse and run one chat message. Messages that are not commands get
    /// no replies.
    pub fn handle(&self, message: &str, invocation: &Invocation) -> KarmaResult<Vec<String>> {
        match self.parser.parse(message) {
            Some(command) => self.dispatch(&command, invocation),
            None => Ok(Vec::new()),
        }
    }

    pub fn dispatch(&self, command: &Command, invocation: &Invocation) -> KarmaResult<Vec<String>> {
        tracing::debug!(?command, user = %invocation.user, "dispatching command");
        let reply = match command {
            Command::Modify(changes) => return self.modify(changes, &invocation.user),
            Command::Check(term) => self.check(term)?,
            Command::List { order, limit } => self.list(*order, *limit)?,
            Command::Modified(term) => self.modified(term.as_deref())?,
            Command::Delete(term) => self.delete(term.as_deref(), invocation)?,
            Command::Link { term, other } => self.link(term, other)?,
            Command::Unlink { term, other } => self.unlink(term, other)?,
        };
        Ok(vec![reply])
    }

    fn decay(&self) -> KarmaResult<()> {
        DecayEngine::new(self.ctx).run()?;
        Ok(())
    }

    /// Each change is gated, applied and answered on its own, in order.
    fn modify(&self, changes: &[(String, i64)], user: &str) -> KarmaResult<Vec<String>> {
        let gate = CooldownGate::new(self.ctx);
        let mut replies = Vec::with_capacity(changes.len());
        for (raw, delta) in changes {
            let term = Term::new(self.ctx, raw);
            match gate.check_and_set(user, term.name())? {
                CooldownStatus::OnCooldown(secs) => {
                    replies.push(replies::cooldown(term.name(), secs));
                }
                CooldownStatus::Ready => {
                    self.decay()?;
                    term.modify(Some(user), *delta)?;
                    replies.push(self.render(&term)?);
                }
            }
        }
        Ok(replies)
    }

    fn check(&self, raw: &str) -> KarmaResult<String> {
        self.decay()?;
        self.render(&Term::new(self.ctx, raw))
    }

    /// Total score with its own/linked breakdown, as shown after `~~`, `++` and `--`.
    fn render(&self, term: &Term<'_>) -> KarmaResult<String> {
        let own = term.own_score()?;
        let breakdown = term.breakdown()?;
        let total = own + breakdown.iter().map(|(_, s)| s).sum::<i64>();
        Ok(replies::check(term.name(), total, own, &breakdown))
    }

    /// Terms whose own score decayed to zero are left out.
    fn list(&self, order: SortOrder, limit: usize) -> KarmaResult<String> {
        self.decay()?;
        let entries: Vec<(String, i64)> = self
            .ctx
            .store
            .zrange(keys::SCORES, 0, -1, order)?
            .into_iter()
            .filter(|(_, score)| *score != 0)
            .take(limit)
            .collect();
        Ok(replies::leaderboard(&entries))
    }

    fn modified(&self, raw: Option<&str>) -> KarmaResult<String> {
        let Some(raw) = raw else {
            return Ok(replies::MODIFIED_USAGE.to_string());
        };
        self.decay()?;
        let term = Term::new(self.ctx, raw);
        Ok(replies::modified(term.name(), &term.modified()?))
    }

    fn delete(&self, raw: Option<&str>, invocation: &Invocation) -> KarmaResult<String> {
        if !invocation.privileged {
            tracing::info!(user = %invocation.user, "unprivileged delete refused");
            return Ok(replies::DELETE_FORBIDDEN.to_string());
        }
        let Some(raw) = raw else {
            return Ok(replies::DELETE_USAGE.to_string());
        };
        // A term whose every action has expired no longer exists.
        self.decay()?;
        let term = Term::new(self.ctx, raw);
        if term.delete()? {
            Ok(replies::deleted(term.name()))
        } else {
            Ok(replies::missing(term.name()))
        }
    }

    /// The threshold is checked against the decayed score.
    fn link(&self, raw: &str, raw_other: &str) -> KarmaResult<String> {
        self.decay()?;
        let term = Term::new(self.ctx, raw);
        let other = Term::new(self.ctx, raw_other);
        Ok(match term.link(&other)? {
            LinkOutcome::Linked => replies::linked(term.name(), other.name()),
            LinkOutcome::AlreadyLinked => replies::already_linked(term.name(), other.name()),
            LinkOutcome::BelowThreshold(threshold) => {
                replies::below_threshold(other.name(), threshold)
            }
            LinkOutcome::SelfLink => replies::self_link(term.name()),
        })
    }

    fn unlink(&self, raw: &str, raw_other: &str) -> KarmaResult<String> {
        self.decay()?;
        let term = Term::new(self.ctx, raw);
        let other = Term::new(self.ctx, raw_other);
        Ok(if term.unlink(&other)? {
            replies::unlinked(term.name(), other.name())
        } else {
            replies::not_linked(term.name(), other.name())
        })
    }
}
