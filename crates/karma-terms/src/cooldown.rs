use karma_core::errors::KarmaResult;
use karma_core::{keys, CooldownStatus, KarmaContext};

/// Per-user, per-term rate limiter backed by expiring keys.
///
/// Check-then-set is two store calls; two requests from the same user in the
/// same instant can both pass.
pub struct CooldownGate<'a> {
    ctx: &'a KarmaContext,
}

impl<'a> CooldownGate<'a> {
    pub fn new(ctx: &'a KarmaContext) -> Self {
        Self { ctx }
    }

    pub fn enabled(&self) -> bool {
        self.ctx.config.cooldown.duration().is_some()
    }

    /// Report the remaining wait if `user` is cooling down on `term`;
    /// otherwise start a new cooldown (when enabled) and let them through.
    pub fn check_and_set(&self, user: &str, term: &str) -> KarmaResult<CooldownStatus> {
        let Some(duration) = self.ctx.config.cooldown.duration() else {
            return Ok(CooldownStatus::Ready);
        };

        let key = keys::cooldown(user, term);
        if let Some(remaining) = self.ctx.store.ttl(&key)? {
            let secs = ceil_seconds(remaining);
            tracing::debug!(user, term, remaining_secs = secs, "modification on cooldown");
            return Ok(CooldownStatus::OnCooldown(secs));
        }

        self.ctx.store.set_ex(&key, duration)?;
        Ok(CooldownStatus::Ready)
    }
}

/// Whole seconds, rounded up, never below one for a live key.
fn ceil_seconds(remaining: chrono::Duration) -> u64 {
    let ms = remaining.num_milliseconds().max(1);
    ((ms + 999) / 1000) as u64
}

#[cfg(test)]
mod tests {
    use super::ceil_seconds;
    use chrono::Duration;

    #[test]
    fn partial_seconds_round_up() {
        assert_eq!(ceil_seconds(Duration::milliseconds(1)), 1);
        assert_eq!(ceil_seconds(Duration::milliseconds(1000)), 1);
        assert_eq!(ceil_seconds(Duration::milliseconds(1001)), 2);
        assert_eq!(ceil_seconds(Duration::seconds(300)), 300);
    }
}
