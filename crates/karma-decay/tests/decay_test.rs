use chrono::Duration;
use karma_core::{keys, Action, KarmaContext};
use karma_decay::{ActionLog, DecayEngine};
use test_fixtures::{decay_config, default_harness, harness};

const HOUR: u64 = 3600;

/// Apply a score change the way a modification does: score, modifier, action.
fn apply(ctx: &KarmaContext, term: &str, user: Option<&str>, delta: i64) {
    ctx.store.zincr_by(keys::SCORES, term, delta).unwrap();
    if let Some(user) = user {
        ctx.store.zincr_by(&keys::modifiers(term), user, 1).unwrap();
    }
    ActionLog::new(ctx)
        .record(&Action::new(term, user, delta, ctx.now()))
        .unwrap();
}

fn score(ctx: &KarmaContext, term: &str) -> i64 {
    ctx.store.zscore(keys::SCORES, term).unwrap().unwrap_or(0)
}

#[test]
fn removes_exactly_the_expired_actions() {
    let h = harness(decay_config(10 * HOUR));
    apply(&h.ctx, "foo", Some("alice"), 1); // t = 0
    h.advance(Duration::hours(4));
    apply(&h.ctx, "foo", Some("bob"), 1); // t = 4h
    h.advance(Duration::hours(4));
    apply(&h.ctx, "foo", Some("alice"), -1); // t = 8h
    assert_eq!(score(&h.ctx, "foo"), 1);

    h.advance(Duration::hours(3)); // t = 11h: only the first action is older than 10h
    let report = DecayEngine::new(&h.ctx).run().unwrap();
    assert_eq!(report.expired, 1);
    assert!(report.terms.contains("foo"));
    assert_eq!(score(&h.ctx, "foo"), 0);
    assert_eq!(ActionLog::new(&h.ctx).len().unwrap(), 2);
    assert_eq!(
        h.ctx.store.zscore(&keys::modifiers("foo"), "alice").unwrap(),
        Some(1)
    );
}

#[test]
fn action_exactly_at_cutoff_expires() {
    let h = harness(decay_config(HOUR));
    apply(&h.ctx, "foo", None, 1);
    h.advance(Duration::hours(1));
    let report = DecayEngine::new(&h.ctx).run().unwrap();
    assert_eq!(report.expired, 1);
    assert_eq!(score(&h.ctx, "foo"), 0);
}

#[test]
fn second_run_is_a_noop() {
    let h = harness(decay_config(HOUR));
    apply(&h.ctx, "foo", Some("alice"), 1);
    apply(&h.ctx, "bar", Some("alice"), -1);
    h.advance(Duration::hours(2));

    let engine = DecayEngine::new(&h.ctx);
    let first = engine.run().unwrap();
    assert_eq!(first.expired, 2);
    let second = engine.run().unwrap();
    assert!(second.is_empty());
    assert_eq!(score(&h.ctx, "foo"), 0);
    assert_eq!(score(&h.ctx, "bar"), 0);
}

#[test]
fn modifier_counts_reach_zero_and_disappear() {
    let h = harness(decay_config(HOUR));
    apply(&h.ctx, "foo", Some("alice"), 1);
    apply(&h.ctx, "foo", Some("alice"), 1);
    apply(&h.ctx, "foo", Some("bob"), 1);
    assert_eq!(
        h.ctx.store.zscore(&keys::modifiers("foo"), "alice").unwrap(),
        Some(2)
    );

    h.advance(Duration::hours(2));
    DecayEngine::new(&h.ctx).run().unwrap();

    assert_eq!(h.ctx.store.zcard(&keys::modifiers("foo")).unwrap(), 0);
    assert_eq!(score(&h.ctx, "foo"), 0);
}

#[test]
fn modifier_count_never_goes_negative() {
    let h = harness(decay_config(HOUR));
    // An action whose modifier entry was lost (e.g. a crash mid-write).
    h.ctx.store.zincr_by(keys::SCORES, "foo", 1).unwrap();
    ActionLog::new(&h.ctx)
        .record(&Action::new("foo", Some("ghost"), 1, h.ctx.now()))
        .unwrap();

    h.advance(Duration::hours(2));
    DecayEngine::new(&h.ctx).run().unwrap();
    assert_eq!(
        h.ctx.store.zscore(&keys::modifiers("foo"), "ghost").unwrap(),
        None
    );
}

#[test]
fn malformed_tokens_are_dropped() {
    let h = harness(decay_config(HOUR));
    h.ctx
        .store
        .zadd(keys::ACTIONS, "not-json", h.ctx.now().timestamp())
        .unwrap();
    h.advance(Duration::hours(2));
    let report = DecayEngine::new(&h.ctx).run().unwrap();
    assert_eq!(report.dropped, 1);
    assert_eq!(report.expired, 0);
    assert!(ActionLog::new(&h.ctx).is_empty().unwrap());
}

#[test]
fn disabled_decay_touches_nothing() {
    let h = default_harness();
    apply(&h.ctx, "foo", Some("alice"), 1);
    h.advance(Duration::days(365));
    let report = DecayEngine::new(&h.ctx).run().unwrap();
    assert!(report.is_empty());
    assert_eq!(score(&h.ctx, "foo"), 1);
    assert_eq!(ActionLog::new(&h.ctx).len().unwrap(), 1);
}

#[test]
fn remove_term_forgets_only_that_term() {
    let h = harness(decay_config(HOUR));
    apply(&h.ctx, "foo", None, 1);
    apply(&h.ctx, "foo", None, 1);
    apply(&h.ctx, "bar", None, 1);
    let log = ActionLog::new(&h.ctx);
    assert_eq!(log.remove_term("foo").unwrap(), 2);
    assert!(log.for_term("foo").unwrap().is_empty());
    assert_eq!(log.for_term("bar").unwrap().len(), 1);
}
