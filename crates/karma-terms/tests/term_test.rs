use std::sync::Arc;

use chrono::Duration;
use karma_core::{keys, IScoreStore, LinkOutcome};
use karma_decay::{ActionLog, DecayEngine};
use karma_terms::Term;
use test_fixtures::{decay_config, default_harness, harness, StaticDirectory};

#[test]
fn absent_term_reads_as_zero() {
    let h = default_harness();
    let t = Term::new(&h.ctx, "ghost");
    assert_eq!(t.own_score().unwrap(), 0);
    assert_eq!(t.total_score().unwrap(), 0);
    assert!(t.links().unwrap().is_empty());
    assert!(t.modified().unwrap().is_empty());
}

#[test]
fn names_are_normalized() {
    let h = default_harness();
    let a = Term::new(&h.ctx, "  RuSt ");
    let b = Term::new(&h.ctx, "rust");
    assert_eq!(a.name(), "rust");
    assert_eq!(a, b);
    a.modify(Some("alice"), 1).unwrap();
    assert_eq!(b.own_score().unwrap(), 1);
}

#[test]
fn modify_returns_total_and_tracks_modifiers() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    assert_eq!(foo.modify(Some("alice"), 1).unwrap(), 1);
    assert_eq!(foo.modify(Some("alice"), 1).unwrap(), 2);
    assert_eq!(foo.modify(Some("bob"), -1).unwrap(), 1);
    assert_eq!(foo.modify(None, 1).unwrap(), 2);

    let mods = foo.modified().unwrap();
    let counts: Vec<(&str, i64)> = mods.iter().map(|m| (m.user_id.as_str(), m.count)).collect();
    assert_eq!(counts, vec![("alice", 2), ("bob", 1)]);
}

#[test]
fn modified_resolves_display_names() {
    let mut h = default_harness();
    h.ctx = h.ctx.with_users(Arc::new(StaticDirectory::default().with("U1", "Alice")));
    let foo = Term::new(&h.ctx, "foo");
    foo.modify(Some("U1"), 1).unwrap();
    foo.modify(Some("U2"), 1).unwrap();
    foo.modify(Some("U1"), 1).unwrap();

    let mods = foo.modified().unwrap();
    assert_eq!(mods[0].name, "Alice");
    assert_eq!(mods[0].count, 2);
    assert_eq!(mods[1].name, "U2", "unknown ids fall back to the raw id");
}

#[test]
fn total_score_is_recomputed_live() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    let bar = Term::new(&h.ctx, "bar");
    foo.modify(Some("a"), 1).unwrap();
    foo.modify(Some("a"), 1).unwrap();
    bar.modify(Some("a"), 1).unwrap();

    assert_eq!(foo.link(&bar).unwrap(), LinkOutcome::Linked);
    assert_eq!(foo.total_score().unwrap(), 3);
    assert_eq!(foo.own_score().unwrap(), 2);

    bar.modify(Some("b"), 1).unwrap();
    assert_eq!(foo.total_score().unwrap(), 4, "linked score changes flow through");
    assert_eq!(bar.total_score().unwrap(), 2, "links are directed");
}

#[test]
fn links_are_one_level_deep() {
    let h = default_harness();
    let a = Term::new(&h.ctx, "aa");
    let b = Term::new(&h.ctx, "bb");
    let c = Term::new(&h.ctx, "cc");
    b.modify(None, 1).unwrap();
    c.modify(None, 10).unwrap();
    a.link(&b).unwrap();
    b.link(&c).unwrap();
    assert_eq!(a.total_score().unwrap(), 1);
    assert_eq!(b.total_score().unwrap(), 11);
}

#[test]
fn linking_twice_reports_already_linked() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    let bar = Term::new(&h.ctx, "bar");
    bar.modify(None, 5).unwrap();
    assert_eq!(foo.link(&bar).unwrap(), LinkOutcome::Linked);
    assert_eq!(foo.link(&bar).unwrap(), LinkOutcome::AlreadyLinked);
    assert_eq!(foo.total_score().unwrap(), 5);
    assert_eq!(bar.linked_by().unwrap(), vec!["foo"]);
}

#[test]
fn self_links_are_rejected() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    assert_eq!(foo.link(&Term::new(&h.ctx, "FOO")).unwrap(), LinkOutcome::SelfLink);
    assert!(foo.links().unwrap().is_empty());
}

#[test]
fn threshold_rejects_low_scoring_targets() {
    let mut config = karma_core::KarmaConfig::default();
    config.links.threshold = Some(3);
    let h = harness(config);
    let foo = Term::new(&h.ctx, "foo");
    let bar = Term::new(&h.ctx, "bar");
    bar.modify(None, 2).unwrap();

    assert_eq!(foo.link(&bar).unwrap(), LinkOutcome::BelowThreshold(3));
    assert!(foo.links().unwrap().is_empty());
    assert!(bar.linked_by().unwrap().is_empty());

    bar.modify(None, 1).unwrap();
    assert_eq!(foo.link(&bar).unwrap(), LinkOutcome::Linked);
}

#[test]
fn unlink_reports_whether_link_existed() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    let bar = Term::new(&h.ctx, "bar");
    assert!(!foo.unlink(&bar).unwrap());
    foo.link(&bar).unwrap();
    assert!(foo.unlink(&bar).unwrap());
    assert!(foo.links().unwrap().is_empty());
    assert!(bar.linked_by().unwrap().is_empty());
}

#[test]
fn deleting_nothing_reports_false() {
    let h = default_harness();
    assert!(!Term::new(&h.ctx, "nothing").delete().unwrap());
}

#[test]
fn term_back_at_zero_with_history_can_be_deleted() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    foo.modify(Some("alice"), 1).unwrap();
    foo.modify(Some("alice"), -1).unwrap();
    assert!(foo.delete().unwrap());
}

#[test]
fn delete_cascades_through_both_link_directions() {
    let h = default_harness();
    let foo = Term::new(&h.ctx, "foo");
    let bar = Term::new(&h.ctx, "bar");
    let baz = Term::new(&h.ctx, "baz");
    foo.modify(Some("alice"), 1).unwrap();
    bar.modify(Some("bob"), 1).unwrap();
    baz.modify(Some("bob"), 1).unwrap();

    bar.link(&foo).unwrap(); // incoming
    baz.link(&foo).unwrap(); // incoming
    foo.link(&bar).unwrap(); // outgoing

    assert!(foo.delete().unwrap());

    assert_eq!(foo.own_score().unwrap(), 0);
    assert!(foo.modified().unwrap().is_empty());
    assert!(foo.links().unwrap().is_empty());
    assert!(foo.linked_by().unwrap().is_empty());
    assert!(bar.links().unwrap().is_empty());
    assert!(baz.links().unwrap().is_empty());
    assert!(bar.linked_by().unwrap().is_empty());
    assert_eq!(bar.total_score().unwrap(), 1);
    assert!(!h.store.exists(&keys::links("foo")).unwrap());
}

#[test]
fn modifications_record_actions_only_with_decay() {
    let plain = default_harness();
    Term::new(&plain.ctx, "foo").modify(Some("a"), 1).unwrap();
    assert!(ActionLog::new(&plain.ctx).is_empty().unwrap());

    let h = harness(decay_config(3600));
    let foo = Term::new(&h.ctx, "foo");
    foo.modify(Some("a"), 1).unwrap();
    foo.modify(None, -1).unwrap();
    let actions = ActionLog::new(&h.ctx).for_term("foo").unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions.iter().map(|a| a.delta).sum::<i64>(), 0);
}

#[test]
fn delete_drops_pending_actions_so_decay_cannot_resurrect() {
    let h = harness(decay_config(3600));
    let foo = Term::new(&h.ctx, "foo");
    foo.modify(Some("a"), 1).unwrap();
    foo.modify(Some("a"), 1).unwrap();
    assert!(foo.delete().unwrap());

    h.advance(Duration::hours(2));
    DecayEngine::new(&h.ctx).run().unwrap();
    assert_eq!(foo.own_score().unwrap(), 0);
    assert!(!foo.exists().unwrap());
}

#[test]
fn decay_undoes_modifications_and_attribution() {
    let h = harness(decay_config(3600));
    let foo = Term::new(&h.ctx, "foo");
    foo.modify(Some("alice"), 1).unwrap();
    h.advance(Duration::minutes(30));
    foo.modify(Some("bob"), 1).unwrap();

    h.advance(Duration::minutes(45));
    DecayEngine::new(&h.ctx).run().unwrap();
    assert_eq!(foo.own_score().unwrap(), 1);
    let names: Vec<String> = foo.modified().unwrap().into_iter().map(|m| m.user_id).collect();
    assert_eq!(names, vec!["bob"]);
}
