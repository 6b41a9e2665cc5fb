use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use karma_core::{Clock, IScoreStore};
use karma_storage::SqliteScoreStore;

struct StepClock(Mutex<DateTime<Utc>>);

impl StepClock {
    fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn store_with_clock() -> (SqliteScoreStore, Arc<StepClock>) {
    let clock = Arc::new(StepClock(Mutex::new(Utc::now())));
    let store = SqliteScoreStore::open_in_memory()
        .unwrap()
        .with_clock(clock.clone());
    (store, clock)
}

#[test]
fn ttl_counts_down_and_expires() {
    let (s, clock) = store_with_clock();
    s.set_ex("cd", Duration::seconds(10)).unwrap();
    assert!(s.exists("cd").unwrap());
    assert_eq!(s.ttl("cd").unwrap(), Some(Duration::seconds(10)));

    clock.advance(Duration::seconds(4));
    assert_eq!(s.ttl("cd").unwrap(), Some(Duration::seconds(6)));

    clock.advance(Duration::seconds(6));
    assert_eq!(s.ttl("cd").unwrap(), None);
    assert!(!s.exists("cd").unwrap());
}

#[test]
fn set_ex_refreshes_the_lifetime() {
    let (s, clock) = store_with_clock();
    s.set_ex("cd", Duration::seconds(10)).unwrap();
    clock.advance(Duration::seconds(8));
    s.set_ex("cd", Duration::seconds(10)).unwrap();
    assert_eq!(s.ttl("cd").unwrap(), Some(Duration::seconds(10)));
}

#[test]
fn expired_keys_are_hidden_from_key_listing_and_purged() {
    let (s, clock) = store_with_clock();
    s.set_ex("a", Duration::seconds(1)).unwrap();
    s.set_ex("b", Duration::seconds(100)).unwrap();
    clock.advance(Duration::seconds(2));

    assert_eq!(s.keys("*").unwrap(), vec!["b"]);
    assert_eq!(s.purge_expired().unwrap(), 1);
}

#[test]
fn ttl_of_missing_key_is_none() {
    let (s, _) = store_with_clock();
    assert_eq!(s.ttl("never-set").unwrap(), None);
}
