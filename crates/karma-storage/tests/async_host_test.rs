//! The store is synchronous but must stay usable from inside an async host.

use karma_core::{keys, IScoreStore, SortOrder};
use karma_storage::SqliteScoreStore;

#[tokio::test]
async fn store_works_inside_a_current_thread_runtime() {
    let store = SqliteScoreStore::open_in_memory().unwrap();
    assert_eq!(store.zincr_by(keys::SCORES, "foo", 2).unwrap(), 2);
    store.sadd(&keys::links("foo"), "bar").unwrap();
    assert_eq!(store.smembers(&keys::links("foo")).unwrap(), vec!["bar"]);
    store.set_ex("karma:marker", chrono::Duration::seconds(5)).unwrap();
    assert!(store.ttl("karma:marker").unwrap().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn store_is_shared_across_spawned_tasks() {
    let store = std::sync::Arc::new(SqliteScoreStore::open_in_memory().unwrap());
    let mut handles = Vec::new();
    for i in 0..4 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..10 {
                store.zincr_by(keys::SCORES, &format!("t{i}"), 1).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    let scores = store.zrange(keys::SCORES, 0, -1, SortOrder::Ascending).unwrap();
    assert_eq!(scores.len(), 4);
    assert!(scores.iter().all(|(_, s)| *s == 10));
}
