use std::thread::sleep;
use std::time::Duration;

use chrono::NaiveDate;

use super::{create_test_store, draft};

#[test]
fn test_store_open_empty() {
    let (store, _temp_dir) = create_test_store();
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.list(None).unwrap().is_empty());
}

#[test]
fn test_create_then_get_returns_normalized_input() {
    let (store, _temp_dir) = create_test_store();
    let created = store.create(&draft("Ann", "  contacted ", "42", "2026-09-01")).unwrap();

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched.name, "Ann");
    assert_eq!(fetched.email, "ann@example.com");
    assert_eq!(fetched.status, "Contacted");
    assert_eq!(fetched.score, 42);
    assert_eq!(fetched.next_followup, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
}

#[test]
fn test_created_at_not_after_updated_at() {
    let (store, _temp_dir) = create_test_store();
    let created = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    assert!(created.created_at <= created.updated_at);
}

#[test]
fn test_update_refreshes_updated_at_only() {
    let (store, _temp_dir) = create_test_store();
    let created = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();

    sleep(Duration::from_millis(5));
    let updated = store.update(created.id, &draft("Ann", "Contacted", "2", "2026-09-02")).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.status, "Contacted");
    assert_eq!(updated.score, 2);
}

#[test]
fn test_update_missing_id_not_found() {
    let (store, _temp_dir) = create_test_store();
    let err = store.update(999, &draft("Ann", "New", "1", "2026-09-01")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_get_missing_id_not_found() {
    let (store, _temp_dir) = create_test_store();
    let err = store.get(999).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "not found: lead with id 999");
}

#[test]
fn test_delete_removes_row() {
    let (store, _temp_dir) = create_test_store();
    let created = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();

    store.delete(created.id).unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.get(created.id).unwrap_err().is_not_found());
}

#[test]
fn test_delete_twice_fails_second_time() {
    let (store, _temp_dir) = create_test_store();
    let created = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();

    store.delete(created.id).unwrap();
    let err = store.delete(created.id).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_delete_missing_id_not_found() {
    let (store, _temp_dir) = create_test_store();
    assert!(store.delete(12345).unwrap_err().is_not_found());
}

#[test]
fn test_list_orders_by_updated_at_descending() {
    let (store, _temp_dir) = create_test_store();
    let first = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    sleep(Duration::from_millis(5));
    let second = store.create(&draft("Bob", "New", "2", "2026-09-02")).unwrap();
    sleep(Duration::from_millis(5));
    // Touching the older lead moves it to the front.
    store.update(first.id, &draft("Ann", "Contacted", "1", "2026-09-01")).unwrap();

    let ids: Vec<i64> = store.list(None).unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_list_filters_exact_status() {
    let (store, _temp_dir) = create_test_store();
    store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    store.create(&draft("Bob", "Contacted", "2", "2026-09-02")).unwrap();
    store.create(&draft("Cid", "new", "3", "2026-09-03")).unwrap();

    // "new" normalized to "New" at creation, so both match.
    let news = store.list(Some("New")).unwrap();
    assert_eq!(news.len(), 2);
    assert!(news.iter().all(|l| l.status == "New"));

    assert!(store.list(Some("Closed")).unwrap().is_empty());
}

#[test]
fn test_all_by_id_ascending() {
    let (store, _temp_dir) = create_test_store();
    let a = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    let b = store.create(&draft("Bob", "New", "2", "2026-09-02")).unwrap();
    let c = store.create(&draft("Cid", "New", "3", "2026-09-03")).unwrap();

    let ids: Vec<i64> = store.all_by_id().unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[test]
fn test_all_by_created_descending() {
    let (store, _temp_dir) = create_test_store();
    let a = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    sleep(Duration::from_millis(5));
    let b = store.create(&draft("Bob", "New", "2", "2026-09-02")).unwrap();
    sleep(Duration::from_millis(5));
    // An update must not reorder the created_at listing.
    store.update(a.id, &draft("Ann", "Contacted", "1", "2026-09-01")).unwrap();

    let ids: Vec<i64> = store.all_by_created().unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[test]
fn test_count_tracks_mutations() {
    let (store, _temp_dir) = create_test_store();
    assert_eq!(store.count().unwrap(), 0);
    let created = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    store.create(&draft("Bob", "New", "2", "2026-09-02")).unwrap();
    assert_eq!(store.count().unwrap(), 2);
    store.delete(created.id).unwrap();
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_id_stable_across_deletes() {
    let (store, _temp_dir) = create_test_store();
    let a = store.create(&draft("Ann", "New", "1", "2026-09-01")).unwrap();
    store.delete(a.id).unwrap();
    // AUTOINCREMENT never reuses a deleted id.
    let b = store.create(&draft("Bob", "New", "2", "2026-09-02")).unwrap();
    assert!(b.id > a.id);
}
