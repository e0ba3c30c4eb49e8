mod common;

use common::{day, ev};
use daygrid::{EventPatch, EventStore};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_upsert_inserts() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    assert_eq!(store.len(), 1);
    assert_eq!(store.day_len(&day("2024-01-01")), 1);
    assert_eq!(store.get("a").unwrap().start_minutes, 60);
}

#[test]
fn test_upsert_replaces_same_day() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    store.upsert_event(ev("a", "2024-01-01", 120, 45));

    assert_eq!(store.len(), 1);
    assert_eq!(store.day_len(&day("2024-01-01")), 1);
    let event = store.get("a").unwrap();
    assert_eq!(event.start_minutes, 120);
    assert_eq!(event.duration, 45);
}

#[test]
fn test_upsert_relinks_on_day_change() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    store.upsert_event(ev("a", "2024-01-02", 60, 30));

    assert_eq!(store.len(), 1);
    assert_eq!(store.day_len(&day("2024-01-01")), 0);
    assert_eq!(store.day_len(&day("2024-01-02")), 1);
    // The emptied partition is pruned entirely.
    assert!(!store.days().any(|d| d == &day("2024-01-01")));
}

#[test]
fn test_move_event_to_day() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    assert!(store.move_event_to_day("a", day("2024-01-05"), None));

    let event = store.get("a").unwrap();
    assert_eq!(event.date_key, day("2024-01-05"));
    // Timing is untouched by a day move.
    assert_eq!(event.start_minutes, 60);
    assert_eq!(store.events_for_date(&day("2024-01-01")).count(), 0);
    assert_eq!(store.events_for_date(&day("2024-01-05")).count(), 1);
}

#[test]
fn test_move_merges_patch() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    let patch = EventPatch {
        label: Some("renamed".to_string()),
        color: Some("#ff0000".to_string()),
        ..EventPatch::default()
    };
    assert!(store.move_event_to_day("a", day("2024-01-02"), Some(patch)));

    let event = store.get("a").unwrap();
    assert_eq!(event.label, "renamed");
    assert_eq!(event.color.as_deref(), Some("#ff0000"));
    assert_eq!(event.date_key, day("2024-01-02"));
}

#[test]
fn test_move_to_same_day_keeps_index() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    assert!(store.move_event_to_day("a", day("2024-01-01"), None));

    assert_eq!(store.day_len(&day("2024-01-01")), 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_update_event_time() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    assert!(store.update_event_time("a", 90, 45, None));

    let event = store.get("a").unwrap();
    assert_eq!(event.start_minutes, 90);
    assert_eq!(event.duration, 45);
    // The day partition never changes on a timing update.
    assert_eq!(event.date_key, day("2024-01-01"));
    assert_eq!(store.day_len(&day("2024-01-01")), 1);
}

#[test]
fn test_update_event_time_merges_patch() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    let patch = EventPatch {
        label: Some("stretched".to_string()),
        ..EventPatch::default()
    };
    assert!(store.update_event_time("a", 60, 60, Some(patch)));

    let event = store.get("a").unwrap();
    assert_eq!(event.duration, 60);
    assert_eq!(event.label, "stretched");
}

#[test]
fn test_remove_event() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    store.upsert_event(ev("b", "2024-01-01", 120, 30));

    assert!(store.remove_event("a"));

    assert_eq!(store.len(), 1);
    assert!(store.get("a").is_none());
    assert_eq!(store.day_len(&day("2024-01-01")), 1);
}

#[test]
fn test_remove_last_event_prunes_partition() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    assert!(store.remove_event("a"));

    assert!(store.is_empty());
    assert_eq!(store.days().count(), 0);
}

#[test]
fn test_unknown_id_is_a_no_op() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));

    assert!(!store.move_event_to_day("ghost", day("2024-01-02"), None));
    assert!(!store.update_event_time("ghost", 0, 10, None));
    assert!(!store.remove_event("ghost"));

    assert_eq!(store.len(), 1);
    assert_eq!(store.day_len(&day("2024-01-01")), 1);
    assert_eq!(store.day_len(&day("2024-01-02")), 0);
}

#[test]
fn test_events_for_unknown_day_is_empty() {
    let store = EventStore::new();
    assert_eq!(store.events_for_date(&day("1999-12-31")).count(), 0);
    assert_eq!(store.day_len(&day("1999-12-31")), 0);
}

#[test]
fn test_all_events() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    store.upsert_event(ev("b", "2024-01-02", 60, 30));
    store.upsert_event(ev("c", "2024-01-03", 60, 30));

    let mut ids: Vec<&str> = store.all_events().map(|e| e.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_subscribers_fire_once_per_mutation() {
    let mut store = EventStore::new();
    let calls = Rc::new(RefCell::new(0u32));

    let calls2 = Rc::clone(&calls);
    store.subscribe(move |_| *calls2.borrow_mut() += 1);

    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    store.move_event_to_day("a", day("2024-01-02"), None);
    store.update_event_time("a", 90, 30, None);
    store.remove_event("a");

    assert_eq!(*calls.borrow(), 4);
}

#[test]
fn test_no_op_mutations_do_not_notify() {
    let mut store = EventStore::new();
    let calls = Rc::new(RefCell::new(0u32));

    let calls2 = Rc::clone(&calls);
    store.subscribe(move |_| *calls2.borrow_mut() += 1);

    store.move_event_to_day("ghost", day("2024-01-02"), None);
    store.update_event_time("ghost", 0, 10, None);
    store.remove_event("ghost");

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_subscriber_observes_committed_state() {
    let mut store = EventStore::new();
    let seen_len = Rc::new(RefCell::new(0usize));

    let seen = Rc::clone(&seen_len);
    store.subscribe(move |s| *seen.borrow_mut() = s.len());

    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    assert_eq!(*seen_len.borrow(), 1);

    store.upsert_event(ev("b", "2024-01-01", 120, 30));
    assert_eq!(*seen_len.borrow(), 2);

    store.remove_event("a");
    assert_eq!(*seen_len.borrow(), 1);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut store = EventStore::new();
    let calls = Rc::new(RefCell::new(0u32));

    let calls2 = Rc::clone(&calls);
    let id = store.subscribe(move |_| *calls2.borrow_mut() += 1);

    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    assert!(store.unsubscribe(id));
    store.upsert_event(ev("b", "2024-01-01", 120, 30));

    assert_eq!(*calls.borrow(), 1);
    assert!(!store.unsubscribe(id));
}

// The drag-a-conflicting-event-away scenario end to end.
#[test]
fn test_move_resolves_conflicts() {
    let mut store = EventStore::new();
    store.upsert_event(ev("a", "2024-01-01", 60, 30));
    store.upsert_event(ev("b", "2024-01-01", 75, 30));

    let conflicts = store.conflicts_same_day(&day("2024-01-01"), 60, 30, Some("a"));
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, "b");

    assert!(store.move_event_to_day("b", day("2024-01-02"), None));

    assert!(store
        .conflicts_same_day(&day("2024-01-01"), 60, 30, Some("a"))
        .is_empty());
    let moved: Vec<_> = store.events_for_date(&day("2024-01-02")).collect();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].id, "b");
    assert_eq!(moved[0].date_key, day("2024-01-02"));
}
