use chrono::{DateTime, Duration, TimeZone, Utc};
use notekeep_core::{
    ManualClock, NoteDraft, NoteError, NoteId, NotePatch, NoteStore, SequentialIdGenerator,
};
use std::collections::HashSet;

fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

fn test_store() -> (NoteStore<SequentialIdGenerator, ManualClock>, ManualClock) {
    let clock = ManualClock::new(start_time());
    let store = NoteStore::with_providers(SequentialIdGenerator::default(), clock.clone());
    (store, clock)
}

#[test]
fn create_and_get_roundtrip() {
    let (store, _) = test_store();

    let id = store
        .create(NoteDraft::new("Shopping", "Buy milk").with_tags(["home", "errand"]))
        .unwrap();

    let note = store.get(&id).unwrap();
    assert_eq!(note.id, id);
    assert_eq!(note.title, "Shopping");
    assert_eq!(note.body, "Buy milk");
    assert_eq!(note.tags, vec!["home", "errand"]);
    assert_eq!(note.created_at, start_time());
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn create_without_tags_defaults_to_empty() {
    let (store, _) = test_store();

    let id = store.create(NoteDraft::new("Work", "Finish report")).unwrap();

    assert!(store.get(&id).unwrap().tags.is_empty());
}

#[test]
fn create_with_empty_title_or_body_leaves_store_unchanged() {
    let (store, _) = test_store();
    store.create(NoteDraft::new("keep", "me")).unwrap();
    let before = store.list();

    let err = store.create(NoteDraft::new("", "body")).unwrap_err();
    assert!(matches!(err, NoteError::Validation(_)));
    let err = store.create(NoteDraft::new("title", "")).unwrap_err();
    assert!(matches!(err, NoteError::Validation(_)));

    assert_eq!(store.list(), before);
}

#[test]
fn thousand_creates_yield_distinct_ids() {
    let store = NoteStore::new();

    let ids = (0..1000)
        .map(|n| store.create(NoteDraft::new(format!("t{n}"), "b")).unwrap())
        .collect::<Vec<_>>();

    let unique = ids.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), 1000);
    assert_eq!(store.len(), 1000);
}

#[test]
fn update_missing_id_returns_not_found() {
    let (store, _) = test_store();
    store.create(NoteDraft::new("a", "b")).unwrap();
    let before = store.list();

    let missing = NoteId::from("missing");
    let err = store
        .update(&missing, NotePatch::new().title("new"))
        .unwrap_err();

    assert_eq!(err, NoteError::NotFound(missing));
    assert_eq!(store.list(), before);
}

#[test]
fn update_title_only_changes_title_and_updated_at() {
    let (store, clock) = test_store();
    let id = store
        .create(NoteDraft::new("Shopping", "Buy milk").with_tags(["home"]))
        .unwrap();
    let original = store.get(&id).unwrap();

    clock.advance(Duration::minutes(5));
    let updated = store
        .update(&id, NotePatch::new().title("Groceries"))
        .unwrap();

    assert_eq!(updated.title, "Groceries");
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.body, original.body);
    assert_eq!(updated.tags, original.tags);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
    assert_eq!(store.get(&id).unwrap(), updated);
}

#[test]
fn empty_patch_still_refreshes_updated_at() {
    let (store, clock) = test_store();
    let id = store.create(NoteDraft::new("a", "b")).unwrap();

    clock.advance(Duration::seconds(1));
    let updated = store.update(&id, NotePatch::new()).unwrap();

    assert_eq!(updated.updated_at, start_time() + Duration::seconds(1));
    assert_eq!(updated.created_at, start_time());
}

#[test]
fn update_rejects_empty_title_and_keeps_note() {
    let (store, clock) = test_store();
    let id = store.create(NoteDraft::new("a", "b")).unwrap();
    let before = store.get(&id).unwrap();

    clock.advance(Duration::seconds(1));
    let err = store.update(&id, NotePatch::new().title("")).unwrap_err();

    assert!(matches!(err, NoteError::Validation(_)));
    assert_eq!(store.get(&id).unwrap(), before);
}

#[test]
fn update_keeps_order_and_size() {
    let (store, _) = test_store();
    let first = store.create(NoteDraft::new("1", "x")).unwrap();
    let second = store.create(NoteDraft::new("2", "x")).unwrap();
    let third = store.create(NoteDraft::new("3", "x")).unwrap();

    store
        .update(&second, NotePatch::new().body("changed").tags(["t"]))
        .unwrap();

    let ids = store.list().into_iter().map(|note| note.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn delete_removes_exactly_one_note() {
    let (store, _) = test_store();
    let first = store.create(NoteDraft::new("1", "x")).unwrap();
    let second = store.create(NoteDraft::new("2", "x")).unwrap();
    let third = store.create(NoteDraft::new("3", "x")).unwrap();

    let removed = store.delete(&second).unwrap();

    assert_eq!(removed.id, second);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(&second).unwrap_err(), NoteError::NotFound(second.clone()));
    let ids = store.list().into_iter().map(|note| note.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![first, third]);
}

#[test]
fn delete_missing_id_leaves_size_unchanged() {
    let (store, _) = test_store();
    store.create(NoteDraft::new("a", "b")).unwrap();

    let missing = NoteId::from("missing");
    assert_eq!(
        store.delete(&missing).unwrap_err(),
        NoteError::NotFound(missing)
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn deleted_note_cannot_be_deleted_or_updated_again() {
    let (store, _) = test_store();
    let id = store.create(NoteDraft::new("a", "b")).unwrap();
    store.delete(&id).unwrap();

    assert!(matches!(store.delete(&id), Err(NoteError::NotFound(_))));
    assert!(matches!(
        store.update(&id, NotePatch::new().title("back")),
        Err(NoteError::NotFound(_))
    ));
}

#[test]
fn shopping_and_work_scenario() {
    let (store, _) = test_store();
    let a = store.create(NoteDraft::new("Shopping", "Buy milk")).unwrap();
    let b = store.create(NoteDraft::new("Work", "Finish report")).unwrap();

    let titles = store
        .list()
        .into_iter()
        .map(|note| note.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Shopping", "Work"]);

    store.delete(&a).unwrap();

    let remaining = store.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b);
    assert_eq!(store.get(&a).unwrap_err(), NoteError::NotFound(a));
}
