#![allow(missing_docs)]

//! History manager wired to a real document store, exercising the
//! synchronous notification path end to end.

use std::rc::Rc;

use resume_history::HistoryManager;
use resume_model::{PersonalInfo, SectionPayload};
use resume_store::{DocumentStore, StoreError};

fn wired() -> (DocumentStore, Rc<HistoryManager>) {
    let mut store = DocumentStore::new();
    let history = Rc::new(HistoryManager::new(store.snapshot()));
    let recorder = Rc::clone(&history);
    store.subscribe(move |event| recorder.save_state(event.snapshot.clone()));
    (store, history)
}

fn set_title(store: &mut DocumentStore, title: &str) {
    store.update_section(SectionPayload::PersonalInfo(PersonalInfo {
        job_title: Some(title.to_string()),
        ..PersonalInfo::default()
    }));
}

fn title(store: &DocumentStore) -> String {
    store
        .document()
        .personal_info
        .job_title
        .clone()
        .unwrap_or_default()
}

/// The normative scenario: "" -> A -> B, undo, undo, redo.
#[test]
fn test_undo_redo_scenario() {
    let (mut store, history) = wired();

    set_title(&mut store, "A");
    assert_eq!(history.depth(), 1);

    set_title(&mut store, "B");
    assert_eq!(history.depth(), 2);

    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert_eq!(title(&store), "A");
    assert_eq!(history.depth(), 1);
    assert_eq!(history.future_len(), 1);

    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert_eq!(title(&store), "");
    assert_eq!(history.depth(), 0);
    assert_eq!(history.future_len(), 2);

    history
        .redo(|snap| store.replace_with(snap))
        .expect("redo applies");
    assert_eq!(title(&store), "A");
}

/// Undoing N distinct edits and redoing N times restores the final state,
/// matching each intermediate state along the way.
#[test]
fn test_undo_redo_inverse_walk() {
    let (mut store, history) = wired();
    let titles = ["A", "B", "C", "D"];
    for t in titles {
        set_title(&mut store, t);
    }

    for expected in ["C", "B", "A", ""] {
        history
            .undo(|snap| store.replace_with(snap))
            .expect("undo applies");
        assert_eq!(title(&store), expected);
    }
    assert!(!history.can_undo());

    for expected in ["A", "B", "C", "D"] {
        history
            .redo(|snap| store.replace_with(snap))
            .expect("redo applies");
        assert_eq!(title(&store), expected);
    }
    assert!(!history.can_redo());
}

/// The store notification raised by the undo replay must not re-record:
/// `past` shrinks by exactly one per undo.
#[test]
fn test_replay_does_not_re_record() {
    let (mut store, history) = wired();
    set_title(&mut store, "A");
    set_title(&mut store, "B");
    let before = history.depth();

    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");

    assert_eq!(history.depth(), before - 1);
}

#[test]
fn test_undo_before_any_edit_leaves_store_unchanged() {
    let (mut store, history) = wired();
    let result = history.undo(|snap| store.replace_with(snap));
    assert_eq!(result, Ok(false));
    assert_eq!(title(&store), "");
}

#[test]
fn test_new_edit_after_undo_makes_redo_unreachable() {
    let (mut store, history) = wired();
    set_title(&mut store, "A");

    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert!(history.can_redo());

    set_title(&mut store, "C");
    assert!(!history.can_redo());

    // The undone branch is gone: undo lands on the baseline, not "A".
    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert_eq!(title(&store), "");
}

/// Mutating the live store after a snapshot was captured must not alter
/// what undo later restores.
#[test]
fn test_snapshots_are_deep_copies() {
    let (mut store, history) = wired();
    set_title(&mut store, "A");
    set_title(&mut store, "B");

    // Mutate the live document again; the "A" snapshot must be unaffected.
    set_title(&mut store, "mutated");

    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert_eq!(title(&store), "B");
    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert_eq!(title(&store), "A");
}

/// Order changes are part of history: detaching a section is undoable.
#[test]
fn test_order_changes_are_undoable() {
    use resume_model::SectionKey;

    let (mut store, history) = wired();
    store.detach_section(SectionKey::Skills);
    assert!(!store.is_visible(SectionKey::Skills));

    history
        .undo(|snap| store.replace_with(snap))
        .expect("undo applies");
    assert!(store.is_visible(SectionKey::Skills));
}

/// A failing apply function propagates its error, leaves the history
/// stacks untouched, and does not leave the guard engaged.
#[test]
fn test_failed_apply_is_transactional() {
    let (mut store, history) = wired();
    set_title(&mut store, "A");

    let result: Result<bool, StoreError> = history.undo(|_| {
        Err(StoreError::InvalidOrder(
            resume_model::OrderError::DuplicateSection(resume_model::SectionKey::Skills),
        ))
    });
    assert!(result.is_err());
    assert_eq!(history.depth(), 1);
    assert_eq!(history.future_len(), 0);

    // Subsequent edits still record.
    set_title(&mut store, "B");
    assert_eq!(history.depth(), 2);
}
