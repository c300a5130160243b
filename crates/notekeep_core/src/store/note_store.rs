//! In-memory note store.
//!
//! # Responsibility
//! - Provide create/list/get/update/delete over process-local notes.
//! - Enforce create/update validation even when called directly.
//!
//! # Invariants
//! - Failed operations leave the collection untouched.
//! - `id` and `created_at` of a stored note never change.
//! - Deletion is terminal; a deleted id is never served again.

use crate::error::{NoteError, NoteResult};
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::provider::clock::{Clock, SystemClock};
use crate::provider::id::{IdGenerator, UuidIdGenerator};
use log::{debug, error, info};
use parking_lot::RwLock;

/// Owner of the note collection.
///
/// Share it across request handlers as `Arc<NoteStore>`; the inner lock
/// makes each operation atomic with respect to the others.
pub struct NoteStore<I = UuidIdGenerator, C = SystemClock> {
    notes: RwLock<Vec<Note>>,
    ids: I,
    clock: C,
}

impl NoteStore {
    /// Creates an empty store with UUID ids and the system clock.
    pub fn new() -> Self {
        Self::with_providers(UuidIdGenerator, SystemClock)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdGenerator, C: Clock> NoteStore<I, C> {
    /// Creates an empty store with caller-provided id and clock sources.
    pub fn with_providers(ids: I, clock: C) -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
            ids,
            clock,
        }
    }

    /// Returns every stored note in insertion order.
    pub fn list(&self) -> Vec<Note> {
        let notes = self.notes.read();
        debug!("event=note_list module=store status=ok count={}", notes.len());
        notes.clone()
    }

    /// Stores a new note and returns its id.
    ///
    /// # Contract
    /// - `created_at == updated_at == clock.now()`.
    /// - Missing tags become an empty list.
    /// - The note is appended after all existing notes.
    ///
    /// # Errors
    /// - `Validation` when `title` or `body` is empty.
    /// - `DuplicateId` when the id generator repeats a stored id.
    pub fn create(&self, draft: NoteDraft) -> NoteResult<NoteId> {
        if let Err(err) = draft.validate() {
            info!("event=note_create module=store status=rejected reason=validation");
            return Err(err);
        }

        let mut notes = self.notes.write();
        let id = self.ids.next_id();
        if notes.iter().any(|note| note.id == id) {
            error!(
                "event=note_create module=store status=error error_code=duplicate_id note_id={id}"
            );
            return Err(NoteError::DuplicateId(id));
        }

        let note = Note::from_draft(id.clone(), draft, self.clock.now());
        notes.push(note);
        info!(
            "event=note_create module=store status=ok note_id={id} count={}",
            notes.len()
        );
        Ok(id)
    }

    /// Returns a copy of the note stored under `id`.
    ///
    /// # Errors
    /// - `NotFound` when no note has this id.
    pub fn get(&self, id: &NoteId) -> NoteResult<Note> {
        let notes = self.notes.read();
        match notes.iter().find(|note| &note.id == id) {
            Some(note) => Ok(note.clone()),
            None => {
                debug!("event=note_get module=store status=not_found note_id={id}");
                Err(NoteError::NotFound(id.clone()))
            }
        }
    }

    /// Merges supplied fields into the note and refreshes `updated_at`.
    ///
    /// `updated_at` moves even when the patch supplies nothing.
    ///
    /// # Errors
    /// - `NotFound` when no note has this id.
    /// - `Validation` when a supplied `title` or `body` is empty.
    pub fn update(&self, id: &NoteId, patch: NotePatch) -> NoteResult<Note> {
        let mut notes = self.notes.write();
        let Some(note) = notes.iter_mut().find(|note| &note.id == id) else {
            info!("event=note_update module=store status=not_found note_id={id}");
            return Err(NoteError::NotFound(id.clone()));
        };

        if let Err(err) = patch.validate() {
            info!("event=note_update module=store status=rejected reason=validation note_id={id}");
            return Err(err);
        }

        note.apply(patch, self.clock.now());
        info!("event=note_update module=store status=ok note_id={id}");
        Ok(note.clone())
    }

    /// Removes the note stored under `id` and returns it.
    ///
    /// # Errors
    /// - `NotFound` when no note has this id.
    pub fn delete(&self, id: &NoteId) -> NoteResult<Note> {
        let mut notes = self.notes.write();
        let Some(index) = notes.iter().position(|note| &note.id == id) else {
            info!("event=note_delete module=store status=not_found note_id={id}");
            return Err(NoteError::NotFound(id.clone()));
        };

        // `Vec::remove` keeps the relative order of the remaining notes.
        let removed = notes.remove(index);
        info!(
            "event=note_delete module=store status=ok note_id={id} count={}",
            notes.len()
        );
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.notes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::error::NoteError;
    use crate::model::note::{NoteDraft, NoteId};
    use crate::provider::clock::ManualClock;
    use crate::provider::id::IdGenerator;
    use chrono::{TimeZone, Utc};

    struct FixedIdGenerator;

    impl IdGenerator for FixedIdGenerator {
        fn next_id(&self) -> NoteId {
            NoteId::from("same")
        }
    }

    #[test]
    fn repeated_generated_id_is_rejected_without_overwrite() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let store = NoteStore::with_providers(FixedIdGenerator, clock);

        store.create(NoteDraft::new("first", "kept")).unwrap();
        let err = store.create(NoteDraft::new("second", "dropped")).unwrap_err();

        assert_eq!(err, NoteError::DuplicateId(NoteId::from("same")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&NoteId::from("same")).unwrap().title, "first");
    }

    #[test]
    fn default_store_starts_empty() {
        let store: NoteStore = NoteStore::default();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
