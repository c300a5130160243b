//! Note id providers.

use crate::model::note::NoteId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of new note ids.
///
/// Implementations should not repeat values within a process lifetime; the
/// store still rejects a repeated id instead of overwriting a note.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> NoteId;
}

/// Random v4 UUID ids in 32-char hex form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> NoteId {
        NoteId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Predictable `<prefix>-<n>` ids for tests, starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("note")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> NoteId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        NoteId::new(format!("{}-{value}", self.prefix))
    }
}
