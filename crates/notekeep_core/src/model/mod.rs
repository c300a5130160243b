//! Domain model for in-memory notes.
//!
//! # Responsibility
//! - Define the canonical note record and its create/update inputs.
//! - Own field-level validation so every write path shares one rule set.
//!
//! # Invariants
//! - Every note is identified by an opaque, immutable `NoteId`.
//! - `title` and `body` are never empty on a stored note.

pub mod note;
