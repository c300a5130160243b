//! Error taxonomy for note store operations.
//!
//! # Responsibility
//! - Give every store failure a typed, matchable variant.
//! - Keep client-caused failures (`Validation`, `NotFound`) separate from
//!   internal faults (`DuplicateId`).
//!
//! # Invariants
//! - No variant is fatal to the process; all are returned, never panicked.

use crate::model::note::NoteId;
use thiserror::Error;

/// Result alias used by every store operation.
pub type NoteResult<T> = Result<T, NoteError>;

/// Failure outcomes of note store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// A required field is missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),
    /// No note is stored under the given id.
    #[error("note not found: {0}")]
    NotFound(NoteId),
    /// The id generator produced an id that is already in use.
    #[error("generated note id already exists: {0}")]
    DuplicateId(NoteId),
}

impl NoteError {
    /// Returns whether the caller (not the store) caused this failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
