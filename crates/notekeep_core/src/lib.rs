//! Core domain logic for notekeep.
//! This crate is the single source of truth for note invariants.

pub mod error;
pub mod logging;
pub mod model;
pub mod provider;
pub mod store;

pub use error::{NoteError, NoteResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::note::{Note, NoteDraft, NoteId, NotePatch};
pub use provider::clock::{Clock, ManualClock, SystemClock};
pub use provider::id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use store::note_store::NoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
