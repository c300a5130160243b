//! Note store: the single owner of the in-memory note collection.
//!
//! # Responsibility
//! - Mediate every read and write of notes through typed operations.
//! - Apply id/clock providers at the store boundary.
//!
//! # Invariants
//! - At most one note per id at any time.
//! - Listing order is insertion order.
//! - Each mutation runs under a single write lock acquisition.

pub mod note_store;
