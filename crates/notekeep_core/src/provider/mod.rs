//! Injectable collaborators for id and timestamp generation.
//!
//! # Responsibility
//! - Keep id and clock policies out of the store so tests can pin them.
//!
//! # Invariants
//! - Providers are `Send + Sync`; the store is shared across request tasks.

pub mod clock;
pub mod id;
