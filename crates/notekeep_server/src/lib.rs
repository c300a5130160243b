//! HTTP surface for notekeep.
//!
//! Maps REST calls onto `notekeep_core::NoteStore` and wraps every reply in
//! the `status`/`message`/`data` envelope.

pub mod config;
pub mod envelope;
pub mod error;
pub mod router;
pub mod routes;

pub use config::ServerConfig;
pub use envelope::{Envelope, EnvelopeStatus};
pub use error::ServerError;
pub use router::build_router;
