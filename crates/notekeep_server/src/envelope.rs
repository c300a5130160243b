//! Response envelope shared by every HTTP route.
//!
//! Wire shape: `{ "status": "success" | "fail" | "error", "message"?, "data"? }`.
//! `fail` marks client errors, `error` marks server faults.

use notekeep_core::{Note, NoteId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    Success,
    Fail,
    Error,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with(message: impl Into<String>, data: T) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl Envelope<()> {
    /// Success without a data payload (update/delete).
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }
}

// Route payloads.

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedNote {
    pub note_id: NoteId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SingleNote {
    pub note: Note,
}
