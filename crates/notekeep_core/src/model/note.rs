//! Note domain model.
//!
//! # Responsibility
//! - Define the stored `Note` record and its wire shape.
//! - Define `NoteDraft` (create input) and `NotePatch` (update input).
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - `updated_at` is never earlier than `created_at` for clock-ordered writes.
//! - Timestamps serialize as ISO-8601 UTC with millisecond precision.

use crate::error::{NoteError, NoteResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque note identifier.
///
/// The store never interprets the value; uniqueness comes from the
/// `IdGenerator` plus the store's duplicate check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Stored note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    /// Ordered as supplied by the caller; duplicates are kept.
    pub tags: Vec<String>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update, even a no-op one.
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a fresh note from a validated draft.
    ///
    /// # Invariants
    /// - `created_at == updated_at == now`.
    /// - Missing tags become an empty list.
    pub(crate) fn from_draft(id: NoteId, draft: NoteDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
            tags: draft.tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges supplied patch fields and stamps `updated_at`.
    ///
    /// The patch must already be validated.
    pub(crate) fn apply(&mut self, patch: NotePatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.updated_at = now;
    }
}

/// Create input for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Checks create preconditions.
    ///
    /// # Errors
    /// - `NoteError::Validation` when `title` or `body` is empty.
    pub fn validate(&self) -> NoteResult<()> {
        require_non_empty("title", &self.title)?;
        require_non_empty("body", &self.body)
    }
}

/// Update input; `None` means "not supplied, keep the stored value".
///
/// A supplied empty tag list clears the tags. A supplied empty title or
/// body is rejected, so stored notes keep their non-empty invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns whether no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.tags.is_none()
    }

    /// Checks supplied fields against the stored-note invariants.
    ///
    /// # Errors
    /// - `NoteError::Validation` when a supplied `title` or `body` is empty.
    pub fn validate(&self) -> NoteResult<()> {
        if let Some(title) = self.title.as_deref() {
            require_non_empty("title", title)?;
        }
        if let Some(body) = self.body.as_deref() {
            require_non_empty("body", body)?;
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> NoteResult<()> {
    if value.is_empty() {
        return Err(NoteError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// ISO-8601 UTC timestamps with millisecond precision (`2024-05-01T09:30:00.000Z`).
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
