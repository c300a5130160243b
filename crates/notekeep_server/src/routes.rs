//! Axum route handlers for the notes API.
//!
//! Each handler decodes its input, calls exactly one store operation and
//! maps the outcome to a status code plus `Envelope`.

use crate::envelope::{CreatedNote, Envelope, NoteList, SingleNote};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use log::{error, warn};
use notekeep_core::{Clock, IdGenerator, NoteDraft, NoteError, NoteId, NotePatch, NoteStore};
use serde::Deserialize;
use std::sync::Arc;

pub type SharedStore<I, C> = Arc<NoteStore<I, C>>;
pub type ApiResponse<T> = (StatusCode, Json<Envelope<T>>);

/// POST /notes body. Fields are optional so a missing title or body
/// reaches store validation and gets the regular 400 envelope.
#[derive(Debug, Deserialize)]
pub struct CreateNotePayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl From<CreateNotePayload> for NoteDraft {
    fn from(value: CreateNotePayload) -> Self {
        Self {
            title: value.title.unwrap_or_default(),
            body: value.body.unwrap_or_default(),
            tags: value.tags,
        }
    }
}

// POST /notes
pub async fn create_note<I: IdGenerator, C: Clock>(
    State(store): State<SharedStore<I, C>>,
    payload: Result<Json<CreateNotePayload>, JsonRejection>,
) -> ApiResponse<CreatedNote> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection, "Failed to add note"),
    };

    match store.create(payload.into()) {
        Ok(note_id) => (
            StatusCode::CREATED,
            Json(Envelope::success_with(
                "Note added successfully",
                CreatedNote { note_id },
            )),
        ),
        Err(NoteError::Validation(_)) => (
            StatusCode::BAD_REQUEST,
            Json(Envelope::fail(
                "Failed to add note. Please provide a note title and body",
            )),
        ),
        Err(err) => store_failure(err, "Failed to add note"),
    }
}

// GET /notes
pub async fn list_notes<I: IdGenerator, C: Clock>(
    State(store): State<SharedStore<I, C>>,
) -> ApiResponse<NoteList> {
    let notes = store.list();
    (StatusCode::OK, Json(Envelope::success(NoteList { notes })))
}

// GET /notes/{id}
pub async fn get_note<I: IdGenerator, C: Clock>(
    State(store): State<SharedStore<I, C>>,
    Path(id): Path<String>,
) -> ApiResponse<SingleNote> {
    match store.get(&NoteId::from(id)) {
        Ok(note) => (StatusCode::OK, Json(Envelope::success(SingleNote { note }))),
        Err(NoteError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Json(Envelope::fail("Note not found")))
        }
        Err(err) => store_failure(err, "Failed to load note"),
    }
}

// PUT /notes/{id}
pub async fn update_note<I: IdGenerator, C: Clock>(
    State(store): State<SharedStore<I, C>>,
    Path(id): Path<String>,
    payload: Result<Json<NotePatch>, JsonRejection>,
) -> ApiResponse<()> {
    let Json(patch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_body(rejection, "Failed to update note"),
    };

    match store.update(&NoteId::from(id), patch) {
        Ok(_) => (StatusCode::OK, Json(Envelope::done("Note updated successfully"))),
        Err(NoteError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(Envelope::fail("Failed to update note. Id not found")),
        ),
        Err(NoteError::Validation(reason)) => (
            StatusCode::BAD_REQUEST,
            Json(Envelope::fail(format!("Failed to update note. {reason}"))),
        ),
        Err(err) => store_failure(err, "Failed to update note"),
    }
}

// DELETE /notes/{id}
pub async fn delete_note<I: IdGenerator, C: Clock>(
    State(store): State<SharedStore<I, C>>,
    Path(id): Path<String>,
) -> ApiResponse<()> {
    match store.delete(&NoteId::from(id)) {
        Ok(_) => (StatusCode::OK, Json(Envelope::done("Note deleted successfully"))),
        Err(NoteError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(Envelope::fail("Failed to delete note. Id not found")),
        ),
        Err(err) => store_failure(err, "Failed to delete note"),
    }
}

/// Catch-all for unknown paths so clients still get an envelope.
pub async fn not_found() -> ApiResponse<()> {
    (StatusCode::NOT_FOUND, Json(Envelope::fail("Route not found")))
}

/// Known path, unsupported method (e.g. `PATCH /notes`).
pub async fn method_not_allowed() -> ApiResponse<()> {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::fail("Method not allowed")),
    )
}

// Serde error text can quote request values, so only the status is logged.
fn rejection_event(rejection: &JsonRejection) -> String {
    format!(
        "event=request_rejected module=http status=fail reason=malformed_body rejection_status={}",
        rejection.status().as_u16()
    )
}

fn malformed_body<T>(rejection: JsonRejection, action: &str) -> ApiResponse<T> {
    warn!("{}", rejection_event(&rejection));
    (
        StatusCode::BAD_REQUEST,
        Json(Envelope::fail(format!(
            "{action}. Request body must be a JSON object"
        ))),
    )
}

fn store_failure<T>(err: NoteError, action: &str) -> ApiResponse<T> {
    if err.is_client_error() {
        return (StatusCode::BAD_REQUEST, Json(Envelope::fail(format!("{action}. {err}"))));
    }
    error!("event=request_failed module=http status=error error={err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::error(format!("{action}. Internal error"))),
    )
}

#[cfg(test)]
mod tests {
    use super::rejection_event;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use axum::response::Json;
    use notekeep_core::NotePatch;

    #[tokio::test]
    async fn rejection_event_omits_request_values() {
        let request = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"tags":"private text"}"#))
            .unwrap();
        let rejection = Json::<NotePatch>::from_request(request, &())
            .await
            .unwrap_err();

        let line = rejection_event(&rejection);

        assert!(rejection.body_text().contains("private text"));
        assert!(!line.contains("private text"));
        assert!(line.ends_with("rejection_status=422"));
    }
}
