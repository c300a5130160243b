//! Route table for the notes API.

use crate::routes;
use axum::routing::get;
use axum::Router;
use notekeep_core::{Clock, IdGenerator, NoteStore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the notes router over a shared store.
///
/// Routes:
/// - `POST /notes`, `GET /notes`
/// - `GET|PUT|DELETE /notes/{id}`
pub fn build_router<I, C>(store: Arc<NoteStore<I, C>>) -> Router
where
    I: IdGenerator + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route(
            "/notes",
            get(routes::list_notes::<I, C>).post(routes::create_note::<I, C>),
        )
        .route(
            "/notes/{id}",
            get(routes::get_note::<I, C>)
                .put(routes::update_note::<I, C>)
                .delete(routes::delete_note::<I, C>),
        )
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .with_state(store)
        .layer(CorsLayer::permissive())
}
