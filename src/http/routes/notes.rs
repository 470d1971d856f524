//! Note endpoints under `/api/notes`.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::{DeleteResponse, run_blocking};
use crate::fallback;
use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody};
use crate::http::server::AppState;
use crate::{Note, NoteDraft, NoteId};

const NOT_FOUND: ApiError = ApiError::NotFound {
    detail: "便签不存在",
};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

/// GET /api/notes?search=keyword
///
/// A missing or empty `search` lists every note. Falls back to the canned
/// dataset on a store error when enabled.
async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let repo = state.notes.clone();
    let result = match params.search.filter(|keyword| !keyword.is_empty()) {
        Some(keyword) => run_blocking(move || repo.search(&keyword)).await,
        None => run_blocking(move || repo.list_all()).await,
    };

    match result {
        Ok(notes) => Ok(Json(notes)),
        Err(ApiError::Store(e)) if state.fallback => {
            tracing::warn!(error = %e, "note listing failed, serving fallback data");
            Ok(Json(fallback::notes()))
        }
        Err(e) => Err(e),
    }
}

/// GET /api/notes/{id}
async fn get_note(
    State(state): State<AppState>,
    IdPath(id): IdPath<NoteId>,
) -> Result<Json<Note>, ApiError> {
    let repo = state.notes;
    run_blocking(move || repo.get(id))
        .await?
        .map(Json)
        .ok_or(NOT_FOUND)
}

/// POST /api/notes
async fn create_note(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NoteDraft>,
) -> Result<Json<Note>, ApiError> {
    draft.validate()?;
    let repo = state.notes;
    let note = run_blocking(move || repo.create(&draft)).await?;
    tracing::info!(id = %note.id, "note created");
    Ok(Json(note))
}

/// PUT /api/notes/{id}
async fn update_note(
    State(state): State<AppState>,
    IdPath(id): IdPath<NoteId>,
    JsonBody(draft): JsonBody<NoteDraft>,
) -> Result<Json<Note>, ApiError> {
    draft.validate()?;
    let repo = state.notes;
    run_blocking(move || repo.update(id, &draft))
        .await?
        .map(Json)
        .ok_or(NOT_FOUND)
}

/// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<AppState>,
    IdPath(id): IdPath<NoteId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repo = state.notes;
    if run_blocking(move || repo.delete(id)).await? {
        tracing::info!(%id, "note deleted");
        Ok(Json(DeleteResponse::deleted()))
    } else {
        Err(NOT_FOUND)
    }
}

/// POST /api/notes/{id}/toggle-pin
async fn toggle_pin(
    State(state): State<AppState>,
    IdPath(id): IdPath<NoteId>,
) -> Result<Json<Note>, ApiError> {
    let repo = state.notes;
    run_blocking(move || repo.toggle_pin(id))
        .await?
        .map(Json)
        .ok_or(NOT_FOUND)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/api/notes/{id}/toggle-pin", post(toggle_pin))
}
