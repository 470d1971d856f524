//! Student endpoints under `/api/students`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::{DeleteResponse, run_blocking};
use crate::fallback;
use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody};
use crate::http::server::AppState;
use crate::{Student, StudentDraft, StudentId};

const NOT_FOUND: ApiError = ApiError::NotFound {
    detail: "学生不存在",
};

/// GET /api/students
///
/// Falls back to the canned dataset on a store error when enabled.
async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, ApiError> {
    let repo = state.students.clone();
    match run_blocking(move || repo.list_all()).await {
        Ok(students) => Ok(Json(students)),
        Err(ApiError::Store(e)) if state.fallback => {
            tracing::warn!(error = %e, "student listing failed, serving fallback data");
            Ok(Json(fallback::students()))
        }
        Err(e) => Err(e),
    }
}

/// GET /api/students/{id}
async fn get_student(
    State(state): State<AppState>,
    IdPath(id): IdPath<StudentId>,
) -> Result<Json<Student>, ApiError> {
    let repo = state.students;
    run_blocking(move || repo.get(id))
        .await?
        .map(Json)
        .ok_or(NOT_FOUND)
}

/// POST /api/students
async fn create_student(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<StudentDraft>,
) -> Result<Json<Student>, ApiError> {
    draft.validate()?;
    let repo = state.students;
    let student = run_blocking(move || repo.create(&draft)).await?;
    tracing::info!(id = %student.id, "student created");
    Ok(Json(student))
}

/// PUT /api/students/{id}
async fn update_student(
    State(state): State<AppState>,
    IdPath(id): IdPath<StudentId>,
    JsonBody(draft): JsonBody<StudentDraft>,
) -> Result<Json<Student>, ApiError> {
    draft.validate()?;
    let repo = state.students;
    run_blocking(move || repo.update(id, &draft))
        .await?
        .map(Json)
        .ok_or(NOT_FOUND)
}

/// DELETE /api/students/{id}
async fn delete_student(
    State(state): State<AppState>,
    IdPath(id): IdPath<StudentId>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repo = state.students;
    if run_blocking(move || repo.delete(id)).await? {
        tracing::info!(%id, "student deleted");
        Ok(Json(DeleteResponse::deleted()))
    } else {
        Err(NOT_FOUND)
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
