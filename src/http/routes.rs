//! Route handlers organized by resource

pub mod health;
pub mod notes;
pub mod students;

use serde::Serialize;

use super::error::ApiError;
use crate::StoreError;

/// Body returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

impl DeleteResponse {
    fn deleted() -> Self {
        Self {
            success: true,
            message: "删除成功",
        }
    }
}

/// Runs a synchronous repository call on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(format!("repository task failed: {e}")))?
        .map_err(ApiError::from)
}
