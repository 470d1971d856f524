//! Extractors that reject with [`ApiError`] instead of axum's plain-text
//! rejections, so every error body has the same JSON shape.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Malformed {
                status: rejection.status(),
                detail: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Single `{id}` path segment.
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Malformed {
                status: rejection.status(),
                detail: rejection.body_text(),
            })?;
        Ok(Self(id))
    }
}
