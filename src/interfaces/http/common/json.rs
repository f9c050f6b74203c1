//! JSON extractor for Axum
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but a malformed body is reported
//! through [`ApiError`] so clients always receive the same error envelope.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(format!("Invalid JSON: {}", rejection)))?;

        Ok(ApiJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
