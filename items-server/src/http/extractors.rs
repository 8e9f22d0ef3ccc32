//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract an item id from the `{id}` path segment
///
/// `raw` keeps the segment exactly as sent so responses can echo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemId {
    pub id: i64,
    pub raw: String,
}

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(Self { id, raw }),
            Err(_) => Err(ApiError::BadRequest {
                message: format!("invalid item id: {}", raw),
            }),
        }
    }
}

/// `Json` whose rejections render as `{"error": ...}` with status 400
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
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
