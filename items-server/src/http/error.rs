//! API error types with IntoResponse
//!
//! Store failures collapse to one static message per operation; the
//! underlying database error is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// The four operations exposed over `/api/items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    /// Body text returned when the store fails during this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Error creating item",
            Self::Read => "Error fetching items",
            Self::Update => "Error updating item",
            Self::Delete => "Error deleting item",
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Store operation failed (500, logged)
    Store { op: Operation, source: DbError },

    /// Request could not be parsed (400)
    BadRequest { message: String },
}

impl ApiError {
    pub fn store(op: Operation) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Store { op, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Store { op, source } => {
                tracing::error!(operation = ?op, error = %source, "store operation failed");
                op.failure_message().to_string()
            }
            Self::BadRequest { message } => message,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
