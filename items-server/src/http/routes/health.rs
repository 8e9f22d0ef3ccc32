//! Health check endpoint
//!
//! Always 200 while the process serves HTTP; `store` tells whether the
//! database answered a ping.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = match state.store.ping().await {
        Ok(()) => "up",
        Err(err) => {
            tracing::warn!("health check: store unreachable: {}", err);
            "down"
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{MemoryItemStore, UnavailableItemStore};

    #[tokio::test]
    async fn reports_store_up() {
        let state = Arc::new(AppState::new(MemoryItemStore::new()));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.store, "up");
    }

    #[tokio::test]
    async fn reports_store_down() {
        let state = Arc::new(AppState::new(UnavailableItemStore));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, "down");
    }
}
