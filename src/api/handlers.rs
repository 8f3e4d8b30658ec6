//! Shared server state, health check and error mapping

use crate::neo4j::DocumentStore;
use crate::notes::{NoteError, NoteManager};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

/// Shared server state
pub struct ServerState {
    pub notes: NoteManager,
    /// Kept alongside the manager for health checks
    pub store: Arc<dyn DocumentStore>,
    /// Directory served under `/static`
    pub static_dir: String,
}

/// Shared board state
pub type BoardState = Arc<ServerState>;

impl ServerState {
    /// Build the handler state from the startup application state
    pub fn from_app_state(app: &AppState) -> Self {
        Self {
            notes: NoteManager::new(app.store.clone(), app.config.notes_collection.clone()),
            store: app.store.clone(),
            static_dir: app.config.static_dir.clone(),
        }
    }
}

// ============================================================================
// Health check
// ============================================================================

/// Per-service health status in the health response
#[derive(Serialize)]
pub struct ServiceHealthStatus {
    pub store: String,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealthStatus,
}

/// Health check handler — verifies connectivity to the document store.
///
/// Returns 200 + `"ok"` when the store answers, 503 + `"unhealthy"` otherwise.
pub async fn health(State(state): State<BoardState>) -> (StatusCode, Json<HealthResponse>) {
    let store_ok = state.store.health_check().await.unwrap_or(false);

    let (http_status, status) = if store_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceHealthStatus {
                store: if store_ok {
                    "connected".to_string()
                } else {
                    "disconnected".to_string()
                },
            },
        }),
    )
}

// ============================================================================
// Errors
// ============================================================================

/// API error
#[derive(Debug)]
pub enum AppError {
    Internal(anyhow::Error),
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<NoteError>() {
            Some(NoteError::InvalidNumber(_)) => AppError::BadRequest(err.to_string()),
            _ => AppError::Internal(err),
        }
    }
}
