//! Liveness endpoint.

use super::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Tables that have a worker.
    pub tables: usize,
}

/// Returns 200 with the number of known tables while the router answers, 503 otherwise.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.tables().known_tables().await {
        Ok(tables) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                tables: tables.len(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    tables: 0,
                }),
            )
        }
    }
}
