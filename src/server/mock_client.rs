//! `/mock/client` endpoints driving the [`LoadGenerator`](crate::load::LoadGenerator).

use super::error::{ApiError, SuccessResponse};
use super::extract::ApiPath;
use super::AppState;
use crate::load::MAX_DINERS;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

pub async fn start_mock_clients(
    State(state): State<AppState>,
    ApiPath(count): ApiPath<usize>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if count > MAX_DINERS {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("num: must be at most {MAX_DINERS} (got {count})"),
        ));
    }
    let started = state.load().start(count).await;
    Ok(Json(SuccessResponse::new(format!(
        "Started {started} mock clients"
    ))))
}

pub async fn stop_mock_clients(State(state): State<AppState>) -> Json<SuccessResponse> {
    state.load().stop().await;
    Json(SuccessResponse::new("Mock Clients stopped"))
}
