//! `/table` endpoints.
//!
//! Each handler forwards to the [`TableClient`](crate::clients::TableClient) and maps the
//! envelope to a status. Reads answer 404 on error, writes answer 409.

use super::error::{ApiError, SuccessResponse};
use super::extract::ApiPath;
use super::AppState;
use crate::framework::Envelope;
use crate::model::{NewOrderItem, TableId};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::debug;

fn respond<T: Serialize>(reply: Envelope<T>, success: StatusCode, failure: StatusCode) -> Response {
    match reply {
        Envelope::Success(value) => (success, Json(value)).into_response(),
        Envelope::Error(error) => ApiError::new(failure, error).into_response(),
    }
}

fn message(reply: Envelope<String>) -> Envelope<SuccessResponse> {
    reply.map(SuccessResponse::new)
}

pub async fn get_all_items(
    State(state): State<AppState>,
    ApiPath(table_id): ApiPath<i64>,
) -> Response {
    let reply = state.tables().fetch_all(TableId(table_id)).await;
    respond(reply, StatusCode::OK, StatusCode::NOT_FOUND)
}

pub async fn add_item(
    State(state): State<AppState>,
    ApiPath(table_id): ApiPath<i64>,
    payload: Result<Json<NewOrderItem>, JsonRejection>,
) -> Response {
    let Json(item) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!(%table_id, error = %rejection, "Rejected request body");
            return ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()).into_response();
        }
    };
    if let Err(errors) = item.validate() {
        debug!(%table_id, ?errors, "Invalid order item");
        let errors = errors.iter().map(ToString::to_string).collect();
        return ApiError::many(StatusCode::BAD_REQUEST, errors).into_response();
    }

    let reply = state.tables().create(TableId(table_id), item).await;
    respond(reply, StatusCode::CREATED, StatusCode::CONFLICT)
}

pub async fn clear_table(
    State(state): State<AppState>,
    ApiPath(table_id): ApiPath<i64>,
) -> Response {
    let reply = state.tables().clear(TableId(table_id)).await;
    respond(message(reply), StatusCode::OK, StatusCode::CONFLICT)
}

pub async fn get_item(
    State(state): State<AppState>,
    ApiPath((table_id, item_id)): ApiPath<(i64, String)>,
) -> Response {
    let reply = state.tables().fetch_one(TableId(table_id), item_id).await;
    respond(reply, StatusCode::OK, StatusCode::NOT_FOUND)
}

pub async fn delete_item(
    State(state): State<AppState>,
    ApiPath((table_id, item_id)): ApiPath<(i64, String)>,
) -> Response {
    let reply = state.tables().delete(TableId(table_id), item_id).await;
    respond(message(reply), StatusCode::OK, StatusCode::CONFLICT)
}
