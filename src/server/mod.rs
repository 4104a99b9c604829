//! HTTP server for the table service.
//!
//! # Endpoints
//!
//! - `GET /table/{table_id}` - All items at a table, oldest first
//! - `POST /table/{table_id}` - Order an item (201, 400 on invalid payload, 409 on conflict)
//! - `DELETE /table/{table_id}` - Clear a table
//! - `GET /table/{table_id}/item/{item_id}` - One item (404 when missing)
//! - `DELETE /table/{table_id}/item/{item_id}` - Remove one item
//! - `GET /mock/client/start/{num}` / `GET /mock/client/stop` - Load generator control
//! - `GET /health` - Liveness with the number of known tables
//!
//! Every error body is `{"errors": [...]}`.

use crate::clients::TableClient;
use crate::load::LoadGenerator;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod health;
pub mod mock_client;
pub mod tables;

pub use error::{ApiError, ErrorResponse, SuccessResponse};
pub use extract::ApiPath;
pub use health::health_handler;

/// Shared application state, handed to handlers through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    tables: TableClient,
    load: LoadGenerator,
}

impl AppState {
    pub fn new(tables: TableClient, load: LoadGenerator) -> Self {
        Self {
            inner: Arc::new(AppStateInner { tables, load }),
        }
    }

    /// Builds the state with a load generator driving the same tables.
    pub fn from_client(tables: TableClient) -> Self {
        let load = LoadGenerator::new(tables.clone());
        Self::new(tables, load)
    }

    pub fn tables(&self) -> &TableClient {
        &self.inner.tables
    }

    pub fn load(&self) -> &LoadGenerator {
        &self.inner.load
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::get;

    axum::Router::new()
        .route(
            "/table/{table_id}",
            get(tables::get_all_items)
                .post(tables::add_item)
                .delete(tables::clear_table),
        )
        .route(
            "/table/{table_id}/item/{item_id}",
            get(tables::get_item).delete(tables::delete_item),
        )
        .route("/mock/client/start/{num}", get(mock_client::start_mock_clients))
        .route("/mock/client/stop", get(mock_client::stop_mock_clients))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
