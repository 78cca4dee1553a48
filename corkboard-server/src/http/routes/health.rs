//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::store::BoardStore;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub boards: usize,
}

/// GET /health
async fn health(State(store): State<BoardStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        boards: store.board_count().await,
    })
}

/// Health routes
pub fn router() -> Router<BoardStore> {
    Router::new().route("/health", get(health))
}
