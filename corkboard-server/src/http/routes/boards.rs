//! Board endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::{string_field, JsonBody};
use crate::models::{Board, BoardSummary};
use crate::store::BoardStore;

/// Create board request
///
/// `name` stays untyped so that a non-string value reads as missing
/// rather than failing deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateBoardRequest {
    pub name: Option<Value>,
}

/// GET /boards - list all boards
async fn list_boards(State(store): State<BoardStore>) -> Json<Vec<BoardSummary>> {
    Json(store.list_boards().await)
}

/// POST /boards - create a new board
async fn create_board(
    State(store): State<BoardStore>,
    JsonBody(req): JsonBody<CreateBoardRequest>,
) -> Result<Json<BoardSummary>, ApiError> {
    let name = string_field(req.name).unwrap_or_default();
    let board = store.create_board(&name).await?;
    tracing::info!(board_id = %board.id, "created board");
    Ok(Json(board))
}

/// GET /boards/{board_id} - board with all of its nodes
async fn get_board(
    State(store): State<BoardStore>,
    Path(board_id): Path<String>,
) -> Result<Json<Board>, ApiError> {
    let board = store.get_board(&board_id).await?;
    Ok(Json(board))
}

/// Board routes
pub fn router() -> Router<BoardStore> {
    Router::new()
        .route("/boards", get(list_boards).post(create_board))
        .route("/boards/{board_id}", get(get_board))
}
