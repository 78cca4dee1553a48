//! Node endpoints, nested under a board

use axum::{
    extract::{Path, State},
    routing::{post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::SuccessResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{number_field, string_field, JsonBody};
use crate::models::{Node, NodeDraft, NodeId, NodePatch};
use crate::store::BoardStore;

/// Node fields as sent by the client
///
/// Used for both create and update. Each field is checked for its JSON
/// type at conversion; a wrong-typed field is treated as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NodeFieldsRequest {
    pub text: Option<Value>,
    pub x: Option<Value>,
    pub y: Option<Value>,
}

impl From<NodeFieldsRequest> for NodeDraft {
    fn from(req: NodeFieldsRequest) -> Self {
        Self {
            text: string_field(req.text),
            x: number_field(req.x),
            y: number_field(req.y),
        }
    }
}

impl From<NodeFieldsRequest> for NodePatch {
    fn from(req: NodeFieldsRequest) -> Self {
        Self {
            text: string_field(req.text),
            x: number_field(req.x),
            y: number_field(req.y),
        }
    }
}

/// Created node response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedNodeResponse {
    pub node_id: NodeId,
    pub text: String,
    pub x: Number,
    pub y: Number,
}

impl CreatedNodeResponse {
    fn new(node_id: NodeId, node: Node) -> Self {
        Self {
            node_id,
            text: node.text,
            x: node.x,
            y: node.y,
        }
    }
}

/// POST /boards/{board_id}/nodes - add a node to a board
async fn add_node(
    State(store): State<BoardStore>,
    Path(board_id): Path<String>,
    JsonBody(req): JsonBody<NodeFieldsRequest>,
) -> Result<Json<CreatedNodeResponse>, ApiError> {
    let (node_id, node) = store.add_node(&board_id, NodeDraft::from(req)).await?;
    Ok(Json(CreatedNodeResponse::new(node_id, node)))
}

/// PUT /boards/{board_id}/nodes/{node_id} - partial update
async fn update_node(
    State(store): State<BoardStore>,
    Path((board_id, node_id)): Path<(String, String)>,
    JsonBody(req): JsonBody<NodeFieldsRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let patch = NodePatch::from(req);
    if patch.is_empty() {
        tracing::debug!(%board_id, %node_id, "update carried no applicable fields");
    }
    store.update_node(&board_id, &node_id, patch).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /boards/{board_id}/nodes/{node_id}
async fn delete_node(
    State(store): State<BoardStore>,
    Path((board_id, node_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    store.delete_node(&board_id, &node_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// Node routes
pub fn router() -> Router<BoardStore> {
    Router::new()
        .route("/boards/{board_id}/nodes", post(add_node))
        .route(
            "/boards/{board_id}/nodes/{node_id}",
            put(update_node).delete(delete_node),
        )
}
