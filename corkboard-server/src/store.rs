//! In-memory board store
//!
//! Holds every board and its nodes behind one coarse-grained lock:
//! - reads (list, get, count) share the lock
//! - mutations take it exclusively and finish before releasing it
//!
//! Nothing is persisted; the store starts empty and lives as long as
//! the last clone of its handle.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::{Board, BoardId, BoardName, BoardSummary, Node, NodeDraft, NodeId, NodePatch};

/// Shared handle to the in-memory store
#[derive(Clone, Default)]
pub struct BoardStore {
    boards: Arc<RwLock<HashMap<BoardId, Board>>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// List `{id, name}` for every board, in no particular order.
    pub async fn list_boards(&self) -> Vec<BoardSummary> {
        let boards = self.boards.read().await;
        boards
            .iter()
            .map(|(id, board)| BoardSummary {
                id: id.clone(),
                name: board.name.clone(),
            })
            .collect()
    }

    /// Create an empty board under a freshly generated id.
    pub async fn create_board(&self, name: &str) -> StoreResult<BoardSummary> {
        let name = BoardName::new(name)?;
        let id = BoardId::generate();
        let summary = BoardSummary {
            id: id.clone(),
            name: name.as_str().to_owned(),
        };

        self.boards.write().await.insert(id, Board::new(name));
        tracing::debug!(board_id = %summary.id, name = %summary.name, "board created");

        Ok(summary)
    }

    /// Snapshot of a board including all of its nodes.
    pub async fn get_board(&self, board_id: &str) -> StoreResult<Board> {
        self.boards
            .read()
            .await
            .get(board_id)
            .cloned()
            .ok_or_else(|| StoreError::board_not_found(board_id))
    }

    /// Add a node to a board, filling omitted fields with defaults.
    pub async fn add_node(&self, board_id: &str, draft: NodeDraft) -> StoreResult<(NodeId, Node)> {
        let mut boards = self.boards.write().await;
        let board = boards
            .get_mut(board_id)
            .ok_or_else(|| StoreError::board_not_found(board_id))?;

        let node_id = NodeId::generate();
        let node = Node::from(draft);
        board.nodes.insert(node_id.clone(), node.clone());
        tracing::debug!(%board_id, %node_id, "node added");

        Ok((node_id, node))
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub async fn update_node(&self, board_id: &str, node_id: &str, patch: NodePatch) -> StoreResult<()> {
        let mut boards = self.boards.write().await;
        let node = boards
            .get_mut(board_id)
            .ok_or_else(|| StoreError::board_not_found(board_id))?
            .nodes
            .get_mut(node_id)
            .ok_or_else(|| StoreError::node_not_found(node_id))?;

        node.apply(patch);
        tracing::debug!(%board_id, %node_id, "node updated");

        Ok(())
    }

    /// Remove a node permanently.
    pub async fn delete_node(&self, board_id: &str, node_id: &str) -> StoreResult<()> {
        let mut boards = self.boards.write().await;
        boards
            .get_mut(board_id)
            .ok_or_else(|| StoreError::board_not_found(board_id))?
            .nodes
            .remove(node_id)
            .ok_or_else(|| StoreError::node_not_found(node_id))?;

        tracing::debug!(%board_id, %node_id, "node deleted");
        Ok(())
    }

    /// Number of boards currently held.
    pub async fn board_count(&self) -> usize {
        self.boards.read().await.len()
    }
}
