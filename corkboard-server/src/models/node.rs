//! Node records and their create/update inputs
//!
//! Coordinates are kept as `serde_json::Number` so a value is echoed
//! back exactly as the client sent it (`50` stays `50`, `12.5` stays `12.5`).

use serde::Serialize;
use serde_json::Number;

/// Text given to a node created without one
pub const DEFAULT_NODE_TEXT: &str = "New node";

/// Horizontal position given to a node created without one
pub const DEFAULT_NODE_X: u64 = 50;

/// Vertical position given to a node created without one
pub const DEFAULT_NODE_Y: u64 = 50;

/// A positioned text item on a board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub text: String,
    pub x: Number,
    pub y: Number,
}

impl Node {
    /// Overwrite only the fields present in `patch`.
    pub fn apply(&mut self, patch: NodePatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
    }
}

/// Input for a new node; absent fields take the defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDraft {
    pub text: Option<String>,
    pub x: Option<Number>,
    pub y: Option<Number>,
}

impl From<NodeDraft> for Node {
    fn from(draft: NodeDraft) -> Self {
        Self {
            text: draft.text.unwrap_or_else(|| DEFAULT_NODE_TEXT.to_owned()),
            x: draft.x.unwrap_or_else(|| Number::from(DEFAULT_NODE_X)),
            y: draft.y.unwrap_or_else(|| Number::from(DEFAULT_NODE_Y)),
        }
    }
}

/// Partial update for an existing node; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub text: Option<String>,
    pub x: Option<Number>,
    pub y: Option<Number>,
}

impl NodePatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.x.is_none() && self.y.is_none()
    }
}
