//! Domain models with validation at construction
//!
//! Required input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod id;
pub mod board;
pub mod node;

pub use validation::ValidationError;
pub use id::{BoardId, NodeId};
pub use board::{Board, BoardName, BoardSummary};
pub use node::{Node, NodeDraft, NodePatch, DEFAULT_NODE_TEXT, DEFAULT_NODE_X, DEFAULT_NODE_Y};
