//! Error types for corkboard-server

use thiserror::Error;

use crate::models::ValidationError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store operation
///
/// Every failure is permanent for the current store state; nothing here
/// is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced board or node does not exist
    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: String },
}

impl StoreError {
    pub(crate) fn board_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "Board",
            id: id.to_owned(),
        }
    }

    pub(crate) fn node_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "Node",
            id: id.to_owned(),
        }
    }
}
