//! Route handlers organized by resource

pub mod health;
pub mod boards;
pub mod nodes;

use serde::Serialize;

/// Acknowledgement body for mutations that return no record
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
