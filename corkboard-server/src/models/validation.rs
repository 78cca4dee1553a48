//! Validation error types

use thiserror::Error;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is absent or empty
    #[error("{field} required")]
    Missing { field: &'static str },
}
