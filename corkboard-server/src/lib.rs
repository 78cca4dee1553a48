//! corkboard-server: in-memory boards of positionable text nodes
//!
//! Provides the [`BoardStore`] and an axum HTTP layer exposing it
//! as a small JSON API.

pub mod error;
pub mod http;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::BoardStore;
