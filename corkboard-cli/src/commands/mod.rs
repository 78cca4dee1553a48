//! Command implementations for the corkboard CLI

pub mod serve;

pub use serve::run_serve;
