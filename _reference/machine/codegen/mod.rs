//! Code generation functionality

pub mod types;
pub mod config;

// Re-export items for convenience
pub use types::*;
pub use config::*;
