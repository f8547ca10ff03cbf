//! Serialization and deserialization for state machines

pub mod core;
pub mod metrics;

// Re-export the most commonly used items
pub use core::*;
pub use metrics::*;
