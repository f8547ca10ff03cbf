//! Persistence functionality for state machines

pub mod storage;
pub mod serialization;

// Re-export items for convenience
pub use storage::*;
pub use serialization::*;
