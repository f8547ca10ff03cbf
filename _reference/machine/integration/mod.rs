//! Integration functionality for state machines

pub mod events;
pub mod config;

// Re-export modules for convenience
pub use events::*;
pub use config::*;
