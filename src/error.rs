//! Error types for machine construction, transition, and interpretation.
//!
//! Shaped after the teacher's `StateError` (`leptos-state/src/utils/types.rs`):
//! one `thiserror` variant per failure kind named in spec §7, plus
//! constructor helpers so call sites read like `StatechartError::unknown_action(name)`
//! rather than building struct variants by hand.

use thiserror::Error;

/// Result alias used throughout this crate.
pub type StatechartResult<T> = Result<T, StatechartError>;

/// Every synchronous failure mode a host can hit at the point of misuse.
///
/// `UnknownActionImplementation` is intentionally absent: per spec §7 it is
/// not fatal. Unresolved action names are surfaced on `State::actions`
/// instead of producing an error (see `crate::action::ActionRecord::Custom`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatechartError {
    #[error("invalid machine definition: {reason}")]
    InvalidMachineDefinition { reason: String },

    #[error("invalid state value: {reason}")]
    InvalidStateValue { reason: String },

    #[error("interpreter has not been started")]
    InterpreterNotStarted,

    #[error("guard evaluation failed: {reason}")]
    GuardEvaluationError { reason: String },

    #[error("action execution failed: {reason}")]
    ActionExecutionError { reason: String },
}

impl StatechartError {
    pub fn invalid_machine_definition(reason: impl Into<String>) -> Self {
        Self::InvalidMachineDefinition {
            reason: reason.into(),
        }
    }

    pub fn invalid_state_value(reason: impl Into<String>) -> Self {
        Self::InvalidStateValue {
            reason: reason.into(),
        }
    }

    pub fn guard_evaluation_error(reason: impl Into<String>) -> Self {
        Self::GuardEvaluationError {
            reason: reason.into(),
        }
    }

    pub fn action_execution_error(reason: impl Into<String>) -> Self {
        Self::ActionExecutionError {
            reason: reason.into(),
        }
    }
}
