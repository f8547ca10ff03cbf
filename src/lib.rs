//! # statechart-core
//!
//! A hierarchical, parallel statechart interpreter: a machine definition
//! format, a pure transition function, and a stateful run-to-completion
//! driver on top of it — inspired by XState's core, reworked as a
//! systems-language library rather than a duck-typed JavaScript one.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use statechart_core::*;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Ctx { count: u32 }
//!
//! #[derive(Clone, Debug)]
//! struct Ev(String);
//! impl EventLike for Ev {
//!     fn event_type(&self) -> &str { &self.0 }
//! }
//!
//! let root = NodeConfig::compound("light", "green")
//!     .state(NodeConfig::atomic("green").on("TIMER", vec![TransitionConfig::new(["yellow"])]))
//!     .state(NodeConfig::atomic("yellow").on("TIMER", vec![TransitionConfig::new(["red"])]))
//!     .state(NodeConfig::atomic("red").on("TIMER", vec![TransitionConfig::new(["green"])]));
//!
//! let machine = Machine::build("light", root, MachineOptions::default()).unwrap();
//! let state = machine.initial_state(Ctx::default());
//! assert!(state.matches("green"));
//! ```
//!
//! ## Architecture
//!
//! - [`value`] — `StateValue`/`StateTree`: the active-configuration model.
//! - [`action`] — the tagged action representation and its compiled form.
//! - [`node`]/[`machine`] — machine definition and the pure transition
//!   function (the bulk of the crate).
//! - [`interpreter`] — the stateful run-to-completion driver: queues,
//!   timers, activities, and invoked children.
//! - [`clock`] — real and simulated time sources for delayed events.
//!
//! ## Feature flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` for `StateValue` and
//!   `StringEvent`.

#![allow(clippy::type_complexity)]

pub mod action;
pub mod clock;
pub mod error;
pub mod event;
pub mod interpreter;
pub mod invoke;
pub mod logger;
pub mod machine;
pub mod node;
pub mod state;
pub mod value;

pub use action::{ActionConfig, ActionRecord};
pub use clock::{Clock, SimulatedClock, SystemClock, TimerHandle};
pub use error::{StatechartError, StatechartResult};
pub use event::{EventLike, StringEvent, Trigger};
pub use interpreter::{Interpreter, InterpreterOptions, Status};
pub use logger::Logger;
pub use machine::{Machine, MachineOptions};
pub use node::{
    ActivityDescriptor, AfterConfig, DelaySpec, HistoryKind, InvokeConfig, NodeConfig, NodeKind,
    TransitionConfig,
};
pub use state::State;
pub use value::{StateTree, StateValue};
