//! Invoked child machines (spec §4.E, component E).
//!
//! A child interpreter is spawned when the interpreter enters a state whose
//! node carries an `invoke` descriptor, and disposed when that state is
//! exited. This module holds the compiled descriptor; the actual
//! spawn/dispose/auto-forward wiring lives in [`crate::interpreter`] because
//! it needs the running `Interpreter`, not just the static `Machine`.
//!
//! Child machines share their parent's `Context`/`Event` types. A genuinely
//! heterogeneous child (its own unrelated context/event types) would need
//! type erasure behind a trait object and is deferred — see DESIGN.md.

use std::sync::Arc;

use crate::event::EventLike;
use crate::machine::Machine;

pub(crate) struct Invoke<C, Evt: EventLike> {
    pub id: String,
    pub src: Arc<Machine<C, Evt>>,
    pub data: Option<Arc<dyn Fn(&C) -> C + Send + Sync>>,
    pub auto_forward: bool,
}
