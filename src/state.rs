//! `State`: the immutable value produced by every call to
//! `Machine::transition` (spec §3 `State`).

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::ActionRecord;
use crate::event::{EventLike, Trigger};
use crate::machine::Machine;
use crate::node::{NodeId, NodeKind};
use crate::value::{StateTree, StateValue};

/// One snapshot of a running (or previewed) machine.
///
/// `history` links back to the `State` this one was computed from — spec
/// §3 calls this out explicitly ("used for `changed` determination"). It is
/// kept as an `Arc` chain exactly as the spec describes; a host that cares
/// about long-run memory growth can clear it by constructing a fresh
/// `State` with `history: None` once it no longer needs the lineage.
#[derive(Clone)]
pub struct State<C, Evt: EventLike> {
    pub value: StateValue,
    pub context: C,
    pub event: Trigger<Evt>,
    pub actions: Vec<ActionRecord<C, Evt>>,
    /// activity id -> whether it should be running in this state.
    pub activities: HashMap<String, bool>,
    pub history: Option<Arc<State<C, Evt>>>,
    /// Per-compound/parallel-node snapshot of the active descendant set at
    /// the moment it was last exited (spec §3 `historyValue`).
    pub(crate) history_value: HashMap<NodeId, Vec<NodeId>>,
    pub(crate) tree: StateTree,
    pub changed: bool,
}

impl<C: Clone, Evt: EventLike> State<C, Evt> {
    /// True iff this state's value matches the given pattern (spec §4.A
    /// `matches`, lifted to `State` for ergonomic call sites).
    pub fn matches(&self, pattern: &str) -> bool {
        self.value.matches(&StateValue::leaf(pattern))
            || self
                .value
                .to_strings(".")
                .iter()
                .any(|p| p == pattern || p.starts_with(&format!("{pattern}.")))
    }

    /// True iff this is a top-level "done" configuration: the root itself is
    /// `Final`, a `Compound` root has a `Final` child active, or a
    /// `Parallel` root has every child active and `Final` — the same
    /// predicate `Interpreter` uses to decide when to fire `onDone`
    /// listeners (spec §4.D).
    pub fn is_done(&self, machine: &Machine<C, Evt>) -> bool {
        let root = machine.root_id();
        let node = machine.node(root);
        match node.kind {
            NodeKind::Final => true,
            NodeKind::Compound => node
                .children
                .iter()
                .any(|&c| self.tree.contains(c) && machine.node(c).kind == NodeKind::Final),
            NodeKind::Parallel => node
                .children
                .iter()
                .all(|&c| self.tree.contains(c) && machine.node(c).kind == NodeKind::Final),
            NodeKind::Atomic | NodeKind::History(_) => false,
        }
    }
}

impl<C: std::fmt::Debug, Evt: EventLike> std::fmt::Debug for State<C, Evt> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("value", &self.value)
            .field("context", &self.context)
            .field("changed", &self.changed)
            .field("actions", &self.actions)
            .finish()
    }
}
