//! The machine's data model (spec §3): [`NodeConfig`] is the plain,
//! host-authored description ("validated in-memory machine description",
//! spec §1) and [`StateNode`] is the immutable, compiled form `Machine`
//! actually walks. Keeping these separate means `Machine::build` is the only
//! place that has to worry about resolving string targets into indices.
//!
//! Per the design note in spec §9 ("cyclic state-node graph"), children own
//! their subtrees and parents are referenced by index into a flat arena
//! (`Vec<StateNode<..>>` on `Machine`), never by raw pointer.

use std::collections::HashMap;
use std::sync::Arc;

use crate::action::ActionConfig;
use crate::event::{EventLike, Trigger};

/// Index into a [`crate::machine::Machine`]'s flat node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A node's structural role, spec §3 `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Atomic,
    Compound,
    Parallel,
    Final,
    History(HistoryKind),
}

/// Restored from the teacher's `history_core::HistoryType` (§2 of
/// SPEC_FULL.md): shallow history remembers only the immediate active
/// child, deep history remembers the whole active descendant subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Shallow,
    Deep,
}

/// A long-running side effect descriptor (spec glossary: "Activity").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityDescriptor {
    pub id: String,
}

impl ActivityDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A guard predicate over `(context, event)`.
pub type GuardFn<C, Evt> = Arc<dyn Fn(&C, &Trigger<Evt>) -> bool + Send + Sync>;

/// A guard, as authored: either given inline or referred to by name and
/// resolved against the machine's guard map at `Machine::build` time (spec
/// §6 "Guard map"). Unlike unresolved *action* names, an unresolved guard
/// name is a build-time `InvalidMachineDefinition` error — see DESIGN.md;
/// a transition whose enabling condition can silently never be decided
/// is a configuration bug, not a runtime condition to tolerate.
pub enum GuardConfig<C, Evt: EventLike> {
    Inline(GuardFn<C, Evt>),
    Named(String),
}

/// A delay, either a fixed number of milliseconds or an expression
/// evaluated against the context at the moment the `after` entry action
/// runs (spec §3 `after`: "integer or expression over context").
#[derive(Clone)]
pub enum DelaySpec<C> {
    Fixed(u64),
    Expr(Arc<dyn Fn(&C) -> u64 + Send + Sync>),
}

impl<C> DelaySpec<C> {
    pub fn resolve(&self, context: &C) -> u64 {
        match self {
            DelaySpec::Fixed(ms) => *ms,
            DelaySpec::Expr(f) => f(context),
        }
    }
}

impl<C> std::fmt::Debug for DelaySpec<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelaySpec::Fixed(ms) => write!(f, "Fixed({ms})"),
            DelaySpec::Expr(_) => write!(f, "Expr(..)"),
        }
    }
}

/// A transition definition (spec §3 `Transition`), still in the
/// string-target, pre-compile form the host authors.
pub struct TransitionConfig<C, Evt: EventLike> {
    /// Relative (`"sibling"`), descendant (`".child.grand"`), or absolute
    /// (`"#machineId.path.to.state"`) target paths. Empty means an internal
    /// transition with only actions, no configuration change.
    pub target: Vec<String>,
    pub cond: Option<GuardConfig<C, Evt>>,
    pub actions: Vec<ActionConfig<C, Evt>>,
    pub internal: bool,
}

impl<C, Evt: EventLike> TransitionConfig<C, Evt> {
    pub fn new(target: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            target: target.into_iter().map(Into::into).collect(),
            cond: None,
            actions: Vec::new(),
            internal: false,
        }
    }

    pub fn internal_only(actions: Vec<ActionConfig<C, Evt>>) -> Self {
        Self {
            target: Vec::new(),
            cond: None,
            actions,
            internal: true,
        }
    }

    pub fn cond(mut self, guard: GuardFn<C, Evt>) -> Self {
        self.cond = Some(GuardConfig::Inline(guard));
        self
    }

    pub fn cond_named(mut self, name: impl Into<String>) -> Self {
        self.cond = Some(GuardConfig::Named(name.into()));
        self
    }

    pub fn actions(mut self, actions: Vec<ActionConfig<C, Evt>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn mark_internal(mut self) -> Self {
        self.internal = true;
        self
    }
}

/// An `after` entry, compiled at build time into a synthetic `on` entry plus
/// a `send`/`cancel` pair on entry/exit (spec §3 `after`).
pub struct AfterConfig<C, Evt: EventLike> {
    pub delay: DelaySpec<C>,
    pub transition: TransitionConfig<C, Evt>,
}

/// An `invoke` descriptor (spec §3 `invoke`, §4.E).
pub struct InvokeConfig<C, Evt: EventLike> {
    pub id: String,
    pub src: Arc<crate::machine::Machine<C, Evt>>,
    /// Evaluated against the parent's context to seed the child's context.
    pub data: Option<Arc<dyn Fn(&C) -> C + Send + Sync>>,
    pub auto_forward: bool,
    /// Sugar for a transition registered on this node under
    /// `done.invoke.<id>`; compiled into `on` at build time.
    pub on_done: Vec<TransitionConfig<C, Evt>>,
}

/// The plain, mutable description of one state node, as authored by a host
/// (or generated by a DSL parser, out of scope here per spec §1).
pub struct NodeConfig<C, Evt: EventLike> {
    pub key: String,
    pub kind: NodeKind,
    /// Required for `Compound` nodes: the key of the initial child.
    pub initial: Option<String>,
    pub states: Vec<NodeConfig<C, Evt>>,
    pub on: Vec<(String, Vec<TransitionConfig<C, Evt>>)>,
    pub on_entry: Vec<ActionConfig<C, Evt>>,
    pub on_exit: Vec<ActionConfig<C, Evt>>,
    pub activities: Vec<ActivityDescriptor>,
    pub after: Vec<AfterConfig<C, Evt>>,
    pub invoke: Option<InvokeConfig<C, Evt>>,
    /// Set when `kind` is `History(..)`: which sibling/compound key the
    /// history pseudostate shadows. Defaults to the parent when absent.
    pub history_target: Option<String>,
}

impl<C, Evt: EventLike> NodeConfig<C, Evt> {
    pub fn new(key: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            key: key.into(),
            kind,
            initial: None,
            states: Vec::new(),
            on: Vec::new(),
            on_entry: Vec::new(),
            on_exit: Vec::new(),
            activities: Vec::new(),
            after: Vec::new(),
            invoke: None,
            history_target: None,
        }
    }

    pub fn atomic(key: impl Into<String>) -> Self {
        Self::new(key, NodeKind::Atomic)
    }

    pub fn compound(key: impl Into<String>, initial: impl Into<String>) -> Self {
        let mut n = Self::new(key, NodeKind::Compound);
        n.initial = Some(initial.into());
        n
    }

    pub fn parallel(key: impl Into<String>) -> Self {
        Self::new(key, NodeKind::Parallel)
    }

    pub fn r#final(key: impl Into<String>) -> Self {
        Self::new(key, NodeKind::Final)
    }

    pub fn history(key: impl Into<String>, kind: HistoryKind) -> Self {
        Self::new(key, NodeKind::History(kind))
    }

    pub fn state(mut self, child: NodeConfig<C, Evt>) -> Self {
        self.states.push(child);
        self
    }

    pub fn on(mut self, event_type: impl Into<String>, transitions: Vec<TransitionConfig<C, Evt>>) -> Self {
        self.on.push((event_type.into(), transitions));
        self
    }

    pub fn on_entry_actions(mut self, actions: Vec<ActionConfig<C, Evt>>) -> Self {
        self.on_entry = actions;
        self
    }

    pub fn on_exit_actions(mut self, actions: Vec<ActionConfig<C, Evt>>) -> Self {
        self.on_exit = actions;
        self
    }

    pub fn after(mut self, delay: DelaySpec<C>, transition: TransitionConfig<C, Evt>) -> Self {
        self.after.push(AfterConfig { delay, transition });
        self
    }

    pub fn invoke(mut self, invoke: InvokeConfig<C, Evt>) -> Self {
        self.invoke = Some(invoke);
        self
    }

    pub fn activity(mut self, descriptor: ActivityDescriptor) -> Self {
        self.activities.push(descriptor);
        self
    }
}

/// Compiled transition: targets already resolved to arena indices.
pub(crate) struct Transition<C, Evt: EventLike> {
    pub targets: Vec<NodeId>,
    pub cond: Option<GuardFn<C, Evt>>,
    pub actions: Vec<crate::action::Action<C, Evt>>,
    pub internal: bool,
}

/// Compiled, immutable state node. Lives in `Machine::nodes[..]`, never
/// mutated after construction (spec §3 Lifecycle).
pub(crate) struct StateNode<C, Evt: EventLike> {
    pub id: String,
    pub key: String,
    pub path: Vec<String>,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub initial: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub children_by_key: HashMap<String, NodeId>,
    pub on: HashMap<String, Vec<Transition<C, Evt>>>,
    pub on_entry: Vec<crate::action::Action<C, Evt>>,
    pub on_exit: Vec<crate::action::Action<C, Evt>>,
    pub activities: Vec<ActivityDescriptor>,
    pub invoke: Option<crate::invoke::Invoke<C, Evt>>,
    /// Non-`None` only for `History` nodes: the sibling/ancestor node id the
    /// history pseudostate restores into.
    pub history_of: Option<NodeId>,
}

impl<C, Evt: EventLike> StateNode<C, Evt> {
    pub fn is_leaf_kind(&self) -> bool {
        matches!(self.kind, NodeKind::Atomic | NodeKind::Final)
    }

    pub fn is_compound(&self) -> bool {
        matches!(self.kind, NodeKind::Compound)
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self.kind, NodeKind::Parallel)
    }

    pub fn is_history(&self) -> Option<HistoryKind> {
        match self.kind {
            NodeKind::History(k) => Some(k),
            _ => None,
        }
    }
}
