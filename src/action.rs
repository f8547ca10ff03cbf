//! Action model (spec §4.B): a tagged representation of the nine built-in
//! action kinds, resolved from names or inline closures at `Machine::build`
//! time rather than looked up per step — the design note in spec §9 calls
//! this out explicitly ("resolve name references at machine construction,
//! once, into variants").
//!
//! Grounded on the teacher's `Action` trait (`machine/core_actions.rs`,
//! `execute(&self, context: &mut C, event: &E)`), generalized here into a
//! closed enum so the interpreter can match on kind without a trait object
//! per action and so `assign` can be pulled out and applied eagerly
//! (spec invariant 3) instead of being just another executable action.
//!
//! `Raise`/`Send` produce a [`Trigger<Evt>`] rather than a bare `Evt`: this
//! is what lets the `after` compiler (`Machine::build`) desugar into the
//! same `send`/`cancel` machinery a host action uses (spec §3 `after`:
//! "compiled into entry actions that `send` and exit actions that
//! `cancel`"), since a delay fires `Trigger::AfterDelay`, not a host event.

use std::sync::Arc;

use crate::event::{EventLike, Trigger};
use crate::node::ActivityDescriptor;

/// `(context, event) -> unit` executor for a resolved custom action.
pub type ActionFn<C, Evt> = Arc<dyn Fn(&C, &Trigger<Evt>) + Send + Sync>;
/// `(context, event) -> context` used by `assign`.
pub type AssignFn<C, Evt> = Arc<dyn Fn(&C, &Trigger<Evt>) -> C + Send + Sync>;
/// `(context, event) -> String` used by `log`.
pub type LogFn<C, Evt> = Arc<dyn Fn(&C, &Trigger<Evt>) -> String + Send + Sync>;
/// `(context, event) -> Vec<ActionConfig>` used by `pure`.
pub type PureFn<C, Evt> = Arc<dyn Fn(&C, &Trigger<Evt>) -> Vec<ActionConfig<C, Evt>> + Send + Sync>;
/// `(context, event) -> Trigger<Evt>`, what `raise`/`send` actually enqueue.
pub type TriggerFn<C, Evt> = Arc<dyn Fn(&C, &Trigger<Evt>) -> Trigger<Evt> + Send + Sync>;

/// A `send`'s delay/id metadata, evaluated against context when the action
/// runs (spec §4.B `send`, `with delay, schedule via Clock`).
#[derive(Clone)]
pub struct SendSpec<C, Evt: EventLike> {
    pub event: TriggerFn<C, Evt>,
    pub delay_ms: Option<Arc<dyn Fn(&C) -> u64 + Send + Sync>>,
    pub id: Option<String>,
}

/// Action as authored by the host, before name resolution against the
/// machine's action map (spec §4.B "Action resolution").
pub enum ActionConfig<C, Evt: EventLike> {
    Assign(AssignFn<C, Evt>),
    /// Raises a host event onto the internal queue.
    Raise(Arc<dyn Fn(&C, &Trigger<Evt>) -> Evt + Send + Sync>),
    /// Enqueues a host event onto the external queue, optionally delayed.
    Send(SendSpec<C, Evt>),
    Cancel(String),
    Log(LogFn<C, Evt>),
    Start(ActivityDescriptor),
    Stop(ActivityDescriptor),
    /// Start the node's own `invoke` child. Implicit — hosts don't author
    /// this directly; `Machine::build` appends it to the owning node's
    /// `on_entry` when the node has an `invoke` descriptor.
    StartInvoke,
    /// Inline executor, given directly rather than resolved by name.
    Inline(String, ActionFn<C, Evt>),
    /// A bare name, resolved against the machine's `actions` option map at
    /// build time. Unresolved names are not fatal (spec §7): they compile
    /// into `Action::Custom` with `executor: None`.
    Named(String),
    Pure(PureFn<C, Evt>),
    /// Sends an event to the invoking parent interpreter, evaluated against
    /// this node's own `(context, event)` (spec §4.E `sendParent`). A no-op
    /// when run by an interpreter that isn't itself an invoked child.
    SendParent(Arc<dyn Fn(&C, &Trigger<Evt>) -> Evt + Send + Sync>),
}

/// Compiled action: `Named`/`Inline` have been resolved into `Custom`, and
/// `Raise`/`Send` now produce a `Trigger<Evt>` uniformly.
pub(crate) enum Action<C, Evt: EventLike> {
    Assign(AssignFn<C, Evt>),
    Raise(TriggerFn<C, Evt>),
    Send(SendSpec<C, Evt>),
    Cancel(String),
    Log(LogFn<C, Evt>),
    Start(ActivityDescriptor),
    Stop(ActivityDescriptor),
    StartInvoke,
    Custom {
        name: String,
        executor: Option<ActionFn<C, Evt>>,
    },
    Pure(PureFn<C, Evt>),
    SendParent(Arc<dyn Fn(&C, &Trigger<Evt>) -> Evt + Send + Sync>),
}

impl<C, Evt: EventLike> Clone for Action<C, Evt> {
    fn clone(&self) -> Self {
        match self {
            Action::Assign(f) => Action::Assign(f.clone()),
            Action::Raise(f) => Action::Raise(f.clone()),
            Action::Send(s) => Action::Send(s.clone()),
            Action::Cancel(id) => Action::Cancel(id.clone()),
            Action::Log(f) => Action::Log(f.clone()),
            Action::Start(d) => Action::Start(d.clone()),
            Action::Stop(d) => Action::Stop(d.clone()),
            Action::StartInvoke => Action::StartInvoke,
            Action::Custom { name, executor } => Action::Custom {
                name: name.clone(),
                executor: executor.clone(),
            },
            Action::Pure(f) => Action::Pure(f.clone()),
            Action::SendParent(f) => Action::SendParent(f.clone()),
        }
    }
}

/// What `State.actions` (spec §3) actually carries: assigns have already
/// been applied and stripped out (spec §4.C step 7), with every closure
/// evaluated against `(context, event)` at the moment the transition ran —
/// `Log`'s message is already a `String`, `Raise`/`Send`'s event already a
/// concrete `Trigger<Evt>` — so hosts can assert on `state.actions` as
/// plain data without re-running anything, and the interpreter can replay
/// `Custom`'s still-live executor later (spec §4.D `execute(state)`).
#[derive(Clone)]
pub enum ActionRecord<C, Evt: EventLike> {
    Raise(Trigger<Evt>),
    Send {
        event: Trigger<Evt>,
        delay_ms: Option<u64>,
        id: Option<String>,
    },
    Cancel(String),
    Log(String),
    StartActivity(String),
    StopActivity(String),
    StartInvoke,
    /// Surfaced even when `executor` was never resolved (spec §7,
    /// `UnknownActionImplementation` is not fatal), so tests can assert on
    /// `resolved` without needing the executor itself.
    Custom {
        name: String,
        executor: Option<ActionFn<C, Evt>>,
        resolved: bool,
    },
    /// A `pure` action already expanded into its own records.
    Expanded(Vec<ActionRecord<C, Evt>>),
    /// An event to deliver to the invoking parent interpreter, already
    /// evaluated against `(context, event)` (spec §4.E `sendParent`).
    SendParent(Evt),
}

impl<C, Evt: EventLike + std::fmt::Debug> std::fmt::Debug for ActionRecord<C, Evt> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionRecord::Raise(t) => f.debug_tuple("Raise").field(t).finish(),
            ActionRecord::Send { event, delay_ms, id } => f
                .debug_struct("Send")
                .field("event", event)
                .field("delay_ms", delay_ms)
                .field("id", id)
                .finish(),
            ActionRecord::Cancel(id) => f.debug_tuple("Cancel").field(id).finish(),
            ActionRecord::Log(msg) => f.debug_tuple("Log").field(msg).finish(),
            ActionRecord::StartActivity(id) => f.debug_tuple("StartActivity").field(id).finish(),
            ActionRecord::StopActivity(id) => f.debug_tuple("StopActivity").field(id).finish(),
            ActionRecord::StartInvoke => write!(f, "StartInvoke"),
            ActionRecord::Custom { name, resolved, .. } => f
                .debug_struct("Custom")
                .field("name", name)
                .field("resolved", resolved)
                .finish(),
            ActionRecord::Expanded(records) => f.debug_tuple("Expanded").field(records).finish(),
            ActionRecord::SendParent(e) => f.debug_tuple("SendParent").field(e).finish(),
        }
    }
}
