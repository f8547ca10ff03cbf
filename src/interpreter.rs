//! The interpreter (spec §4.D, component D): a stateful, run-to-completion
//! driver over a pure [`Machine`]. Owns the current `State`, the internal
//! and external event queues, the delayed-timer table, activity disposers,
//! and invoked children.
//!
//! Grounded on spec §5 "Concurrency & resource model": single-threaded
//! cooperative, confined to one lock. `Interpreter` keeps all of that
//! mutable bookkeeping behind a single `Mutex<Inner<..>>` — the "guard the
//! interpreter instance with a single lock" guidance, generalized from the
//! teacher's own pattern of confining reactive-store mutation to one
//! collaborator.
//!
//! The lock is held only for short, callback-free critical sections: every
//! public method that might end up calling back into user code (a
//! `Logger`, an `onTransition`/`onDone` listener, an activity factory, a
//! resolved custom action executor, or — via `sendParent`/`autoForward` —
//! another `Interpreter`'s own `send`) copies out what it needs, drops the
//! guard, then runs the callback. `std::sync::Mutex` is not reentrant, and
//! spec §5/§4.D explicitly requires re-entrant `send` (an observer calling
//! `send` from inside its own notification) and parent/child event flow
//! (§4.E) to work without deadlocking the calling thread.
//!
//! Lifecycle transitions (`start`/`step`/`stop`, activity start/stop, invoke
//! spawn/dispose) go through the `log` facade at `debug`/`trace`, separate
//! from the `Logger` collaborator (§6), which only ever carries a `log`
//! action's own message; an unresolved custom action is reported to both,
//! since it's swallowed rather than propagated as an error.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, Weak};

use crate::action::ActionRecord;
use crate::clock::{Clock, SystemClock, TimerHandle};
use crate::error::{StatechartError, StatechartResult};
use crate::event::{EventLike, Trigger};
use crate::logger::{default_logger, Logger};
use crate::machine::Machine;
use crate::node::{ActivityDescriptor, NodeId, NodeKind};
use crate::state::State;
use crate::value::StateTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    Running,
    Stopped,
}

type Disposer = Box<dyn FnOnce() + Send>;
type TransitionListener<C, Evt> = Arc<dyn Fn(&State<C, Evt>, &Trigger<Evt>) + Send + Sync>;
type DoneListener<C, Evt> = Arc<dyn Fn(&State<C, Evt>) + Send + Sync>;
type ActivityFactory<C> = Arc<dyn Fn(&C, &ActivityDescriptor) -> Disposer + Send + Sync>;

/// Construction-time collaborators beyond the machine itself (spec §6).
pub struct InterpreterOptions<C, Evt: EventLike> {
    pub execute: bool,
    pub logger: Arc<dyn Logger>,
    pub activity_factory: Option<ActivityFactory<C>>,
    pub id: Option<String>,
    _marker: std::marker::PhantomData<Evt>,
}

impl<C, Evt: EventLike> Default for InterpreterOptions<C, Evt> {
    fn default() -> Self {
        Self {
            execute: true,
            logger: default_logger(),
            activity_factory: None,
            id: None,
            _marker: std::marker::PhantomData,
        }
    }
}

struct ChildHandle<C, Evt, Clk>
where
    C: Clone + Send + Sync + 'static,
    Evt: EventLike + Send + Sync + 'static,
    Clk: Clock,
{
    interpreter: Arc<Interpreter<C, Evt, Clk>>,
    auto_forward: bool,
}

struct Inner<C, Evt, Clk>
where
    C: Clone + Send + Sync + 'static,
    Evt: EventLike + Send + Sync + 'static,
    Clk: Clock,
{
    status: Status,
    state: Option<State<C, Evt>>,
    internal: VecDeque<Trigger<Evt>>,
    external: VecDeque<Trigger<Evt>>,
    processing: bool,
    timers: HashMap<String, TimerHandle>,
    activity_disposers: HashMap<String, Disposer>,
    transition_listeners: Vec<TransitionListener<C, Evt>>,
    done_listeners: Vec<DoneListener<C, Evt>>,
    children: HashMap<NodeId, ChildHandle<C, Evt, Clk>>,
    self_ref: Weak<Interpreter<C, Evt, Clk>>,
    parent_sender: Option<Arc<dyn Fn(Evt) + Send + Sync>>,
    /// Set only on an invoked child: delivers `done.invoke.<id>` straight
    /// onto the parent's internal queue when this child completes (spec
    /// §4.E), bypassing `Evt`/host-event translation entirely since it's
    /// an interpreter-internal trigger, not a host-authored event.
    done_sender: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// A stateful, run-to-completion driver over a [`Machine`] (spec §4.D).
pub struct Interpreter<C, Evt, Clk = SystemClock>
where
    C: Clone + Send + Sync + 'static,
    Evt: EventLike + Send + Sync + 'static,
    Clk: Clock,
{
    pub machine: Arc<Machine<C, Evt>>,
    clock: Arc<Clk>,
    id: String,
    options_execute: bool,
    logger: Arc<dyn Logger>,
    activity_factory: Option<ActivityFactory<C>>,
    activity_descriptors: HashMap<String, ActivityDescriptor>,
    inner: Mutex<Inner<C, Evt, Clk>>,
}

impl<C, Evt, Clk> Interpreter<C, Evt, Clk>
where
    C: Clone + Send + Sync + 'static,
    Evt: EventLike + Send + Sync + 'static,
    Clk: Clock + 'static,
{
    pub fn new(
        machine: Arc<Machine<C, Evt>>,
        clock: Arc<Clk>,
        options: InterpreterOptions<C, Evt>,
    ) -> Arc<Self> {
        let id = options.id.clone().unwrap_or_else(|| machine.id.clone());
        let mut descriptors = HashMap::new();
        for node in &machine.nodes {
            for a in &node.activities {
                descriptors.insert(a.id.clone(), a.clone());
            }
        }
        let interp = Arc::new(Self {
            machine,
            clock,
            id,
            options_execute: options.execute,
            logger: options.logger,
            activity_factory: options.activity_factory,
            activity_descriptors: descriptors,
            inner: Mutex::new(Inner {
                status: Status::NotStarted,
                state: None,
                internal: VecDeque::new(),
                external: VecDeque::new(),
                processing: false,
                timers: HashMap::new(),
                activity_disposers: HashMap::new(),
                transition_listeners: Vec::new(),
                done_listeners: Vec::new(),
                children: HashMap::new(),
                self_ref: Weak::new(),
                parent_sender: None,
                done_sender: None,
            }),
        });
        interp.inner.lock().unwrap().self_ref = Arc::downgrade(&interp);
        interp
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn clock(&self) -> &Arc<Clk> {
        &self.clock
    }

    pub fn status(&self) -> Status {
        self.inner.lock().unwrap().status
    }

    pub fn state(&self) -> State<C, Evt> {
        self.inner
            .lock()
            .unwrap()
            .state
            .clone()
            .expect("interpreter must be started before `state()` is read")
    }

    pub fn on_transition(
        &self,
        listener: impl Fn(&State<C, Evt>, &Trigger<Evt>) + Send + Sync + 'static,
    ) {
        self.inner
            .lock()
            .unwrap()
            .transition_listeners
            .push(Arc::new(listener));
    }

    pub fn on_done(&self, listener: impl Fn(&State<C, Evt>) + Send + Sync + 'static) {
        self.inner.lock().unwrap().done_listeners.push(Arc::new(listener));
    }

    /// A read-only preview: computes the transition without mutating
    /// queues, timers, or activities (spec §4.D `nextState`, testable
    /// property 4).
    pub fn next_state(&self, event: Evt) -> State<C, Evt> {
        let inner = self.inner.lock().unwrap();
        let current = inner
            .state
            .as_ref()
            .expect("interpreter must be started before `next_state`");
        self.machine.transition(current, Trigger::External(event))
    }

    /// Idempotent: a second `start()` is a no-op (spec §6).
    pub fn start(self: &Arc<Self>, context: C) -> Arc<Self> {
        {
            let inner = self.inner.lock().unwrap();
            if inner.status != Status::NotStarted {
                return self.clone();
            }
        }
        let initial = self.machine.initial_state(context);
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.status != Status::NotStarted {
                return self.clone();
            }
            inner.status = Status::Running;
            inner.state = Some(initial.clone());
            // Set before any side effect/listener runs below: a reentrant
            // `send`/`sendParent` triggered from an initial entry action or
            // an `onTransition` listener must enqueue and return rather than
            // kick off a nested `drain`.
            inner.processing = true;
        }
        log::debug!("interpreter {} starting", self.id);
        let previous_tree = StateTree::new();
        if self.options_execute {
            self.run_side_effects(&previous_tree, &initial);
        }
        self.notify_transition(&initial, &Trigger::Init);
        self.check_done(&initial);
        self.drain();
        self.inner.lock().unwrap().processing = false;
        self.clone()
    }

    pub fn stop(self: &Arc<Self>) {
        let (timers, disposers, children) = {
            let mut inner = self.inner.lock().unwrap();
            if inner.status == Status::Stopped {
                return;
            }
            log::debug!("interpreter {} stopping", self.id);
            inner.status = Status::Stopped;
            let timers: Vec<TimerHandle> = inner.timers.drain().map(|(_, h)| h).collect();
            let disposers: Vec<Disposer> = inner.activity_disposers.drain().map(|(_, d)| d).collect();
            let children: Vec<Arc<Self>> = inner.children.drain().map(|(_, c)| c.interpreter).collect();
            (timers, disposers, children)
        };
        for handle in timers {
            self.clock.clear_timeout(handle);
        }
        for disposer in disposers {
            disposer();
        }
        for child in children {
            child.stop();
        }
    }

    /// Appends to the external queue; re-entrant sends (from inside an
    /// action callback) just enqueue and return (spec §4.D, §5).
    pub fn send(self: &Arc<Self>, event: Evt) -> StatechartResult<()> {
        let should_drain = {
            let mut inner = self.inner.lock().unwrap();
            match inner.status {
                Status::NotStarted => return Err(StatechartError::InterpreterNotStarted),
                Status::Stopped => return Ok(()),
                Status::Running => {}
            }
            inner.external.push_back(Trigger::External(event.clone()));
            if inner.processing {
                false
            } else {
                inner.processing = true;
                true
            }
        };
        self.forward_to_children(event);
        if should_drain {
            self.drain();
            self.inner.lock().unwrap().processing = false;
        }
        Ok(())
    }

    /// Every event the parent receives is also forwarded to children whose
    /// `invoke` declared `autoForward: true` (spec §4.E). Collects the
    /// target children under a brief lock, then calls their own `send`
    /// (a distinct interpreter's lock) without holding ours — a child's
    /// reaction may loop back into us via `sendParent`.
    fn forward_to_children(self: &Arc<Self>, event: Evt) {
        let targets: Vec<Arc<Self>> = {
            let inner = self.inner.lock().unwrap();
            inner
                .children
                .values()
                .filter(|c| c.auto_forward)
                .map(|c| c.interpreter.clone())
                .collect()
        };
        for child in targets {
            let _ = child.send(event.clone());
        }
    }

    /// Runs the action side effects for a state that was computed with
    /// `execute: false` (spec §4.D "callers invoke `execute(state)`
    /// manually"). Diffs against whatever the interpreter currently
    /// believes is active, then adopts `state` as current.
    pub fn execute(self: &Arc<Self>, state: &State<C, Evt>) {
        let previous_tree = {
            let inner = self.inner.lock().unwrap();
            inner.state.as_ref().map(|s| s.tree.clone()).unwrap_or_default()
        };
        self.run_side_effects(&previous_tree, state);
        self.inner.lock().unwrap().state = Some(state.clone());
    }

    /// Sends `e` to the parent interpreter, if this interpreter is an
    /// invoked child (spec §4.E `sendParent`).
    pub fn send_parent(&self, e: Evt) {
        let sender = self.inner.lock().unwrap().parent_sender.clone();
        if let Some(sender) = sender {
            sender(e);
        }
    }

    /// Pushes an interpreter-internal trigger (e.g. `done.invoke.<id>`)
    /// straight onto this interpreter's own queue, draining immediately if
    /// nothing else is already in progress.
    fn deliver_internal(self: &Arc<Self>, trigger: Trigger<Evt>) {
        let should_drain = {
            let mut inner = self.inner.lock().unwrap();
            if inner.status != Status::Running {
                return;
            }
            inner.internal.push_back(trigger);
            if inner.processing {
                false
            } else {
                inner.processing = true;
                true
            }
        };
        if should_drain {
            self.drain();
            self.inner.lock().unwrap().processing = false;
        }
    }

    /// The run-to-completion loop (spec §4.D): internal queue drains fully
    /// before any external event is taken. Each iteration locks only long
    /// enough to pop the next trigger; `step` itself runs with no lock held.
    fn drain(self: &Arc<Self>) {
        loop {
            let trigger = {
                let mut inner = self.inner.lock().unwrap();
                if inner.status == Status::Stopped {
                    return;
                }
                inner.internal.pop_front().or_else(|| inner.external.pop_front())
            };
            match trigger {
                Some(t) => {
                    self.step(t);
                    if self.status() == Status::Stopped {
                        return;
                    }
                }
                None => break,
            }
        }
    }

    fn step(self: &Arc<Self>, trigger: Trigger<Evt>) {
        let current = {
            let inner = self.inner.lock().unwrap();
            inner.state.clone().expect("step before start")
        };
        log::trace!("interpreter {} step: {}", self.id, trigger.event_type());
        let next = self.machine.transition(&current, trigger.clone());
        let is_transient = matches!(trigger, Trigger::Transient);
        if is_transient && !next.changed {
            // Settled: no eventless transition was enabled. Nothing changed,
            // so there is nothing to notify or re-drain for.
            return;
        }
        {
            let mut inner = self.inner.lock().unwrap();
            inner.state = Some(next.clone());
        }
        if self.options_execute {
            self.run_side_effects(&current.tree, &next);
        }
        self.notify_transition(&next, &trigger);
        self.check_done(&next);
        // Re-attempt transient (eventless) transitions after every step that
        // actually changed something, per spec §4.D/§4.C "attempted whenever
        // the interpreter settles, until none are enabled" — this covers
        // cascades of several eventless transitions in a row, not just one.
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.status == Status::Running {
                inner.internal.push_front(Trigger::Transient);
            }
        }
    }

    fn notify_transition(&self, state: &State<C, Evt>, trigger: &Trigger<Evt>) {
        let listeners = { self.inner.lock().unwrap().transition_listeners.clone() };
        for listener in &listeners {
            listener(state, trigger);
        }
    }

    fn check_done(self: &Arc<Self>, state: &State<C, Evt>) {
        // done.state.<id>: a compound node's active child just became Final.
        let mut done_state_ids = Vec::new();
        for n in state.tree.iter() {
            let node = self.machine.node(n);
            if !node.is_compound() {
                continue;
            }
            if let Some(&child) = node.children.iter().find(|&&c| state.tree.contains(c)) {
                if self.machine.node(child).kind == NodeKind::Final {
                    done_state_ids.push(node.id.clone());
                }
            }
        }
        if !done_state_ids.is_empty() {
            let mut inner = self.inner.lock().unwrap();
            for id in done_state_ids {
                inner.internal.push_back(Trigger::DoneState { id });
            }
        }

        if self.is_top_level_done(state) {
            let listeners = { self.inner.lock().unwrap().done_listeners.clone() };
            for listener in &listeners {
                listener(state);
            }

            let (timers, disposers, children, done_sender) = {
                let mut inner = self.inner.lock().unwrap();
                inner.status = Status::Stopped;
                let timers: Vec<TimerHandle> = inner.timers.drain().map(|(_, h)| h).collect();
                let disposers: Vec<Disposer> =
                    inner.activity_disposers.drain().map(|(_, d)| d).collect();
                let children: Vec<Arc<Self>> =
                    inner.children.drain().map(|(_, c)| c.interpreter).collect();
                let done_sender = inner.done_sender.clone();
                (timers, disposers, children, done_sender)
            };
            for handle in timers {
                self.clock.clear_timeout(handle);
            }
            for disposer in disposers {
                disposer();
            }
            for child in children {
                child.stop();
            }
            if let Some(done_sender) = done_sender {
                done_sender();
            }
        }
    }

    fn is_top_level_done(&self, state: &State<C, Evt>) -> bool {
        state.is_done(&self.machine)
    }

    /// Applies every non-`assign` action record in `next.actions` (assigns
    /// were already folded into `next.context` by `Machine::transition`),
    /// and starts/stops activities and invoked children to match
    /// `next.tree` against `previous_tree` (spec §4.D step pseudocode).
    fn run_side_effects(self: &Arc<Self>, previous_tree: &StateTree, next: &State<C, Evt>) {
        let records = next.actions.clone();
        for record in &records {
            self.apply_record(record, next);
        }
        self.sync_activities(next);
        self.sync_invokes(previous_tree, next);
    }

    fn apply_record(self: &Arc<Self>, record: &ActionRecord<C, Evt>, state: &State<C, Evt>) {
        match record {
            ActionRecord::Raise(trigger) => {
                let mut inner = self.inner.lock().unwrap();
                inner.internal.push_back(trigger.clone());
            }
            ActionRecord::Send { event, delay_ms, id } => match delay_ms {
                None => {
                    let mut inner = self.inner.lock().unwrap();
                    inner.external.push_back(event.clone());
                }
                Some(ms) => {
                    let timer_id = id.clone().unwrap_or_else(|| event.event_type().into_owned());
                    let self_weak = self.inner.lock().unwrap().self_ref.clone();
                    let event = event.clone();
                    let handle = self.clock.set_timeout(
                        Box::new(move || {
                            if let Some(me) = self_weak.upgrade() {
                                let should_drain = {
                                    let mut inner = me.inner.lock().unwrap();
                                    if inner.status != Status::Running {
                                        return;
                                    }
                                    inner.external.push_back(event);
                                    if inner.processing {
                                        false
                                    } else {
                                        inner.processing = true;
                                        true
                                    }
                                };
                                if should_drain {
                                    me.drain();
                                    me.inner.lock().unwrap().processing = false;
                                }
                            }
                        }),
                        *ms,
                    );
                    self.inner.lock().unwrap().timers.insert(timer_id, handle);
                }
            },
            ActionRecord::Cancel(id) => {
                let handle = self.inner.lock().unwrap().timers.remove(id);
                if let Some(handle) = handle {
                    self.clock.clear_timeout(handle);
                }
            }
            ActionRecord::Log(msg) => self.logger.log(msg),
            ActionRecord::StartActivity(_) | ActionRecord::StopActivity(_) => {
                // driven by `sync_activities` diffing `state.activities` instead.
            }
            ActionRecord::StartInvoke => {
                // driven by `sync_invokes` diffing the tree instead.
            }
            ActionRecord::Custom { name, executor, resolved } => {
                if let Some(exec) = executor {
                    exec(&state.context, &state.event);
                } else if !resolved {
                    log::warn!("interpreter {}: unresolved action implementation: {name}", self.id);
                    self.logger
                        .log(&format!("unresolved action implementation: {name}"));
                }
            }
            ActionRecord::Expanded(records) => {
                for r in records {
                    self.apply_record(r, state);
                }
            }
            ActionRecord::SendParent(event) => {
                self.send_parent(event.clone());
            }
        }
    }

    fn sync_activities(self: &Arc<Self>, next: &State<C, Evt>) {
        let Some(factory) = self.activity_factory.clone() else {
            return;
        };
        let (to_start, to_stop): (Vec<String>, Vec<String>) = {
            let inner = self.inner.lock().unwrap();
            let running: HashSet<String> = inner.activity_disposers.keys().cloned().collect();
            let should_run: HashSet<String> = next
                .activities
                .iter()
                .filter(|(_, &v)| v)
                .map(|(k, _)| k.clone())
                .collect();
            (
                should_run.difference(&running).cloned().collect(),
                running.difference(&should_run).cloned().collect(),
            )
        };
        for id in to_start {
            if let Some(descriptor) = self.activity_descriptors.get(&id) {
                log::debug!("interpreter {}: starting activity {id}", self.id);
                let disposer = factory(&next.context, descriptor);
                self.inner.lock().unwrap().activity_disposers.insert(id, disposer);
            }
        }
        for id in to_stop {
            let disposer = self.inner.lock().unwrap().activity_disposers.remove(&id);
            if let Some(disposer) = disposer {
                log::debug!("interpreter {}: stopping activity {id}", self.id);
                disposer();
            }
        }
    }

    fn sync_invokes(self: &Arc<Self>, previous_tree: &StateTree, next: &State<C, Evt>) {
        let exited_children: Vec<Arc<Self>> = {
            let mut inner = self.inner.lock().unwrap();
            let exited: Vec<NodeId> = previous_tree
                .iter()
                .filter(|n| !next.tree.contains(*n))
                .collect();
            exited
                .into_iter()
                .filter_map(|n| inner.children.remove(&n).map(|c| c.interpreter))
                .collect()
        };
        for child in exited_children {
            log::debug!("interpreter {}: disposing invoked child {}", self.id, child.id());
            child.stop();
        }

        let entered: Vec<NodeId> = next
            .tree
            .iter()
            .filter(|n| !previous_tree.contains(*n))
            .collect();
        for n in entered {
            let node = self.machine.node(n);
            let Some(invoke) = &node.invoke else { continue };
            let child_context = match &invoke.data {
                Some(f) => f(&next.context),
                None => next.context.clone(),
            };
            log::debug!("interpreter {}: spawning invoked child {}", self.id, invoke.id);
            let mut opts = InterpreterOptions::default();
            opts.id = Some(invoke.id.clone());
            let child = Interpreter::new(invoke.src.clone(), self.clock.clone(), opts);
            let parent_weak = self.inner.lock().unwrap().self_ref.clone();
            let invoke_id = invoke.id.clone();
            {
                let mut child_inner = child.inner.lock().unwrap();
                let sender_weak = parent_weak.clone();
                child_inner.parent_sender = Some(Arc::new(move |e: Evt| {
                    if let Some(parent) = sender_weak.upgrade() {
                        let _ = parent.send(e);
                    }
                }));
                child_inner.done_sender = Some(Arc::new(move || {
                    if let Some(parent) = parent_weak.upgrade() {
                        parent.deliver_internal(Trigger::DoneInvoke {
                            id: invoke_id.clone(),
                            data: None,
                        });
                    }
                }));
            }
            // Spawned and started without holding our own lock: the child's
            // entry actions may call `sendParent`, which calls back into
            // `self.send` (spec §4.E, scenario S5).
            child.start(child_context);
            let mut inner = self.inner.lock().unwrap();
            inner.children.insert(
                n,
                ChildHandle {
                    interpreter: child,
                    auto_forward: invoke.auto_forward,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionConfig;
    use crate::clock::SimulatedClock;
    use crate::event::StringEvent;
    use crate::machine::MachineOptions;
    use crate::node::{DelaySpec, InvokeConfig, NodeConfig, TransitionConfig};
    use std::sync::atomic::{AtomicI32, Ordering};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Ctx {
        count: i32,
        password: String,
    }

    #[test]
    fn delayed_after_fires_on_simulated_clock_increment() {
        let root = NodeConfig::compound("light", "green")
            .state(NodeConfig::atomic("green").after(
                DelaySpec::Fixed(1000),
                TransitionConfig::new(["yellow"]),
            ))
            .state(NodeConfig::atomic("yellow"));
        let machine = Arc::new(Machine::build("light", root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> =
            Interpreter::new(machine, clock.clone(), InterpreterOptions::default());
        interp.start(Ctx::default());
        assert!(interp.state().matches("green"));

        clock.increment(999);
        assert!(interp.state().matches("green"), "timer must not fire early");

        clock.increment(1);
        assert!(interp.state().matches("yellow"));
    }

    #[test]
    fn exiting_before_the_delay_cancels_the_timer() {
        let root = NodeConfig::compound("light", "green")
            .state(
                NodeConfig::atomic("green")
                    .after(DelaySpec::Fixed(1000), TransitionConfig::new(["yellow"]))
                    .on("SKIP", vec![TransitionConfig::new(["red"])]),
            )
            .state(NodeConfig::atomic("yellow"))
            .state(NodeConfig::atomic("red"));
        let machine = Arc::new(Machine::build("light", root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> =
            Interpreter::new(machine, clock.clone(), InterpreterOptions::default());
        interp.start(Ctx::default());

        interp.send(StringEvent::from("SKIP")).unwrap();
        assert!(interp.state().matches("red"));

        clock.increment(2000);
        assert!(
            interp.state().matches("red"),
            "the green->yellow timer must have been cancelled by exiting green"
        );
    }

    #[test]
    fn assign_and_custom_action_executor_run_on_transition() {
        let seen = Arc::new(AtomicI32::new(0));
        let seen_in_action = seen.clone();
        let root = NodeConfig::compound("m", "a").state(
            NodeConfig::atomic("a").on(
                "INC",
                vec![TransitionConfig::new(["a"])
                    .mark_internal()
                    .actions(vec![
                        ActionConfig::Assign(Arc::new(|c: &Ctx, _e| Ctx {
                            count: c.count + 1,
                            ..c.clone()
                        })),
                        ActionConfig::Inline(
                            "record".into(),
                            Arc::new(move |c: &Ctx, _e| {
                                seen_in_action.store(c.count, Ordering::SeqCst);
                            }),
                        ),
                    ])],
            ),
        );
        let machine = Arc::new(Machine::build("m", root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> =
            Interpreter::new(machine, clock, InterpreterOptions::default());
        interp.start(Ctx::default());

        interp.send(StringEvent::from("INC")).unwrap();
        assert_eq!(interp.state().context.count, 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1, "the custom action's own executor must actually run");
    }

    #[test]
    fn execute_false_defers_side_effects_until_replayed() {
        let fired = Arc::new(AtomicI32::new(0));
        let fired_in_action = fired.clone();
        let root = NodeConfig::compound("m", "a")
            .state(NodeConfig::atomic("a").on("GO", vec![TransitionConfig::new(["b"])]))
            .state(NodeConfig::atomic("b").on_entry_actions(vec![ActionConfig::Inline(
                "on_enter_b".into(),
                Arc::new(move |_c: &Ctx, _e| {
                    fired_in_action.fetch_add(1, Ordering::SeqCst);
                }),
            )]));
        let machine = Arc::new(Machine::build("m", root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let mut opts = InterpreterOptions::default();
        opts.execute = false;
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> =
            Interpreter::new(machine, clock, opts);
        interp.start(Ctx::default());

        let preview = interp.next_state(StringEvent::from("GO"));
        assert!(preview.matches("b"));
        assert_eq!(fired.load(Ordering::SeqCst), 0, "execute:false must not auto-run actions");

        interp.execute(&preview);
        assert_eq!(fired.load(Ordering::SeqCst), 1, "a manual execute() replay must run the deferred actions");
    }

    #[test]
    fn invoked_child_done_notifies_parent() {
        let child_root = NodeConfig::compound("child", "running")
            .state(NodeConfig::atomic("running").on("FINISH", vec![TransitionConfig::new(["done"])]))
            .state(NodeConfig::r#final("done"));
        let child_machine = Arc::new(Machine::build("child", child_root, MachineOptions::default()).unwrap());

        let parent_root = NodeConfig::compound("parent", "waiting").state(
            NodeConfig::atomic("waiting")
                .invoke(InvokeConfig {
                    id: "worker".into(),
                    src: child_machine,
                    data: None,
                    auto_forward: true,
                    on_done: vec![TransitionConfig::new(["finished"])],
                }),
        ).state(NodeConfig::atomic("finished"));
        let machine = Arc::new(Machine::build("parent", parent_root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> =
            Interpreter::new(machine, clock, InterpreterOptions::default());
        interp.start(Ctx::default());
        assert!(interp.state().matches("waiting"));

        interp.send(StringEvent::from("FINISH")).unwrap();
        assert!(
            interp.state().matches("finished"),
            "autoForward must deliver FINISH to the child, and the child's done must notify the parent"
        );
    }

    /// Spec §8 scenario S5: a child's own entry action calls `sendParent`
    /// synchronously, from inside the parent's own `start()` (the invoking
    /// state is the parent's initial state, so the child is spawned and
    /// started as a side effect of the parent's very first microstep). This
    /// must not deadlock, and the event must reach the parent before
    /// `start()` returns.
    #[test]
    fn child_entry_action_sends_parent_password_synchronously() {
        #[derive(Clone, Debug)]
        enum Ev {
            Next { password: String },
        }
        impl EventLike for Ev {
            fn event_type(&self) -> &str {
                match self {
                    Ev::Next { .. } => "NEXT",
                }
            }
        }

        let child_root = NodeConfig::<Ctx, Ev>::atomic("running").on_entry_actions(vec![
            ActionConfig::SendParent(Arc::new(|c: &Ctx, _e| Ev::Next {
                password: c.password.clone(),
            })),
        ]);
        let child_machine = Arc::new(
            Machine::<Ctx, Ev>::build("child", child_root, MachineOptions::default()).unwrap(),
        );

        let parent_root = NodeConfig::<Ctx, Ev>::compound("parent", "waiting")
            .state(NodeConfig::atomic("waiting").invoke(InvokeConfig {
                id: "worker".into(),
                src: child_machine,
                data: Some(Arc::new(|c: &Ctx| Ctx {
                    password: c.password.clone(),
                    ..Ctx::default()
                })),
                auto_forward: false,
                on_done: vec![],
            }).on(
                "NEXT",
                vec![TransitionConfig::new(["finish"]).cond(Arc::new(|_c: &Ctx, e: &Trigger<Ev>| {
                    matches!(e, Trigger::External(Ev::Next { password }) if password == "foo")
                }))],
            ))
            .state(NodeConfig::atomic("finish"));
        let machine =
            Arc::new(Machine::<Ctx, Ev>::build("parent", parent_root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, Ev, SimulatedClock>> =
            Interpreter::new(machine, clock, InterpreterOptions::default());

        // The child is spawned and started as a side effect of the parent's
        // very own initial microstep, and its on_entry `SendParent` action
        // calls back into `interp.send(..)` before `start()` returns. This
        // must not deadlock, and the event must already have been processed
        // by the time `start()` hands control back.
        interp.start(Ctx {
            count: 0,
            password: "foo".into(),
        });
        assert!(
            interp.state().matches("finish"),
            "sendParent from the child's own on_entry action, fired synchronously during the \
             parent's start(), must reach the parent and drive it to `finish`"
        );
    }

    /// An `onTransition` listener calling `send` back into the same
    /// interpreter must not deadlock (spec §4.D: "Observers must not assume
    /// synchronous completion — they may themselves call `send`").
    #[test]
    fn listener_reentrant_send_does_not_deadlock() {
        let root = NodeConfig::compound("m", "a")
            .state(NodeConfig::atomic("a").on("GO", vec![TransitionConfig::new(["b"])]))
            .state(NodeConfig::atomic("b").on("GO2", vec![TransitionConfig::new(["c"])]))
            .state(NodeConfig::atomic("c"));
        let machine = Arc::new(Machine::build("m", root, MachineOptions::default()).unwrap());
        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> =
            Interpreter::new(machine, clock, InterpreterOptions::default());

        let weak_self: Arc<Mutex<Option<Weak<Interpreter<Ctx, StringEvent, SimulatedClock>>>>> =
            Arc::new(Mutex::new(None));
        let weak_self_clone = weak_self.clone();
        interp.on_transition(move |state, _evt| {
            if state.matches("b") {
                if let Some(weak) = weak_self_clone.lock().unwrap().as_ref() {
                    if let Some(me) = weak.upgrade() {
                        let _ = me.send(StringEvent::from("GO2"));
                    }
                }
            }
        });
        *weak_self.lock().unwrap() = Some(Arc::downgrade(&interp));

        interp.start(Ctx::default());
        interp.send(StringEvent::from("GO")).unwrap();
        assert!(
            interp.state().matches("c"),
            "the reentrant send from the listener must be processed before send() returns"
        );
    }

    /// `log` actions are forwarded verbatim to whatever `Logger` the host
    /// injected (spec §6 collaborator `Logger`), exercised here against a
    /// `mockall`-generated double instead of `TracingLogger` so the test can
    /// assert on the exact message without scraping `tracing`'s subscriber.
    #[test]
    fn log_action_is_forwarded_to_the_injected_logger() {
        let root = NodeConfig::compound("m", "a").state(NodeConfig::atomic("a").on(
            "LOG",
            vec![TransitionConfig::internal_only(vec![ActionConfig::Log(Arc::new(
                |_c: &Ctx, _e| "hello".to_string(),
            ))])],
        ));
        let machine = Arc::new(Machine::build("m", root, MachineOptions::default()).unwrap());

        let mut mock_logger = crate::logger::MockLogger::new();
        mock_logger
            .expect_log()
            .withf(|msg: &str| msg == "hello")
            .times(1)
            .returning(|_| ());

        let clock = Arc::new(SimulatedClock::new());
        let interp: Arc<Interpreter<Ctx, StringEvent, SimulatedClock>> = Interpreter::new(
            machine,
            clock,
            InterpreterOptions {
                logger: Arc::new(mock_logger),
                ..InterpreterOptions::default()
            },
        );
        interp.start(Ctx::default());
        interp.send(StringEvent::from("LOG")).unwrap();
    }

    /// An `after` entry compiles into a `send` with a delay (spec §3
    /// `after`), which must go through `Clock::set_timeout` with the right
    /// millisecond figure — checked here against a `mockall` double on
    /// `Clock` itself rather than `SimulatedClock`'s own bookkeeping, so the
    /// assertion is on what the interpreter *asks of* the clock rather than
    /// on the clock's internal behavior.
    #[test]
    fn after_entry_schedules_through_clock_set_timeout() {
        let root = NodeConfig::compound("light", "green")
            .state(NodeConfig::atomic("green").after(
                DelaySpec::Fixed(500),
                TransitionConfig::new(["yellow"]),
            ))
            .state(NodeConfig::atomic("yellow"));
        let machine = Arc::new(Machine::build("light", root, MachineOptions::default()).unwrap());

        let mut mock_clock = crate::clock::MockClock::new();
        mock_clock.expect_now().times(0..).returning(|| 0);
        mock_clock
            .expect_set_timeout()
            .withf(|_, delay_ms: &u64| *delay_ms == 500)
            .times(1)
            .returning(|_, _| TimerHandle(1));
        mock_clock.expect_clear_timeout().times(0..).returning(|_| ());

        let clock = Arc::new(mock_clock);
        let interp: Arc<Interpreter<Ctx, StringEvent, crate::clock::MockClock>> =
            Interpreter::new(machine, clock, InterpreterOptions::default());
        interp.start(Ctx::default());
        assert!(interp.state().matches("green"), "set_timeout is mocked, so no real timer ever fires");
    }
}
