//! The machine: an immutable tree of compiled [`StateNode`]s plus the pure
//! transition function (spec §4.C, component C — "the hard part").
//!
//! `Machine::build` compiles a host-authored [`NodeConfig`] tree into a flat
//! arena (spec §9 "cyclic state-node graph": children own their subtrees,
//! parents are referenced by index, never by raw pointer). `transition` is
//! then a pure function over `(&Machine, &State, Trigger) -> State` with no
//! interior mutability and no I/O — everything the interpreter needs to
//! actually *do* (schedule timers, run activities, spawn children) is
//! surfaced on `State::actions` for the caller to execute.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::action::{Action, ActionConfig, ActionRecord};
use crate::error::{StatechartError, StatechartResult};
use crate::event::{EventLike, Trigger};
use crate::node::{
    ActivityDescriptor, AfterConfig, GuardFn, HistoryKind, InvokeConfig, NodeConfig, NodeId,
    NodeKind, StateNode, Transition, TransitionConfig,
};
use crate::state::State;
use crate::value::{unknown_key_error, StateTree, StateValue};

/// Construction-time collaborators (spec §6): named guards and named
/// actions, resolved once when the machine is built.
pub struct MachineOptions<C, Evt: EventLike> {
    pub actions: HashMap<String, crate::action::ActionFn<C, Evt>>,
    pub guards: HashMap<String, GuardFn<C, Evt>>,
}

impl<C, Evt: EventLike> Default for MachineOptions<C, Evt> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
            guards: HashMap::new(),
        }
    }
}

/// The compiled, immutable machine definition (spec §3 "StateNode... once
/// the machine is constructed").
pub struct Machine<C, Evt: EventLike> {
    pub id: String,
    pub(crate) nodes: Vec<StateNode<C, Evt>>,
    pub(crate) id_index: HashMap<String, NodeId>,
    pub(crate) root: NodeId,
    /// Kept alive so `pure` actions (only knowable at runtime) can still
    /// resolve `Named` action references against the real action map.
    pub(crate) options: MachineOptions<C, Evt>,
}

/// Intermediate, flattened form used only during `build`.
struct FlatNode<C, Evt: EventLike> {
    key: String,
    path: Vec<String>,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    initial_key: Option<String>,
    on: Vec<(String, Vec<TransitionConfig<C, Evt>>)>,
    on_entry: Vec<ActionConfig<C, Evt>>,
    on_exit: Vec<ActionConfig<C, Evt>>,
    activities: Vec<ActivityDescriptor>,
    after: Vec<AfterConfig<C, Evt>>,
    invoke: Option<InvokeConfig<C, Evt>>,
    history_target: Option<String>,
}

fn flatten<C, Evt: EventLike>(
    config: NodeConfig<C, Evt>,
    parent: Option<NodeId>,
    mut path: Vec<String>,
    out: &mut Vec<FlatNode<C, Evt>>,
) -> NodeId {
    path.push(config.key.clone());
    let id = NodeId(out.len());
    out.push(FlatNode {
        key: config.key,
        path: path.clone(),
        kind: config.kind,
        parent,
        children: Vec::new(),
        initial_key: config.initial,
        on: config.on,
        on_entry: config.on_entry,
        on_exit: config.on_exit,
        activities: config.activities,
        after: config.after,
        invoke: config.invoke,
        history_target: config.history_target,
    });
    let mut child_ids = Vec::with_capacity(config.states.len());
    for child in config.states {
        child_ids.push(flatten(child, Some(id), path.clone(), out));
    }
    out[id.index()].children = child_ids;
    id
}

impl<C, Evt> Machine<C, Evt>
where
    C: Clone + Send + Sync + 'static,
    Evt: EventLike + Send + Sync + 'static,
{
    /// Compile a host-authored description into a runtime machine.
    /// Fails with `InvalidMachineDefinition` for unknown initial keys,
    /// duplicate sibling keys, dangling transition targets, or an
    /// unresolved named guard (spec §7).
    pub fn build(
        id: impl Into<String>,
        root: NodeConfig<C, Evt>,
        options: MachineOptions<C, Evt>,
    ) -> StatechartResult<Machine<C, Evt>> {
        let id = id.into();
        let mut flat: Vec<FlatNode<C, Evt>> = Vec::new();
        let root_key = id.clone();
        let mut root_config = root;
        root_config.key = root_key;
        let root_id = flatten(root_config, None, Vec::new(), &mut flat);

        let mut id_index: HashMap<String, NodeId> = HashMap::with_capacity(flat.len());
        for (i, n) in flat.iter().enumerate() {
            let full_id = n.path.join(".");
            if id_index.insert(full_id.clone(), NodeId(i)).is_some() {
                return Err(StatechartError::invalid_machine_definition(format!(
                    "duplicate state id: {full_id}"
                )));
            }
        }

        // children-by-key + initial resolution
        let mut children_by_key: Vec<HashMap<String, NodeId>> = Vec::with_capacity(flat.len());
        for n in &flat {
            let mut map = HashMap::with_capacity(n.children.len());
            for &c in &n.children {
                map.insert(flat[c.index()].key.clone(), c);
            }
            children_by_key.push(map);
        }
        let mut initial: Vec<Option<NodeId>> = vec![None; flat.len()];
        for (i, n) in flat.iter().enumerate() {
            if matches!(n.kind, NodeKind::Compound) {
                let key = n.initial_key.as_ref().ok_or_else(|| {
                    StatechartError::invalid_machine_definition(format!(
                        "compound state '{}' has no initial child",
                        n.path.join(".")
                    ))
                })?;
                let child = children_by_key[i].get(key).copied().ok_or_else(|| {
                    StatechartError::invalid_machine_definition(format!(
                        "initial key '{key}' not found among children of '{}'",
                        n.path.join(".")
                    ))
                })?;
                initial[i] = Some(child);
            }
        }
        let history_of: Vec<Option<NodeId>> = flat
            .iter()
            .enumerate()
            .map(|(i, n)| -> StatechartResult<Option<NodeId>> {
                if n.is_history() {
                    let parent = n.parent.ok_or_else(|| {
                        StatechartError::invalid_machine_definition(
                            "root cannot be a history pseudostate".to_string(),
                        )
                    })?;
                    if let Some(target_key) = &n.history_target {
                        children_by_key[parent.index()]
                            .get(target_key)
                            .copied()
                            .map(Some)
                            .ok_or_else(|| {
                                StatechartError::invalid_machine_definition(format!(
                                    "history target '{target_key}' not found"
                                ))
                            })
                    } else {
                        Ok(Some(parent))
                    }
                } else {
                    Ok(None)
                }
            })
            .collect::<StatechartResult<Vec<_>>>()?;

        // second pass: compile on/entry/exit/after/invoke, now id_index is complete.
        let paths: Vec<Vec<String>> = flat.iter().map(|n| n.path.clone()).collect();
        let parents: Vec<Option<NodeId>> = flat.iter().map(|n| n.parent).collect();

        let resolve_target = |source: NodeId, target: &str| -> StatechartResult<NodeId> {
            resolve_target_path(&paths, &parents, &id_index, source, target)
        };

        let mut compiled: Vec<Option<StateNode<C, Evt>>> = Vec::with_capacity(flat.len());
        compiled.resize_with(flat.len(), || None);

        for (i, n) in flat.into_iter().enumerate() {
            let nid = NodeId(i);
            let mut on: HashMap<String, Vec<Transition<C, Evt>>> = HashMap::new();
            for (event_type, transitions) in n.on {
                let compiled_ts = transitions
                    .into_iter()
                    .map(|t| compile_transition(nid, t, &resolve_target, &options))
                    .collect::<StatechartResult<Vec<_>>>()?;
                on.entry(event_type).or_default().extend(compiled_ts);
            }
            let mut on_entry = n
                .on_entry
                .into_iter()
                .map(|a| compile_action(a, &options))
                .collect::<Vec<_>>();
            let mut on_exit = n
                .on_exit
                .into_iter()
                .map(|a| compile_action(a, &options))
                .collect::<Vec<_>>();

            for (after_idx, after) in n.after.into_iter().enumerate() {
                let timer_id = format!("{}.after[{after_idx}]", n.path.join("."));
                let compiled_t =
                    compile_transition(nid, after.transition, &resolve_target, &options)?;
                on.entry(format!("xstate.after.{timer_id}"))
                    .or_default()
                    .push(compiled_t);
                let delay = after.delay;
                let send_id = timer_id.clone();
                on_entry.push(Action::Send(crate::action::SendSpec {
                    event: Arc::new(move |_c: &C, _e: &Trigger<Evt>| Trigger::AfterDelay {
                        id: send_id.clone(),
                    }),
                    delay_ms: Some(Arc::new(move |c: &C| delay.resolve(c))),
                    id: Some(timer_id.clone()),
                }));
                on_exit.push(Action::Cancel(timer_id));
            }

            let invoke = if let Some(inv) = n.invoke {
                let done_event = format!("done.invoke.{}", inv.id);
                let compiled_done = inv
                    .on_done
                    .into_iter()
                    .map(|t| compile_transition(nid, t, &resolve_target, &options))
                    .collect::<StatechartResult<Vec<_>>>()?;
                if !compiled_done.is_empty() {
                    on.entry(done_event).or_default().extend(compiled_done);
                }
                on_entry.push(Action::StartInvoke);
                Some(crate::invoke::Invoke {
                    id: inv.id,
                    src: inv.src,
                    data: inv.data,
                    auto_forward: inv.auto_forward,
                })
            } else {
                None
            };

            compiled[i] = Some(StateNode {
                id: n.path.join("."),
                key: n.key,
                path: n.path,
                kind: n.kind,
                parent: n.parent,
                initial: initial[i],
                children: n.children,
                children_by_key: children_by_key[i].clone(),
                on,
                on_entry,
                on_exit,
                activities: n.activities,
                invoke,
                history_of: history_of[i],
            });
        }

        let nodes = compiled.into_iter().map(|n| n.unwrap()).collect();

        Ok(Machine {
            id,
            nodes,
            id_index,
            root: root_id,
            options,
        })
    }

    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &StateNode<C, Evt> {
        &self.nodes[id.index()]
    }

    fn is_descendant_or_self(&self, n: NodeId, ancestor: NodeId) -> bool {
        let mut cur = Some(n);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.node(c).parent;
        }
        false
    }

    fn is_proper_ancestor(&self, n: NodeId, of: NodeId) -> bool {
        n != of && self.is_descendant_or_self(of, n)
    }

    /// The initial state, per the machine's `initial` chain down from the
    /// root, seeded with `context`.
    pub fn initial_state(&self, context: C) -> State<C, Evt> {
        let mut tree = StateTree::new();
        self.descend_default(self.root, &mut tree);
        let mut context = context;
        let actions = self.collect_entry_actions_from_scratch(&tree, &mut context);
        let value = tree.to_value(self);
        State {
            value,
            context,
            event: Trigger::Init,
            actions,
            activities: self.activities_for(&tree),
            history: None,
            history_value: HashMap::new(),
            tree,
            changed: true,
        }
    }

    fn collect_entry_actions_from_scratch(
        &self,
        tree: &StateTree,
        context: &mut C,
    ) -> Vec<ActionRecord<C, Evt>> {
        let mut nodes: Vec<NodeId> = tree.iter().collect();
        nodes.sort_by_key(|n| self.node(*n).path.len());
        let trigger = Trigger::Init;
        let mut flat_actions: Vec<Action<C, Evt>> = Vec::new();
        for n in &nodes {
            for a in &self.node(*n).on_entry {
                apply_assigns_and_flatten(a, context, &trigger, &self.options, &mut flat_actions);
            }
        }
        flat_actions
            .iter()
            .map(|a| to_record(a, context, &trigger))
            .collect()
    }

    fn activities_for(&self, tree: &StateTree) -> HashMap<String, bool> {
        let mut out = HashMap::new();
        for n in tree.iter() {
            for a in &self.node(n).activities {
                out.insert(a.id.clone(), true);
            }
        }
        out
    }

    /// Fills `tree` by descending from `from` via each compound node's
    /// `initial`, and every child for parallel nodes (spec §4.A `resolve`).
    fn descend_default(&self, from: NodeId, tree: &mut StateTree) {
        tree.insert(from);
        let node = self.node(from);
        match node.kind {
            NodeKind::Compound => {
                if let Some(init) = node.initial {
                    self.descend_default(init, tree);
                }
            }
            NodeKind::Parallel => {
                for &c in &node.children {
                    self.descend_default(c, tree);
                }
            }
            _ => {}
        }
    }

    pub(crate) fn seed_tree_from_value(
        &self,
        from: NodeId,
        value: &StateValue,
        tree: &mut StateTree,
    ) -> StatechartResult<()> {
        tree.insert(from);
        let node = self.node(from);
        match (&node.kind, value) {
            (NodeKind::Parallel, StateValue::Map(m)) => {
                for &c in &node.children {
                    let key = &self.node(c).key;
                    if let Some(v) = m.get(key) {
                        self.seed_tree_from_value(c, v, tree)?;
                    } else {
                        self.descend_default(c, tree);
                    }
                }
                Ok(())
            }
            (NodeKind::Compound, StateValue::Map(m)) => {
                if let Some((key, v)) = m.iter().next() {
                    let child = node
                        .children_by_key
                        .get(key)
                        .copied()
                        .ok_or_else(|| unknown_key_error(key))?;
                    self.seed_tree_from_value(child, v, tree)
                } else if let Some(init) = node.initial {
                    self.descend_default(init, tree);
                    Ok(())
                } else {
                    Ok(())
                }
            }
            (NodeKind::Compound, StateValue::Leaf(key)) => {
                let child = node
                    .children_by_key
                    .get(key)
                    .copied()
                    .ok_or_else(|| unknown_key_error(key))?;
                self.descend_default(child, tree);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn tree_to_value(&self, from: NodeId, tree: &StateTree) -> StateValue {
        let node = self.node(from);
        match node.kind {
            NodeKind::Compound => {
                for &c in &node.children {
                    if tree.contains(c) {
                        let mut m = std::collections::BTreeMap::new();
                        m.insert(self.node(c).key.clone(), self.tree_to_value(c, tree));
                        return StateValue::Map(m);
                    }
                }
                StateValue::Leaf(node.key.clone())
            }
            NodeKind::Parallel => {
                let mut m = std::collections::BTreeMap::new();
                for &c in &node.children {
                    m.insert(self.node(c).key.clone(), self.tree_to_value(c, tree));
                }
                StateValue::Map(m)
            }
            _ => StateValue::Leaf(node.key.clone()),
        }
    }

    /// Every currently-active leaf (atomic or final) node, in document
    /// order — ascending `NodeId`, since the arena is built in preorder.
    fn active_leaves(&self, tree: &StateTree) -> Vec<NodeId> {
        let mut out: Vec<NodeId> = tree
            .iter()
            .filter(|&n| self.node(n).is_leaf_kind())
            .collect();
        out.sort();
        out
    }

    fn select_for_leaf(
        &self,
        leaf: NodeId,
        event_type: &str,
        context: &C,
        trigger: &Trigger<Evt>,
    ) -> Option<(NodeId, usize)> {
        let mut cur = Some(leaf);
        while let Some(n) = cur {
            let node = self.node(n);
            let candidates = node.on.get(event_type).or_else(|| node.on.get("*"));
            if let Some(list) = candidates {
                for (idx, t) in list.iter().enumerate() {
                    let passes = match &t.cond {
                        Some(g) => g(context, trigger),
                        None => true,
                    };
                    if passes {
                        return Some((n, idx));
                    }
                }
            }
            cur = node.parent;
        }
        None
    }

    fn effective_internal(&self, source: NodeId, transition: &Transition<C, Evt>) -> bool {
        transition.internal
            && transition
                .targets
                .iter()
                .all(|&t| self.is_descendant_or_self(t, source))
    }

    fn domain_for(&self, source: NodeId, transition: &Transition<C, Evt>) -> NodeId {
        if transition.targets.is_empty() {
            return source;
        }
        if self.effective_internal(source, transition) && !self.node(source).is_leaf_kind() {
            return source;
        }
        let source_path = &self.node(source).path;
        let mut common = source_path.len().saturating_sub(1);
        for &t in &transition.targets {
            let tp = &self.node(t).path;
            let prefix = common_prefix_len(source_path, tp);
            common = common.min(prefix).min(tp.len().saturating_sub(1));
        }
        let mut cur = source;
        while self.node(cur).path.len() > common.max(1) {
            cur = self.node(cur).parent.unwrap_or(cur);
            if Some(cur) == self.node(cur).parent {
                break;
            }
        }
        cur
    }

    fn descendants_of(&self, ancestor: NodeId, tree: &StateTree) -> Vec<NodeId> {
        tree.iter()
            .filter(|&n| n != ancestor && self.is_descendant_or_self(n, ancestor))
            .collect()
    }

    fn history_snapshot(&self, of: NodeId, tree: &StateTree) -> Vec<NodeId> {
        self.descendants_of(of, tree)
    }

    /// Descend from `from` down to leaves, following `initial` for compound
    /// nodes and every child for parallel nodes, resolving `History` nodes
    /// against `history_value` (or the node's own default). Appends every
    /// node visited (in parent-to-child order) to `out`.
    fn descend_entry(
        &self,
        from: NodeId,
        history_value: &HashMap<NodeId, Vec<NodeId>>,
        out: &mut Vec<NodeId>,
        seen: &mut std::collections::HashSet<NodeId>,
    ) {
        let node = self.node(from);
        if let Some(kind) = node.is_history() {
            let shadow = node.history_of.unwrap_or(from);
            if let Some(recorded) = history_value.get(&shadow) {
                match kind {
                    HistoryKind::Deep => {
                        for &r in recorded {
                            if seen.insert(r) {
                                out.push(r);
                            }
                        }
                    }
                    HistoryKind::Shallow => {
                        if let Some(&direct_child) =
                            recorded.iter().find(|&&r| self.node(r).parent == Some(shadow))
                        {
                            self.descend_entry(direct_child, history_value, out, seen);
                        } else {
                            self.descend_entry(shadow, history_value, out, seen);
                        }
                    }
                }
                return;
            }
            // no recorded history yet: fall back to the shadowed node's own default.
            self.descend_entry(shadow, history_value, out, seen);
            return;
        }
        if seen.insert(from) {
            out.push(from);
        }
        match node.kind {
            NodeKind::Compound => {
                if let Some(init) = node.initial {
                    self.descend_entry(init, history_value, out, seen);
                }
            }
            NodeKind::Parallel => {
                for &c in &node.children.clone() {
                    self.descend_entry(c, history_value, out, seen);
                }
            }
            _ => {}
        }
    }

    fn entry_path_to(
        &self,
        domain: NodeId,
        target: NodeId,
        history_value: &HashMap<NodeId, Vec<NodeId>>,
        out: &mut Vec<NodeId>,
        seen: &mut std::collections::HashSet<NodeId>,
    ) {
        // collect ancestor chain from target up to (not including) domain
        let mut chain = Vec::new();
        let mut cur = target;
        loop {
            if cur == domain {
                break;
            }
            chain.push(cur);
            match self.node(cur).parent {
                Some(p) => cur = p,
                None => break,
            }
        }
        chain.reverse();
        for &n in &chain {
            if n == target {
                self.descend_entry(target, history_value, out, seen);
            } else if seen.insert(n) {
                out.push(n);
            }
        }
        if chain.is_empty() && target != domain {
            self.descend_entry(target, history_value, out, seen);
        }
    }

    /// The pure transition function (spec §4.C).
    pub fn transition(&self, state: &State<C, Evt>, trigger: Trigger<Evt>) -> State<C, Evt> {
        self.transition_tree(&state.tree, &state.context, &state.history_value, trigger, Some(state))
    }

    /// Preview variant used by `Interpreter::next_state`: identical logic,
    /// just doesn't require an existing `State` wrapper.
    pub fn transition_tree(
        &self,
        tree: &StateTree,
        context: &C,
        history_value: &HashMap<NodeId, Vec<NodeId>>,
        trigger: Trigger<Evt>,
        previous: Option<&State<C, Evt>>,
    ) -> State<C, Evt> {
        let event_type = trigger.event_type().into_owned();
        let leaves = self.active_leaves(tree);

        let mut selected: BTreeMap<NodeId, usize> = BTreeMap::new();
        for leaf in &leaves {
            if let Some((src, idx)) = self.select_for_leaf(*leaf, &event_type, context, &trigger) {
                selected.entry(src).or_insert(idx);
            }
        }

        if selected.is_empty() {
            return State {
                value: tree.to_value(self),
                context: context.clone(),
                event: trigger,
                actions: Vec::new(),
                activities: self.activities_for(tree),
                history: previous.map(|p| Arc::new(p.clone())),
                history_value: history_value.clone(),
                tree: tree.clone(),
                changed: false,
            };
        }

        let mut new_tree = tree.clone();
        let mut new_history_value = history_value.clone();
        // Gathered in the final exit-all/transition-all/entry-all order
        // (spec §4.C step 6), but not yet evaluated: spec invariant 3
        // requires every `assign` in this step's action list to apply
        // before any non-assign action runs, so the list has to be
        // assembled first and walked twice — once for assigns, once (with
        // the now-final context) for everything else.
        let mut exit_refs: Vec<&Action<C, Evt>> = Vec::new();
        let mut transition_refs: Vec<&Action<C, Evt>> = Vec::new();
        let mut entry_refs: Vec<&Action<C, Evt>> = Vec::new();

        for (&source, &idx) in selected.iter() {
            let node = self.node(source);
            let transition = node
                .on
                .get(&event_type)
                .or_else(|| node.on.get("*"))
                .map(|list| &list[idx])
                .expect("selection invariant: matching list must exist");

            if transition.targets.is_empty() {
                transition_refs.extend(transition.actions.iter());
                continue;
            }

            let domain = self.domain_for(source, transition);
            let internal = self.effective_internal(source, transition);

            let mut exit_nodes: Vec<NodeId> = self
                .descendants_of(domain, &new_tree)
                .into_iter()
                .filter(|&n| {
                    !transition
                        .targets
                        .iter()
                        .any(|&t| self.is_proper_ancestor(n, t))
                })
                .collect();
            if internal {
                exit_nodes.retain(|&n| n != domain);
            }
            exit_nodes.sort_by_key(|n| std::cmp::Reverse(self.node(*n).path.len()));

            for &n in &exit_nodes {
                let node = self.node(n);
                if node.is_compound() || node.is_parallel() {
                    let snap = self.history_snapshot(n, &new_tree);
                    if !snap.is_empty() {
                        new_history_value.insert(n, snap);
                    }
                }
                exit_refs.extend(node.on_exit.iter());
                new_tree.remove(n);
            }

            transition_refs.extend(transition.actions.iter());

            let mut entry_nodes = Vec::new();
            let mut seen = std::collections::HashSet::new();
            for &target in &transition.targets {
                self.entry_path_to(domain, target, &new_history_value, &mut entry_nodes, &mut seen);
            }
            for &n in &entry_nodes {
                new_tree.insert(n);
                entry_refs.extend(self.node(n).on_entry.iter());
            }
        }

        // Phase 1 (spec §4.C step 7): walk the assembled action list in
        // order, applying every `assign` to a working context and
        // expanding `pure` in place; every other action is carried over
        // unevaluated for phase 2.
        let mut context = context.clone();
        let mut flat_actions: Vec<Action<C, Evt>> = Vec::new();
        for a in exit_refs.into_iter().chain(transition_refs).chain(entry_refs) {
            apply_assigns_and_flatten(a, &mut context, &trigger, &self.options, &mut flat_actions);
        }

        // Phase 2: every surviving action is evaluated against the final,
        // post-assign context, so a `log`/`send`/etc. authored before an
        // `assign` in the same list still observes the assign's effect.
        let mut actions = Vec::with_capacity(flat_actions.len());
        for a in &flat_actions {
            actions.push(to_record(a, &context, &trigger));
        }

        let value = new_tree.to_value(self);
        let changed_value = previous.map(|p| p.tree != new_tree).unwrap_or(true);

        State {
            value,
            actions,
            activities: self.activities_for(&new_tree),
            history: previous.map(|p| Arc::new(p.clone())),
            history_value: new_history_value,
            changed: changed_value,
            event: trigger,
            context,
            tree: new_tree,
        }
    }
}

fn common_prefix_len(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn resolve_target_path(
    paths: &[Vec<String>],
    parents: &[Option<NodeId>],
    id_index: &HashMap<String, NodeId>,
    source: NodeId,
    target: &str,
) -> StatechartResult<NodeId> {
    if let Some(abs) = target.strip_prefix('#') {
        return id_index.get(abs).copied().ok_or_else(|| {
            StatechartError::invalid_machine_definition(format!("unknown absolute target '#{abs}'"))
        });
    }
    if let Some(desc) = target.strip_prefix('.') {
        let mut full = paths[source.index()].join(".");
        full.push('.');
        full.push_str(desc);
        return id_index.get(&full).copied().ok_or_else(|| {
            StatechartError::invalid_machine_definition(format!(
                "unknown descendant target '.{desc}' from '{}'",
                paths[source.index()].join(".")
            ))
        });
    }
    let parent = parents[source.index()].ok_or_else(|| {
        StatechartError::invalid_machine_definition(format!(
            "relative target '{target}' has no parent to resolve against"
        ))
    })?;
    let full = format!("{}.{}", paths[parent.index()].join("."), target);
    id_index
        .get(&full)
        .copied()
        .ok_or_else(|| StatechartError::invalid_machine_definition(format!("unknown target '{target}'")))
}

fn compile_transition<C, Evt, F>(
    source: NodeId,
    t: TransitionConfig<C, Evt>,
    resolve_target: &F,
    options: &MachineOptions<C, Evt>,
) -> StatechartResult<Transition<C, Evt>>
where
    Evt: EventLike,
    F: Fn(NodeId, &str) -> StatechartResult<NodeId>,
{
    let targets = t
        .target
        .iter()
        .map(|s| resolve_target(source, s))
        .collect::<StatechartResult<Vec<_>>>()?;
    let cond = match t.cond {
        None => None,
        Some(crate::node::GuardConfig::Inline(f)) => Some(f),
        Some(crate::node::GuardConfig::Named(name)) => Some(
            options
                .guards
                .get(&name)
                .cloned()
                .ok_or_else(|| StatechartError::invalid_machine_definition(format!("unknown guard '{name}'")))?,
        ),
    };
    let actions = t
        .actions
        .into_iter()
        .map(|a| compile_action(a, options))
        .collect();
    Ok(Transition {
        targets,
        cond,
        actions,
        internal: t.internal,
    })
}

fn compile_action<C, Evt: EventLike>(
    a: ActionConfig<C, Evt>,
    options: &MachineOptions<C, Evt>,
) -> Action<C, Evt> {
    match a {
        ActionConfig::Assign(f) => Action::Assign(f),
        ActionConfig::Raise(f) => Action::Raise(Arc::new(move |c: &C, e: &Trigger<Evt>| {
            Trigger::External(f(c, e))
        })),
        ActionConfig::Send(s) => Action::Send(s),
        ActionConfig::Cancel(id) => Action::Cancel(id),
        ActionConfig::Log(f) => Action::Log(f),
        ActionConfig::Start(d) => Action::Start(d),
        ActionConfig::Stop(d) => Action::Stop(d),
        ActionConfig::StartInvoke => Action::StartInvoke,
        ActionConfig::Inline(name, f) => Action::Custom {
            name,
            executor: Some(f),
        },
        ActionConfig::Named(name) => {
            let executor = options.actions.get(&name).cloned();
            Action::Custom { name, executor }
        }
        ActionConfig::Pure(f) => Action::Pure(f),
        ActionConfig::SendParent(f) => Action::SendParent(f),
    }
}

/// Phase 1 of applying one compiled action (spec §4.C step 7, "the raise
/// phase"): `assign` mutates the working `context` in place and is then
/// dropped (it never reaches `State::actions`); `pure` expands recursively
/// against the real action/guard map (so a `pure` closure returning a
/// `Named` action still resolves) and its expansion is itself subject to
/// this same pass, in place, so a `pure`-produced `assign` still lands
/// before any non-assign action. Everything else is carried into `out`
/// unevaluated, to be turned into an `ActionRecord` in phase 2 once the
/// whole step's context is final.
fn apply_assigns_and_flatten<C, Evt: EventLike>(
    action: &Action<C, Evt>,
    context: &mut C,
    trigger: &Trigger<Evt>,
    options: &MachineOptions<C, Evt>,
    out: &mut Vec<Action<C, Evt>>,
) {
    match action {
        Action::Assign(f) => {
            *context = f(context, trigger);
        }
        Action::Pure(f) => {
            for expanded in f(context, trigger) {
                let compiled = compile_action(expanded, options);
                apply_assigns_and_flatten(&compiled, context, trigger, options, out);
            }
        }
        other => out.push(other.clone()),
    }
}

/// Evaluates a compiled action's closures against `(context, trigger)` into
/// the plain-data record a host/interpreter can act on without re-running
/// anything. `Assign`/`Pure` are handled by `apply_assigns_and_flatten` and
/// never reach here.
fn to_record<C, Evt: EventLike>(
    action: &Action<C, Evt>,
    context: &C,
    trigger: &Trigger<Evt>,
) -> ActionRecord<C, Evt> {
    match action {
        Action::Assign(_) | Action::Pure(_) => {
            unreachable!("assign/pure are applied, not recorded")
        }
        Action::Raise(f) => ActionRecord::Raise(f(context, trigger)),
        Action::Send(s) => ActionRecord::Send {
            event: (s.event)(context, trigger),
            delay_ms: s.delay_ms.as_ref().map(|f| f(context)),
            id: s.id.clone(),
        },
        Action::Cancel(id) => ActionRecord::Cancel(id.clone()),
        Action::Log(f) => ActionRecord::Log(f(context, trigger)),
        Action::Start(d) => ActionRecord::StartActivity(d.id.clone()),
        Action::Stop(d) => ActionRecord::StopActivity(d.id.clone()),
        Action::StartInvoke => ActionRecord::StartInvoke,
        Action::Custom { name, executor } => ActionRecord::Custom {
            name: name.clone(),
            executor: executor.clone(),
            resolved: executor.is_some(),
        },
        Action::SendParent(f) => ActionRecord::SendParent(f(context, trigger)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::StringEvent;
    use crate::node::{HistoryKind, NodeConfig, NodeKind, TransitionConfig};
    use rstest::rstest;
    use test_case::test_case;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Ctx {
        count: i32,
    }

    fn traffic_light() -> Machine<Ctx, StringEvent> {
        let root = NodeConfig::compound("light", "green")
            .state(
                NodeConfig::atomic("green")
                    .on("TIMER", vec![TransitionConfig::new(["yellow"])]),
            )
            .state(
                NodeConfig::atomic("yellow")
                    .on("TIMER", vec![TransitionConfig::new(["red"])]),
            )
            .state(
                NodeConfig::atomic("red")
                    .on("TIMER", vec![TransitionConfig::new(["green"])]),
            );
        Machine::build("light", root, MachineOptions::default()).unwrap()
    }

    #[test]
    fn cycles_through_colors_on_timer() {
        let machine = traffic_light();
        let state = machine.initial_state(Ctx::default());
        assert!(state.matches("green"));

        let state = machine.transition(&state, Trigger::External(StringEvent::from("TIMER")));
        assert!(state.matches("yellow"));
        assert!(state.changed);

        let state = machine.transition(&state, Trigger::External(StringEvent::from("TIMER")));
        assert!(state.matches("red"));

        let state = machine.transition(&state, Trigger::External(StringEvent::from("TIMER")));
        assert!(state.matches("green"));
    }

    #[test]
    fn unmatched_event_returns_unchanged_state() {
        let machine = traffic_light();
        let state = machine.initial_state(Ctx::default());
        let next = machine.transition(&state, Trigger::External(StringEvent::from("NOPE")));
        assert!(!next.changed);
        assert!(next.actions.is_empty());
        assert!(next.matches("green"));
    }

    #[test]
    fn unresolved_named_guard_is_a_build_error() {
        let root = NodeConfig::compound("m", "a").state(
            NodeConfig::atomic("a").on(
                "GO",
                vec![TransitionConfig::new(["b"]).cond_named("never_registered")],
            ),
        ).state(NodeConfig::atomic("b"));
        let err = Machine::<Ctx, StringEvent>::build("m", root, MachineOptions::default())
            .unwrap_err();
        assert!(matches!(err, StatechartError::InvalidMachineDefinition { .. }));
    }

    #[test]
    fn unresolved_named_action_compiles_and_is_surfaced_unresolved() {
        let root = NodeConfig::compound("m", "a")
            .state(NodeConfig::atomic("a").on(
                "GO",
                vec![TransitionConfig::new(["b"])
                    .actions(vec![ActionConfig::Named("missing_action".into())])],
            ))
            .state(NodeConfig::atomic("b"));
        let machine = Machine::build("m", root, MachineOptions::default()).unwrap();
        let state = machine.initial_state(Ctx::default());
        let next = machine.transition(&state, Trigger::External(StringEvent::from("GO")));
        assert!(next.matches("b"));
        match &next.actions[0] {
            ActionRecord::Custom { name, resolved, executor } => {
                assert_eq!(name, "missing_action");
                assert!(!resolved);
                assert!(executor.is_none());
            }
            other => panic!("expected Custom record, got {other:?}"),
        }
    }

    #[test]
    fn guard_reads_context_at_transition_time() {
        let root = NodeConfig::compound("m", "a")
            .state(NodeConfig::atomic("a").on(
                "GO",
                vec![
                    TransitionConfig::new(["b"])
                        .cond(Arc::new(|c: &Ctx, _e| c.count >= 3)),
                    TransitionConfig::new(["c"]),
                ],
            ))
            .state(NodeConfig::atomic("b"))
            .state(NodeConfig::atomic("c"));
        let machine = Machine::build("m", root, MachineOptions::default()).unwrap();

        let low = machine.initial_state(Ctx { count: 0 });
        let next = machine.transition(&low, Trigger::External(StringEvent::from("GO")));
        assert!(next.matches("c"), "guard should fail and fall through to the unguarded transition");

        let high = machine.initial_state(Ctx { count: 5 });
        let next = machine.transition(&high, Trigger::External(StringEvent::from("GO")));
        assert!(next.matches("b"), "guard should pass when count is high enough");
    }

    #[test]
    fn parallel_regions_transition_independently() {
        let root = NodeConfig::new("m", NodeKind::Parallel)
            .state(
                NodeConfig::compound("a", "a1")
                    .state(NodeConfig::atomic("a1").on("FLIP_A", vec![TransitionConfig::new(["a2"])]))
                    .state(NodeConfig::atomic("a2")),
            )
            .state(
                NodeConfig::compound("b", "b1")
                    .state(NodeConfig::atomic("b1").on("FLIP_B", vec![TransitionConfig::new(["b2"])]))
                    .state(NodeConfig::atomic("b2")),
            );
        let machine = Machine::build("m", root, MachineOptions::default()).unwrap();
        let state = machine.initial_state(Ctx::default());
        assert!(state.matches("a.a1"));
        assert!(state.matches("b.b1"));

        let state = machine.transition(&state, Trigger::External(StringEvent::from("FLIP_A")));
        assert!(state.matches("a.a2"));
        assert!(state.matches("b.b1"), "region b must be untouched by an event only region a handles");
    }

    #[test]
    fn shallow_history_restores_last_active_child() {
        let root = NodeConfig::compound("m", "on")
            .state(
                NodeConfig::compound("on", "a")
                    .state(NodeConfig::atomic("a").on("NEXT", vec![TransitionConfig::new(["b"])]))
                    .state(NodeConfig::atomic("b"))
                    .state(NodeConfig::history("hist", HistoryKind::Shallow))
                    .on("OFF", vec![TransitionConfig::new(["#m.off"])]),
            )
            .state(NodeConfig::atomic("off").on("RESUME", vec![TransitionConfig::new(["#m.on.hist"])]));
        let machine = Machine::build("m", root, MachineOptions::default()).unwrap();

        let state = machine.initial_state(Ctx::default());
        let state = machine.transition(&state, Trigger::External(StringEvent::from("NEXT")));
        assert!(state.matches("on.b"));

        let state = machine.transition(&state, Trigger::External(StringEvent::from("OFF")));
        assert!(state.matches("off"));

        let state = machine.transition(&state, Trigger::External(StringEvent::from("RESUME")));
        assert!(state.matches("on.b"), "shallow history should restore the last active child, not the compound's default initial");
    }

    /// Table-style guard matrix (spec §8 invariant 3's guard half): one
    /// machine, several `count` values, checked against the threshold
    /// transition's declaration order (the unguarded fallback always comes
    /// last, so it only fires when the guard above it fails).
    #[rstest]
    #[case(0, "c")]
    #[case(2, "c")]
    #[case(3, "b")]
    #[case(10, "b")]
    fn guard_threshold_matrix(#[case] count: i32, #[case] expected: &str) {
        let root = NodeConfig::compound("m", "a")
            .state(NodeConfig::atomic("a").on(
                "GO",
                vec![
                    TransitionConfig::new(["b"]).cond(Arc::new(|c: &Ctx, _e| c.count >= 3)),
                    TransitionConfig::new(["c"]),
                ],
            ))
            .state(NodeConfig::atomic("b"))
            .state(NodeConfig::atomic("c"));
        let machine = Machine::build("m", root, MachineOptions::default()).unwrap();
        let state = machine.initial_state(Ctx { count });
        let next = machine.transition(&state, Trigger::External(StringEvent::from("GO")));
        assert!(next.matches(expected), "count={count} should land on {expected}");
    }

    /// Spec §8 invariant 1, parametrized over a handful of event names that
    /// all share the same "doesn't match anything" shape.
    #[test_case("NOPE"; "unrelated_event_name")]
    #[test_case("timer"; "wrong_case_of_a_real_event")]
    #[test_case(""; "empty_event_name")]
    fn unmatched_event_is_always_a_no_op(event_type: &str) {
        let machine = traffic_light();
        let state = machine.initial_state(Ctx::default());
        let next = machine.transition(&state, Trigger::External(StringEvent::from(event_type)));
        assert_eq!(next.value, state.value);
        assert!(next.actions.is_empty());
        assert!(!next.changed);
    }

    /// Spec §8 invariant 2: a self-transition on an atomic node without
    /// `internal` still re-runs the node's own exit then entry actions.
    #[test]
    fn self_transition_on_atomic_runs_exit_then_entry() {
        let root = NodeConfig::compound("m", "a").state(
            NodeConfig::atomic("a")
                .on_exit_actions(vec![ActionConfig::Log(Arc::new(|_c: &Ctx, _e| "exit_a".into()))])
                .on_entry_actions(vec![ActionConfig::Log(Arc::new(|_c: &Ctx, _e| "enter_a".into()))])
                .on("SELF", vec![TransitionConfig::new(["a"])]),
        );
        let machine = Machine::build("m", root, MachineOptions::default()).unwrap();
        let state = machine.initial_state(Ctx::default());
        let next = machine.transition(&state, Trigger::External(StringEvent::from("SELF")));
        assert!(next.changed);
        let messages: Vec<&str> = next
            .actions
            .iter()
            .map(|a| match a {
                ActionRecord::Log(msg) => msg.as_str(),
                other => panic!("expected Log record, got {other:?}"),
            })
            .collect();
        assert_eq!(messages, vec!["exit_a", "enter_a"]);
    }
}
