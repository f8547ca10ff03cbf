//! Event shape (spec §6) and the internal trigger wrapper.
//!
//! The spec's event shape is `{type: string, ...payload}` — a dynamically
//! typed JS object. This crate is statically typed, so the host supplies its
//! own event enum `Evt` and only has to implement [`EventLike::event_type`]
//! on it (the same shape as the teacher's `Event` trait in
//! `leptos-state/src/machine/events.rs`). Everything the interpreter raises
//! internally (init, transient, delayed, done) is represented by
//! [`Trigger::event_type`] reserving the `xstate.` and `done.` prefixes, per
//! spec §6.

use std::borrow::Cow;
use std::fmt;

/// Trait a host's event type implements so the transition engine can look up
/// `on[event.type]` without knowing the concrete enum.
pub trait EventLike: Clone + fmt::Debug {
    fn event_type(&self) -> &str;
}

/// String-tagged event with no payload, for hosts that don't need a custom
/// event enum. Mirrors the teacher's `StringEvent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringEvent(pub String);

impl EventLike for StringEvent {
    fn event_type(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringEvent {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StringEvent {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Every event the transition function can actually see: a host event, or
/// one of the handful of events the interpreter itself raises.
///
/// Wrapping the host's `Evt` rather than requiring it to encode these cases
/// itself keeps `Evt` a plain user enum; the wrapper plays the same role as
/// the teacher's `HistoryEvent<E>` (`leptos-state/src/machine/history_core.rs`),
/// which wraps a user event alongside library-internal variants.
#[derive(Debug, Clone)]
pub enum Trigger<Evt> {
    /// An event sent in from outside, or raised internally by an action.
    External(Evt),
    /// `{type: "xstate.init"}`, delivered to the first `onTransition`.
    Init,
    /// The empty event used to drain eventless (transient) transitions.
    Transient,
    /// A compiled `after` delay firing; `id` matches the `send`/`cancel`
    /// pair the node's entry/exit actions were compiled into.
    AfterDelay { id: String },
    /// `done.state.<id>`, raised when a compound node's final child is entered.
    DoneState { id: String },
    /// `done.invoke.<id>`, raised when an invoked child reaches a final state.
    DoneInvoke { id: String, data: Option<String> },
}

impl<Evt: EventLike> Trigger<Evt> {
    pub fn event_type(&self) -> Cow<'_, str> {
        match self {
            Trigger::External(e) => Cow::Borrowed(e.event_type()),
            Trigger::Init => Cow::Borrowed("xstate.init"),
            Trigger::Transient => Cow::Borrowed(""),
            Trigger::AfterDelay { id } => Cow::Owned(format!("xstate.after.{id}")),
            Trigger::DoneState { id } => Cow::Owned(format!("done.state.{id}")),
            Trigger::DoneInvoke { id, .. } => Cow::Owned(format!("done.invoke.{id}")),
        }
    }

    pub fn as_external(&self) -> Option<&Evt> {
        match self {
            Trigger::External(e) => Some(e),
            _ => None,
        }
    }
}

impl<Evt> From<Evt> for Trigger<Evt> {
    fn from(e: Evt) -> Self {
        Trigger::External(e)
    }
}
