//! The per-call dispatch context.

use crate::kind::Fault;

/// The state of one dispatch call.
///
/// A `Problem` wraps the fault being dispatched and records whether any
/// handler has fired yet. It lives for a single `handle` call and is passed by
/// `&mut` to each handler in turn.
///
/// `handled` only ever moves from `false` to `true`.
#[derive(Debug)]
pub struct Problem<'a, E> {
    fault: &'a E,
    handled: bool,
}

impl<'a, E: Fault> Problem<'a, E> {
    /// Start a new, unhandled problem for `fault`.
    pub fn new(fault: &'a E) -> Self {
        Self {
            fault,
            handled: false,
        }
    }

    /// The fault being dispatched.
    pub fn fault(&self) -> &'a E {
        self.fault
    }

    /// Whether a handler has already fired during this call.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Record that a handler fired.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}
