//! Copy-on-write handler storage.
//!
//! Registration publishes a new immutable snapshot; dispatch takes the current
//! snapshot once and iterates it without holding a lock. A dispatch therefore
//! sees exactly the handlers registered before it started.

use broken_core::{
    Action, BoxAction, BoxCriteria, Criteria, DispatchError, Fault, MatchLevel, Problem,
};
use std::sync::{Arc, PoisonError, RwLock};

/// A registered handler: declared kind, criteria, action and suppression flag.
pub struct HandlerEntry<E: Fault> {
    kind: E::Kind,
    criteria: BoxCriteria<E>,
    action: BoxAction<E>,
    skip_if_handled: bool,
    name: Option<&'static str>,
}

impl<E: Fault> HandlerEntry<E> {
    pub(crate) fn new(
        kind: E::Kind,
        criteria: BoxCriteria<E>,
        action: BoxAction<E>,
        skip_if_handled: bool,
        name: Option<&'static str>,
    ) -> Self {
        Self {
            kind,
            criteria,
            action,
            skip_if_handled,
            name,
        }
    }

    /// The kind this handler was declared for.
    pub fn kind(&self) -> E::Kind {
        self.kind
    }

    /// Whether this handler defers to handlers that already fired.
    pub fn skips_if_handled(&self) -> bool {
        self.skip_if_handled
    }

    /// The diagnostic name, if one was given.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Evaluate this handler's criteria against `fault`.
    pub fn evaluate(&self, fault: &E) -> MatchLevel {
        self.criteria.evaluate(self.kind, fault)
    }

    /// Run the action unless it is suppressed.
    ///
    /// Returns `Ok(false)` when the handler skipped because `problem` was
    /// already handled.
    pub(crate) fn run(&self, problem: &mut Problem<'_, E>) -> Result<bool, DispatchError> {
        if self.skip_if_handled && problem.is_handled() {
            return Ok(false);
        }
        problem.mark_handled();
        self.action
            .call(problem.fault())
            .map_err(DispatchError::Action)?;
        Ok(true)
    }
}

impl<E: Fault> std::fmt::Debug for HandlerEntry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("kind", &self.kind)
            .field("skip_if_handled", &self.skip_if_handled)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An immutable view of the registry at one point in time.
pub type Snapshot<E> = Arc<[Arc<HandlerEntry<E>>]>;

/// Append-only, concurrently readable handler list.
pub(crate) struct Registry<E: Fault> {
    current: RwLock<Snapshot<E>>,
}

impl<E: Fault> Registry<E> {
    pub(crate) fn new() -> Self {
        Self {
            current: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// The current snapshot. The read lock is released before returning.
    pub(crate) fn snapshot(&self) -> Snapshot<E> {
        // A writer that panicked mid-way never published, so the slot still
        // holds a complete snapshot.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publish a new snapshot with `entry` appended.
    pub(crate) fn push(&self, entry: HandlerEntry<E>) {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next: Vec<Arc<HandlerEntry<E>>> = guard.iter().cloned().collect();
        next.push(Arc::new(entry));
        *guard = Arc::from(next);
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot().len()
    }
}
