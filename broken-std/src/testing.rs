//! Testing utilities for broken.
//!
//! This module provides test doubles for actions so dispatch behavior can be
//! asserted without hand-written closures and shared state.
//!
//! # Features
//!
//! - [`RecordingAction`]: An action that records every fault it receives
//! - [`CountingAction`]: An action that counts invocations
//! - [`FailingAction`]: An action that always fails
//! - [`OrderRecorder`]: Records the order in which several actions ran

use broken_core::{Action, BoxError, Fault};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Recording Action
// ============================================================================

/// An action that records all faults it receives.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the dispatcher.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingAction::<AppFault>::new();
/// dispatcher.register_strict(AppKind::Io, recorder.clone());
///
/// dispatcher.handle(&fault)?;
///
/// assert_eq!(recorder.faults(), vec![fault]);
/// ```
pub struct RecordingAction<E: Clone> {
    faults: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingAction<E> {
    /// Create a new recording action.
    pub fn new() -> Self {
        Self {
            faults: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded faults.
    pub fn faults(&self) -> Vec<E> {
        self.faults.lock().unwrap().clone()
    }

    /// Get the number of recorded faults.
    pub fn count(&self) -> usize {
        self.faults.lock().unwrap().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Clear all recorded faults.
    pub fn clear(&self) {
        self.faults.lock().unwrap().clear();
    }
}

impl<E: Clone> Default for RecordingAction<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Clone for RecordingAction<E> {
    fn clone(&self) -> Self {
        Self {
            faults: self.faults.clone(),
        }
    }
}

impl<E: Fault + Clone> Action<E> for RecordingAction<E> {
    fn call(&self, fault: &E) -> Result<(), BoxError> {
        self.faults.lock().unwrap().push(fault.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Action
// ============================================================================

/// An action that counts invocations.
#[derive(Clone, Default)]
pub struct CountingAction {
    count: Arc<AtomicUsize>,
}

impl CountingAction {
    /// Create a new counting action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Fault> Action<E> for CountingAction {
    fn call(&self, _fault: &E) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Action
// ============================================================================

/// The error returned by [`FailingAction`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("action failed: {0}")]
pub struct ActionFailed(pub String);

/// An action that fails every time it runs.
#[derive(Clone)]
pub struct FailingAction {
    message: String,
    calls: Arc<AtomicUsize>,
}

impl FailingAction {
    /// Create an action failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the action ran.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: Fault> Action<E> for FailingAction {
    fn call(&self, _fault: &E) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Box::new(ActionFailed(self.message.clone())))
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Records the order in which actions ran.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderRecorder::new();
/// dispatcher.register_instance_of(AppKind::Exception, order.action(1));
/// dispatcher.register_strict(AppKind::Io, order.action(2));
///
/// dispatcher.handle(&io_fault)?;
/// assert_eq!(order.order(), vec![2, 1]);
/// ```
#[derive(Clone, Default)]
pub struct OrderRecorder {
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that appends `id` when it runs.
    pub fn action(&self, id: usize) -> OrderedAction {
        OrderedAction {
            id,
            order: self.order.clone(),
        }
    }

    /// The ids recorded so far, in invocation order.
    pub fn order(&self) -> Vec<usize> {
        self.order.lock().unwrap().clone()
    }
}

/// An action created by [`OrderRecorder::action`].
pub struct OrderedAction {
    id: usize,
    order: Arc<Mutex<Vec<usize>>>,
}

impl<E: Fault> Action<E> for OrderedAction {
    fn call(&self, _fault: &E) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(())
    }
}
