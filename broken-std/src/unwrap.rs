//! Unwrapping of asynchronous task wrappers.
//!
//! Async runtimes report a task's failure inside an execution or completion
//! wrapper. Handlers are registered against the real fault, so the wrapper is
//! peeled off before dispatch.

use broken_core::{ErrorKind, Fault};

/// Strip task wrappers from `fault`.
///
/// While the current fault's kind is a [`TaskWrapper`] and it carries a cause,
/// descend into the cause. Stops at the first fault that is not a wrapper, or
/// at a wrapper without a cause, which is returned itself.
///
/// Faults of any other kind are returned unchanged even when they carry a
/// cause.
///
/// [`TaskWrapper`]: broken_core::TaskWrapper
pub fn unwrap_task_failure<E: Fault>(fault: &E) -> &E {
    let mut current = fault;
    while current.kind().task_wrapper().is_some() {
        match current.cause() {
            Some(cause) => current = cause,
            None => break,
        }
    }
    current
}
