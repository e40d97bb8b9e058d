//! # Error Kinds and Faults
//!
//! An [`ErrorKind`] is the tag a handler is registered against. Kinds form a
//! single-inheritance hierarchy declared by the application, usually as a
//! closed `enum` (see the `error_kinds!` macro in the `broken` crate).
//!
//! A [`Fault`] is the error value that gets dispatched. It reports its exact
//! runtime kind and, optionally, the nested fault that caused it.

use std::fmt::Debug;

/// The two wrapper kinds used by an asynchronous task runtime to carry the
/// real failure of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskWrapper {
    /// The task body failed while executing.
    Execution,
    /// The task's completion stage failed.
    Completion,
}

/// A tag identifying a family of faults.
///
/// # Hierarchy
///
/// Each kind names at most one parent. A kind `is_a` itself and every kind on
/// its parent chain, which is what instance-of style criteria test against.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Kind { Exception, Runtime }
///
/// impl ErrorKind for Kind {
///     fn parent(self) -> Option<Self> {
///         match self {
///             Kind::Exception => None,
///             Kind::Runtime => Some(Kind::Exception),
///         }
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `ErrorKind`",
    label = "missing `ErrorKind` implementation",
    note = "Declare kinds with `error_kinds!` or implement `parent` by hand."
)]
pub trait ErrorKind: Copy + Eq + Debug + Send + Sync + 'static {
    /// The immediate parent of this kind, or `None` for a root kind.
    fn parent(self) -> Option<Self>;

    /// Which task wrapper this kind is, if any.
    ///
    /// Only kinds returning `Some` are unwrapped by the asynchronous failure
    /// adapter.
    fn task_wrapper(self) -> Option<TaskWrapper> {
        None
    }

    /// Returns `true` if `self` is `ancestor` or descends from it.
    fn is_a(self, ancestor: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

/// An error value that can be dispatched.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Fault`",
    label = "missing `Fault` implementation",
    note = "Faults must report their exact `kind()`."
)]
pub trait Fault: Debug + Send + Sync + 'static {
    /// The kind enumeration this fault belongs to.
    type Kind: ErrorKind;

    /// The exact runtime kind of this fault.
    fn kind(&self) -> Self::Kind;

    /// The fault that caused this one, if any.
    fn cause(&self) -> Option<&Self> {
        None
    }
}
