//! # Actions
//!
//! The side-effecting half of a registered handler: logging, metrics,
//! compensation. An action receives the original fault by reference.
//!
//! Actions are caller code. Their failures are never swallowed by the
//! dispatcher; the first failing action aborts the dispatch call.

use crate::{error::BoxError, kind::Fault};

/// Conversion of an action's return value into success or failure.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<T, E>` → delegates to inner `T` or fails with `E`
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoActionResult`",
    label = "actions must return `()` or `Result<_, _>`",
    note = "The error type of a returned `Result` must convert into `BoxError`."
)]
pub trait IntoActionResult {
    /// Convert the output into success or a boxed error.
    fn into_action_result(self) -> Result<(), BoxError>;
}

impl IntoActionResult for () {
    fn into_action_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoActionResult for Result<T, E>
where
    T: IntoActionResult,
    E: Into<BoxError>,
{
    fn into_action_result(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_action_result(),
            Err(e) => Err(e.into()),
        }
    }
}

/// The callback run when a handler fires.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Action` for `{E}`",
    label = "missing `Action` implementation",
    note = "Closures `Fn(&{E})` returning `()` or `Result` are actions; annotate the argument type."
)]
pub trait Action<E: Fault>: Send + Sync + 'static {
    /// Run the action for `fault`.
    fn call(&self, fault: &E) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<E, F, R> Action<E> for F
where
    E: Fault,
    F: Fn(&E) -> R + Send + Sync + 'static,
    R: IntoActionResult,
{
    fn call(&self, fault: &E) -> Result<(), BoxError> {
        (self)(fault).into_action_result()
    }
}

/// A type-erased action.
pub type BoxAction<E> = Box<dyn Action<E>>;
