//! Logging action for fault observation.

use broken_core::{Action, BoxError, Fault};

/// An action that logs each fault it receives.
///
/// With the `tracing` feature enabled this emits one `warn` event carrying the
/// action's name, the fault's kind and the fault itself. Without it the action
/// is a no-op. It never fails.
///
/// # Example
///
/// ```rust,ignore
/// dispatcher
///     .with_handler(AppKind::Exception)
///     .instance_of()
///     .action(LoggingAction::named("fallback"))
///     .skip_if_handled()
///     .add()?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingAction {
    name: &'static str,
}

impl LoggingAction {
    /// Create a new `LoggingAction` with a default name.
    pub fn new() -> Self {
        Self { name: "fault" }
    }

    /// Create a new `LoggingAction` with a custom name.
    ///
    /// The name is used in log records to identify the handler.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log records.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingAction {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Fault> Action<E> for LoggingAction {
    fn call(&self, fault: &E) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!(name = %self.name, kind = ?fault.kind(), ?fault, "fault observed");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, fault);
        }
        Ok(())
    }
}
