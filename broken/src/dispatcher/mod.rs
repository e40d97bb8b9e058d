//! The dispatcher: handler registration and ranked dispatch.

pub mod builder;
pub mod registry;

pub use builder::HandlerBuilder;
pub use registry::{HandlerEntry, Snapshot};

use broken_core::{Action, Criteria, DispatchError, DispatchReport, Fault, MatchLevel, Problem};
use broken_std::{ExactTypeMatch, InstanceOf};
use registry::Registry;
use std::sync::Arc;

/// A registry that routes faults to every handler whose criteria matches.
///
/// Handlers run strongest match first. Handlers with equal match levels run in
/// registration order. A handler registered with `skip_if_handled` is
/// suppressed once any earlier handler in the same call has fired.
///
/// Registration and dispatch may happen concurrently from any number of
/// threads. Clones share the same registry.
///
/// # Example
/// ```ignore
/// let dispatcher = Dispatcher::new();
/// dispatcher.register_strict(AppKind::IllegalArgument, |fault: &AppFault| {
///     metrics::bad_input(fault);
/// });
/// dispatcher
///     .with_handler(AppKind::Exception)
///     .instance_of()
///     .action(LoggingAction::named("fallback"))
///     .skip_if_handled()
///     .add()?;
///
/// dispatcher.handle(&fault)?;
/// ```
pub struct Dispatcher<E: Fault> {
    registry: Arc<Registry<E>>,
}

impl<E: Fault> Dispatcher<E> {
    /// Create a dispatcher with no handlers.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
        }
    }

    /// Start building a handler declared for `kind`.
    pub fn with_handler(&self, kind: E::Kind) -> HandlerBuilder<'_, E> {
        HandlerBuilder::new(self).kind(kind)
    }

    /// Start building a handler whose kind is set later with
    /// [`HandlerBuilder::kind`].
    pub fn handler(&self) -> HandlerBuilder<'_, E> {
        HandlerBuilder::new(self)
    }

    /// Register a handler.
    pub fn register<C, A>(&self, kind: E::Kind, criteria: C, action: A, skip_if_handled: bool)
    where
        C: Criteria<E>,
        A: Action<E>,
    {
        self.publish(HandlerEntry::new(
            kind,
            Box::new(criteria),
            Box::new(action),
            skip_if_handled,
            None,
        ));
    }

    /// Register a handler for faults of exactly `kind`.
    pub fn register_strict<A: Action<E>>(&self, kind: E::Kind, action: A) {
        self.register(kind, ExactTypeMatch, action, false);
    }

    /// Register a handler for faults of `kind` or any of its sub-kinds.
    pub fn register_instance_of<A: Action<E>>(&self, kind: E::Kind, action: A) {
        self.register(kind, InstanceOf, action, false);
    }

    pub(crate) fn publish(&self, entry: HandlerEntry<E>) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                kind = ?entry.kind(),
                name = entry.name().unwrap_or("-"),
                skip_if_handled = entry.skips_if_handled(),
                "registering fault handler"
            );
        }
        self.registry.push(entry);
    }

    /// Dispatch `fault` to every matching handler.
    ///
    /// Fails with [`DispatchError::InvalidArgument`] when no fault is given;
    /// the registry is not consulted in that case. The first failing action
    /// aborts the call with [`DispatchError::Action`].
    pub fn handle<'a>(
        &self,
        fault: impl Into<Option<&'a E>>,
    ) -> Result<DispatchReport, DispatchError>
    where
        E: 'a,
    {
        let fault = fault.into().ok_or(DispatchError::InvalidArgument)?;
        let snapshot = self.registry.snapshot();

        let mut matched: Vec<(MatchLevel, &HandlerEntry<E>)> = snapshot
            .iter()
            .filter_map(|entry| {
                let level = entry.evaluate(fault);
                level.is_match().then_some((level, &**entry))
            })
            .collect();
        if matched.is_empty() {
            return Ok(DispatchReport::unmatched());
        }
        // Stable: equal levels keep registration order.
        matched.sort_by(|a, b| b.0.cmp(&a.0));

        let mut report = DispatchReport {
            matched: matched.len(),
            ..DispatchReport::default()
        };
        let mut problem = Problem::new(fault);
        for (level, entry) in matched {
            let ran = entry.run(&mut problem)?;
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(
                    name = entry.name().unwrap_or("-"),
                    declared = ?entry.kind(),
                    %level,
                    ran,
                    "fault handler visited"
                );
            }
            #[cfg(not(feature = "tracing"))]
            {
                let _ = level;
            }
            if ran {
                report.executed += 1;
            } else {
                report.skipped += 1;
            }
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                kind = ?fault.kind(),
                matched = report.matched,
                executed = report.executed,
                skipped = report.skipped,
                "fault dispatched"
            );
        }
        Ok(report)
    }

    /// The handlers registered so far, in registration order.
    pub fn handlers(&self) -> Snapshot<E> {
        self.registry.snapshot()
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Fault> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Fault> Clone for Dispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<E: Fault> std::fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.len())
            .finish()
    }
}
