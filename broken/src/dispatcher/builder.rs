//! Builder for registering a single handler.

use super::{Dispatcher, registry::HandlerEntry};
use broken_core::{Action, BoxAction, BoxCriteria, ConfigError, Criteria, Fault};
use broken_std::{ExactTypeMatch, InstanceOf};

/// Builder for one handler registration.
///
/// Obtained from [`Dispatcher::with_handler`] (or [`Dispatcher::handler`] when
/// the kind is chosen later). Nothing is published until [`add`] succeeds.
///
/// # Example
/// ```ignore
/// dispatcher
///     .with_handler(AppKind::Exception)
///     .instance_of()
///     .action(|fault: &AppFault| report(fault))
///     .skip_if_handled()
///     .named("fallback")
///     .add()?;
/// ```
///
/// [`add`]: HandlerBuilder::add
#[must_use = "a handler is only registered once `add` is called"]
pub struct HandlerBuilder<'d, E: Fault> {
    dispatcher: &'d Dispatcher<E>,
    kind: Option<E::Kind>,
    criteria: Option<BoxCriteria<E>>,
    action: Option<BoxAction<E>>,
    skip_if_handled: bool,
    name: Option<&'static str>,
}

impl<'d, E: Fault> HandlerBuilder<'d, E> {
    pub(crate) fn new(dispatcher: &'d Dispatcher<E>) -> Self {
        Self {
            dispatcher,
            kind: None,
            criteria: None,
            action: None,
            skip_if_handled: false,
            name: None,
        }
    }

    /// Set the declared kind.
    pub fn kind(mut self, kind: E::Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the criteria.
    pub fn criteria<C: Criteria<E>>(mut self, criteria: C) -> Self {
        self.criteria = Some(Box::new(criteria));
        self
    }

    /// Match the declared kind exactly ([`ExactTypeMatch`]).
    pub fn strict(self) -> Self {
        self.criteria(ExactTypeMatch)
    }

    /// Match the declared kind and its sub-kinds ([`InstanceOf`]).
    pub fn instance_of(self) -> Self {
        self.criteria(InstanceOf)
    }

    /// Set the action.
    pub fn action<A: Action<E>>(mut self, action: A) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Skip this handler if an earlier handler already fired for the fault.
    pub fn skip_if_handled(self) -> Self {
        self.set_skip_if_handled(true)
    }

    /// Set whether this handler skips once the fault is handled.
    pub fn set_skip_if_handled(mut self, skip_if_handled: bool) -> Self {
        self.skip_if_handled = skip_if_handled;
        self
    }

    /// Name the handler in log records.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Validate the configuration and register the handler.
    pub fn add(self) -> Result<(), ConfigError> {
        let kind = self.kind.ok_or(ConfigError::MissingKind)?;
        let criteria = self.criteria.ok_or(ConfigError::MissingCriteria)?;
        let action = self.action.ok_or(ConfigError::MissingAction)?;

        self.dispatcher.publish(HandlerEntry::new(
            kind,
            criteria,
            action,
            self.skip_if_handled,
            self.name,
        ));
        Ok(())
    }
}
