//! Error types for broken.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`BrokenError`] - Top-level error type for all broken operations
//! - [`ConfigError`] - Invalid handler configuration, raised at registration
//! - [`DispatchError`] - Errors during fault dispatch

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all broken operations.
#[derive(Error, Debug)]
pub enum BrokenError {
    /// A handler was registered with an incomplete configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// An error occurred during fault dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised when a handler registration is incomplete.
///
/// These are caller bugs and are reported before anything is published to the
/// registry, so a failed registration never affects dispatch.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No error kind was declared for the handler.
    #[error("missing error kind")]
    MissingKind,

    /// No criteria was set for the handler.
    #[error("missing criteria")]
    MissingCriteria,

    /// No action was set for the handler.
    #[error("missing action")]
    MissingAction,
}

/// Errors that can occur while dispatching a fault.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// `handle` was called without a fault.
    #[error("no fault was given to dispatch")]
    InvalidArgument,

    /// A handler action failed. Remaining handlers were not invoked.
    #[error("handler action failed")]
    Action(#[source] BoxError),
}

impl DispatchError {
    /// Returns the action's own error, if this is an action failure.
    pub fn action_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            DispatchError::Action(err) => Some(err.as_ref()),
            DispatchError::InvalidArgument => None,
        }
    }
}

// Convenience conversions
impl From<BoxError> for BrokenError {
    fn from(err: BoxError) -> Self {
        BrokenError::Custom(err)
    }
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Action(err)
    }
}
