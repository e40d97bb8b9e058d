//! # broken - Ranked Error Handler Dispatch
//!
//! `broken` routes an error value to every registered handler whose criteria
//! matches it. Handlers are registered independently (logging, metrics,
//! compensation) instead of living in one central `match`.
//!
//! ## How dispatch works
//!
//! 1. Every handler's criteria is evaluated against the fault, producing a
//!    [`MatchLevel`]. `NO_MATCH` handlers are dropped.
//! 2. The rest run strongest match first; equal levels keep registration order.
//! 3. A handler registered with `skip_if_handled` is suppressed once any
//!    earlier handler in the same call has fired.
//! 4. The first failing action aborts the call and its error is returned.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use broken::prelude::*;
//!
//! broken::error_kinds! {
//!     pub enum AppKind {
//!         Exception,
//!         IllegalArgument: Exception,
//!     }
//! }
//!
//! let dispatcher = Dispatcher::<AppFault>::new();
//! dispatcher.register_strict(AppKind::IllegalArgument, |fault: &AppFault| {
//!     eprintln!("bad input: {fault:?}");
//! });
//! dispatcher
//!     .with_handler(AppKind::Exception)
//!     .instance_of()
//!     .action(LoggingAction::named("fallback"))
//!     .skip_if_handled()
//!     .add()?;
//!
//! dispatcher.handle(&fault)?;
//! ```
//!
//! ## Async tasks
//!
//! [`Dispatcher::future_handler`] and [`FailureExt::handle_failure`] unwrap
//! execution/completion wrappers before dispatching a task's failure.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod macros;

pub mod dispatcher;
pub mod future;

pub use broken_core::{
    // Actions
    Action,
    BoxAction,
    // Errors
    BoxError,
    // Criteria
    BoxCriteria,
    BrokenError,
    ConfigError,
    Criteria,
    DispatchError,
    // Per-call state
    DispatchReport,
    // Kinds
    ErrorKind,
    Fault,
    IntoActionResult,
    MatchLevel,
    Problem,
    TaskWrapper,
};

// Standard criteria
pub use broken_std::{
    ExactTypeMatch, InstanceOf, MatchEverything, StandardCriteria, unwrap_task_failure,
};

pub use dispatcher::{Dispatcher, HandlerBuilder, HandlerEntry};
pub use future::FailureExt;

/// Standard action implementations.
pub mod actions {
    #![allow(clippy::wildcard_imports)]
    pub use broken_std::actions::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use broken_std::testing::*;
}

/// Prelude module - common imports for broken.
///
/// # Usage
///
/// ```rust,ignore
/// use broken::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action,
        BoxError,
        ConfigError,
        Criteria,
        DispatchError,
        DispatchReport,
        // Core
        Dispatcher,
        ErrorKind,
        ExactTypeMatch,
        FailureExt,
        Fault,
        InstanceOf,
        MatchEverything,
        MatchLevel,
        StandardCriteria,
        actions::LoggingAction,
    };
}
