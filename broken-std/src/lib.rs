//! # broken-std
//!
//! Standard implementations for the broken error-handler dispatcher.
//!
//! This crate provides:
//! - **Standard criteria**: [`InstanceOf`], [`ExactTypeMatch`], [`MatchEverything`], [`StandardCriteria`]
//! - **Task unwrapping**: [`unwrap_task_failure`]
//! - **Standard actions**: [`LoggingAction`](actions::LoggingAction)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use broken_core;

// Modules
pub mod actions;
pub mod criteria;
pub mod testing;
pub mod unwrap;

pub use criteria::{ExactTypeMatch, InstanceOf, MatchEverything, StandardCriteria};
pub use unwrap::unwrap_task_failure;
