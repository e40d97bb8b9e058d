//! # broken-core
//!
//! Core traits for the broken error-handler dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! applications and extensions that only need to describe their faults, write
//! criteria or write actions, without the full `broken` dispatcher.
//!
//! # Building Blocks
//!
//! ## Kinds and Faults ([`ErrorKind`], [`Fault`])
//!
//! The application declares a closed hierarchy of error kinds and a fault type
//! that reports its exact kind and optional cause. Two kinds may be marked as
//! [`TaskWrapper`]s, the containers an async runtime puts around real failures.
//!
//! ## Ranking ([`MatchLevel`], [`Criteria`])
//!
//! A criteria maps `(declared kind, fault)` to a [`MatchLevel`]. Zero excludes
//! the handler; higher levels run earlier.
//!
//! ## Reaction ([`Action`])
//!
//! The side effect run when a handler fires. Actions see the original fault.
//!
//! ## Per-call State ([`Problem`], [`DispatchReport`])
//!
//! A [`Problem`] carries the "already handled" flag through one dispatch; a
//! [`DispatchReport`] summarizes what happened.
//!
//! # Error Types
//!
//! - [`BrokenError`] - Top-level error type
//! - [`ConfigError`] - Incomplete handler registrations
//! - [`DispatchError`] - Dispatch failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod criteria;
mod error;
mod kind;
mod level;
mod problem;
mod report;

// Re-exports
pub use action::{Action, BoxAction, IntoActionResult};
pub use criteria::{BoxCriteria, Criteria};
pub use error::{BoxError, BrokenError, ConfigError, DispatchError};
pub use kind::{ErrorKind, Fault, TaskWrapper};
pub use level::MatchLevel;
pub use problem::Problem;
pub use report::DispatchReport;
