//! # Criteria
//!
//! A criteria decides whether, and how strongly, a fault matches the kind a
//! handler was declared for. Criteria are pure: they are evaluated afresh on
//! every dispatch and must not keep state between calls.
//!
//! The standard criteria (`InstanceOf`, `ExactTypeMatch`, `MatchEverything`)
//! live in `broken-std`. Any closure of the form
//! `Fn(E::Kind, &E) -> MatchLevel` is a criteria as well.

use crate::{kind::Fault, level::MatchLevel};

/// Decides how strongly a fault matches a declared kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Criteria` for `{E}`",
    label = "missing `Criteria` implementation",
    note = "Use a standard criteria or a closure `Fn(Kind, &{E}) -> MatchLevel`."
)]
pub trait Criteria<E: Fault>: Send + Sync + 'static {
    /// Evaluate `fault` against the handler's `declared` kind.
    fn evaluate(&self, declared: E::Kind, fault: &E) -> MatchLevel;
}

// Blanket impl for closures
impl<E, F> Criteria<E> for F
where
    E: Fault,
    F: Fn(E::Kind, &E) -> MatchLevel + Send + Sync + 'static,
{
    fn evaluate(&self, declared: E::Kind, fault: &E) -> MatchLevel {
        (self)(declared, fault)
    }
}

/// A type-erased criteria.
pub type BoxCriteria<E> = Box<dyn Criteria<E>>;
