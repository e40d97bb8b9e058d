//! Standard criteria.
//!
//! | criteria            | level when matching | matches when                          |
//! |---------------------|---------------------|---------------------------------------|
//! | [`InstanceOf`]      | `BLANKET_MATCH`     | fault kind is the declared kind or below it |
//! | [`ExactTypeMatch`]  | `PERFECT_MATCH`     | fault kind is exactly the declared kind |
//! | [`MatchEverything`] | `PERFECT_MATCH`     | always                                |
//!
//! Because `PERFECT_MATCH` outranks `BLANKET_MATCH`, a [`MatchEverything`]
//! handler runs before every [`InstanceOf`] handler.

use broken_core::{Criteria, ErrorKind, Fault, MatchLevel};

/// Matches faults whose kind is the declared kind or one of its sub-kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstanceOf;

impl<E: Fault> Criteria<E> for InstanceOf {
    fn evaluate(&self, declared: E::Kind, fault: &E) -> MatchLevel {
        MatchLevel::BLANKET_MATCH.when(fault.kind().is_a(declared))
    }
}

/// Matches faults whose kind is exactly the declared kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactTypeMatch;

impl<E: Fault> Criteria<E> for ExactTypeMatch {
    fn evaluate(&self, declared: E::Kind, fault: &E) -> MatchLevel {
        MatchLevel::PERFECT_MATCH.when(fault.kind() == declared)
    }
}

/// Matches every fault, ignoring the declared kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchEverything;

impl MatchEverything {
    /// The level this criteria always returns.
    pub const fn level(&self) -> MatchLevel {
        MatchLevel::PERFECT_MATCH
    }
}

impl<E: Fault> Criteria<E> for MatchEverything {
    fn evaluate(&self, _declared: E::Kind, _fault: &E) -> MatchLevel {
        self.level()
    }
}

/// The closed set of standard criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardCriteria {
    /// See [`InstanceOf`].
    InstanceOf,
    /// See [`ExactTypeMatch`].
    ExactTypeMatch,
    /// See [`MatchEverything`].
    MatchEverything,
}

impl<E: Fault> Criteria<E> for StandardCriteria {
    fn evaluate(&self, declared: E::Kind, fault: &E) -> MatchLevel {
        match self {
            StandardCriteria::InstanceOf => InstanceOf.evaluate(declared, fault),
            StandardCriteria::ExactTypeMatch => ExactTypeMatch.evaluate(declared, fault),
            StandardCriteria::MatchEverything => MatchEverything.evaluate(declared, fault),
        }
    }
}
