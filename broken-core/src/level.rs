//! Match levels: how strongly a fault matches a handler.

use std::fmt;

/// The ranked strength of a criteria match.
///
/// Levels are totally ordered by strength. [`MatchLevel::NO_MATCH`] (zero)
/// excludes a handler from dispatch; every other level includes it, and
/// stronger levels run first.
///
/// Custom levels slot into the same ordering:
///
/// ```rust,ignore
/// // Stronger than an instance-of match, weaker than an exact one.
/// const CLOSE_MATCH: MatchLevel = MatchLevel::new(150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MatchLevel(u32);

impl MatchLevel {
    /// Not matching. Handlers at this level are never invoked.
    pub const NO_MATCH: MatchLevel = MatchLevel(0);
    /// The fault is an instance of a sub-kind of the declared kind.
    pub const BLANKET_MATCH: MatchLevel = MatchLevel(100);
    /// The fault's exact kind is the declared kind.
    pub const PERFECT_MATCH: MatchLevel = MatchLevel(200);

    /// Create a level with the given strength.
    pub const fn new(strength: u32) -> Self {
        Self(strength)
    }

    /// The numeric strength of this level.
    pub const fn strength(self) -> u32 {
        self.0
    }

    /// Returns `true` if this level admits a handler into dispatch.
    pub const fn is_match(self) -> bool {
        self.0 > 0
    }

    /// Returns `self` if `condition` holds, otherwise [`MatchLevel::NO_MATCH`].
    pub const fn when(self, condition: bool) -> Self {
        if condition { self } else { Self::NO_MATCH }
    }
}

impl From<u32> for MatchLevel {
    fn from(strength: u32) -> Self {
        Self(strength)
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NO_MATCH => f.write_str("no match"),
            Self::BLANKET_MATCH => f.write_str("blanket match"),
            Self::PERFECT_MATCH => f.write_str("perfect match"),
            Self(strength) => write!(f, "match({strength})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_levels_are_ordered() {
        assert!(MatchLevel::PERFECT_MATCH > MatchLevel::BLANKET_MATCH);
        assert!(MatchLevel::BLANKET_MATCH > MatchLevel::NO_MATCH);
        assert_eq!(MatchLevel::NO_MATCH.strength(), 0);
        assert_eq!(MatchLevel::default(), MatchLevel::NO_MATCH);
    }

    #[test]
    fn test_custom_level_slots_between() {
        let close = MatchLevel::new(150);
        assert!(close.is_match());
        assert!(close > MatchLevel::BLANKET_MATCH && close < MatchLevel::PERFECT_MATCH);
        assert_eq!(close.to_string(), "match(150)");
    }

    #[test]
    fn test_when() {
        assert_eq!(MatchLevel::PERFECT_MATCH.when(true), MatchLevel::PERFECT_MATCH);
        assert_eq!(MatchLevel::PERFECT_MATCH.when(false), MatchLevel::NO_MATCH);
        assert!(!MatchLevel::NO_MATCH.is_match());
    }
}
