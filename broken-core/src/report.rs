//! Dispatch summaries.

/// The result of one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Handlers whose criteria returned a level above `NO_MATCH`.
    pub matched: usize,
    /// Actions that were invoked.
    pub executed: usize,
    /// Actions suppressed because an earlier handler had already fired.
    pub skipped: usize,
}

impl DispatchReport {
    /// A report for a dispatch where nothing matched.
    pub const fn unmatched() -> Self {
        Self {
            matched: 0,
            executed: 0,
            skipped: 0,
        }
    }

    /// Whether any action ran.
    pub const fn handled(&self) -> bool {
        self.executed > 0
    }
}
