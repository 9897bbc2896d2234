//! Outcome of a solution attempt.

use crate::error::ExpressionError;

/// What happened to a submitted expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttemptOutcome {
    /// The submission was rejected before or during evaluation.
    Invalid(ExpressionError),
    /// The submission was valid but did not make 24.
    Incorrect(f64),
    /// The submission made 24 and the player scored.
    Scored {
        /// The player's score after the point.
        score: u32,
    },
}

impl AttemptOutcome {
    /// Returns whether the attempt scored a point.
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        matches!(self, Self::Scored { .. })
    }
}
