//! Error types for game operations and expression checking.

use thiserror::Error;

/// Reasons a submitted expression is rejected.
///
/// Every variant corresponds to an invalid submission; none of them is fatal
/// to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// Fewer than four numbers appear in the submission.
    #[error("expected four numbers, found {found}")]
    TooFewNumbers {
        /// How many numbers were found.
        found: usize,
    },
    /// A run of three or more digits appears in the submission.
    #[error("numbers have at most two digits")]
    NumberTooLong,
    /// The numbers used do not match the round's cards exactly once each.
    #[error("numbers do not match the cards in play")]
    NumberMismatch,
    /// A character outside digits, `+ - * / ( )` and whitespace was found.
    #[error("character {0:?} is not allowed")]
    ForbiddenCharacter(char),
    /// The arithmetic is not well formed.
    #[error("malformed expression at offset {position}")]
    Malformed {
        /// Byte offset of the offending token, or the length at end of input.
        position: usize,
    },
    /// Parentheses or signs are nested deeper than the evaluator allows.
    #[error("expression is nested too deeply")]
    NestingTooDeep,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game has already been started.
    #[error("game has already been started")]
    AlreadyStarted,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has not been started.
    #[error("game has not been started")]
    NotStarted,
    /// The deck is exhausted and the game is over.
    #[error("game is finished")]
    GameFinished,
}
