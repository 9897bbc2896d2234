//! Game state types.

/// Game state.
///
/// ```text
/// NotStarted -> RoundActive <-> RoundActive (redraw) -> Finished
/// ```
///
/// `Finished` is left only through [`Game::restart`](crate::Game::restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created but not started.
    NotStarted,
    /// A round is in play.
    RoundActive,
    /// The deck ran out of cards for a full round.
    Finished,
}
