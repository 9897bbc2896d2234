use crate::error::ActionError;
use crate::event::GameEvent;
use crate::expression::evaluate;
use crate::result::AttemptOutcome;
use crate::round::Round;
use crate::solver::TARGET;

use super::{Game, GameState};

impl Game {
    fn ensure_round_active(&self) -> Result<Round, ActionError> {
        match (self.state, self.current) {
            (GameState::RoundActive, Some(round)) => Ok(round),
            (GameState::Finished, _) => Err(ActionError::GameFinished),
            _ => Err(ActionError::NotStarted),
        }
    }

    /// Checks a player's expression against the round in play.
    ///
    /// A rejected submission emits [`GameEvent::AttemptInvalid`]; one that
    /// evaluates to anything other than exactly 24 emits
    /// [`GameEvent::AttemptIncorrect`]. A correct one awards the player a
    /// point and the round's cards (registering the player if needed), emits
    /// [`GameEvent::PointScored`], then draws the next round.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in play because the game has not been
    /// started or has finished.
    pub fn attempt_solution(
        &mut self,
        player_id: &str,
        text: &str,
    ) -> Result<AttemptOutcome, ActionError> {
        let round = self.ensure_round_active()?;

        let value = match evaluate(text, &round) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(player = player_id, expr = text, error = %err, "invalid attempt");
                self.events.emit(&GameEvent::AttemptInvalid {
                    player_id,
                    expr: text,
                });
                return Ok(AttemptOutcome::Invalid(err));
            }
        };

        #[expect(
            clippy::float_cmp,
            reason = "a solution must make exactly 24 with no tolerance"
        )]
        let correct = value == TARGET;
        if !correct {
            tracing::debug!(player = player_id, expr = text, value, "incorrect attempt");
            self.events.emit(&GameEvent::AttemptIncorrect {
                player_id,
                expr: text,
                value,
            });
            return Ok(AttemptOutcome::Incorrect(value));
        }

        let index = self.player_index_or_insert(player_id);
        let player = &mut self.players[index];
        player.award(&round);
        let score = player.score();
        tracing::info!(player = player_id, score, %round, "point scored");

        self.events.emit(&GameEvent::PointScored {
            player: &self.players[index],
        });

        self.draw();

        Ok(AttemptOutcome::Scored { score })
    }

    /// Discards the round in play and draws another.
    ///
    /// The round is not checked for solvability. Emits the draw events
    /// followed by [`GameEvent::RoundSkipped`] with the new round; if the deck
    /// is exhausted only [`GameEvent::GameFinished`] is emitted.
    ///
    /// Returns the new round, or `None` if the game finished.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in play because the game has not been
    /// started or has finished.
    pub fn skip_round(&mut self, player_id: &str) -> Result<Option<Round>, ActionError> {
        let skipped = self.ensure_round_active()?;
        tracing::debug!(player = player_id, round = %skipped, "round skipped");

        if !self.draw() {
            return Ok(None);
        }

        let round = self.current;
        if let Some(round) = &round {
            self.events
                .emit(&GameEvent::RoundSkipped { player_id, round });
        }
        Ok(round)
    }
}
