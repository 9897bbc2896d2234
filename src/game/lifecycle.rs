use rand::seq::index;

use crate::card::{Card, build_deck};
use crate::error::StartError;
use crate::event::GameEvent;
use crate::round::{ROUND_SIZE, Round};

use super::{Game, GameState};

impl Game {
    /// Builds the deck and draws the first round.
    ///
    /// Call once per session; use [`restart`](Self::restart) to play again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been started.
    pub fn start(&mut self) -> Result<(), StartError> {
        if self.state != GameState::NotStarted {
            return Err(StartError::AlreadyStarted);
        }

        self.deck = build_deck(self.options.include_face_cards);
        self.draw();

        Ok(())
    }

    /// Resets every player, rebuilds the deck and draws a new round.
    ///
    /// Players keep their ids but lose their score and won cards. The discard
    /// pile is cleared along with the deck. Allowed in any state.
    pub fn restart(&mut self) {
        tracing::info!(players = self.players.len(), "restarting game");

        for player in &mut self.players {
            player.reset();
        }
        self.deck = build_deck(self.options.include_face_cards);
        self.discards.clear();
        self.current = None;

        self.draw();

        self.events.emit(&GameEvent::PlayersChanged {
            players: &self.players,
        });
    }

    /// Draws a new round, or finishes the game if the deck cannot fill one.
    ///
    /// Returns `true` if a round was drawn.
    pub(super) fn draw(&mut self) -> bool {
        if self.deck.len() < ROUND_SIZE {
            self.state = GameState::Finished;
            self.current = None;
            tracing::info!(
                remaining = self.deck.len(),
                discarded = self.discards.len(),
                "deck exhausted, game finished"
            );
            self.events.emit(&GameEvent::GameFinished);
            return false;
        }

        let picked = index::sample(&mut self.rng, self.deck.len(), ROUND_SIZE);
        let cards: [Card; ROUND_SIZE] = core::array::from_fn(|k| self.deck[picked.index(k)]);
        let round = Round::new(cards);

        self.deck.retain(|card| !round.contains(card));
        self.discards.extend_from_slice(round.cards());
        self.current = Some(round);
        self.state = GameState::RoundActive;

        tracing::debug!(%round, remaining = self.deck.len(), "round drawn");

        self.events
            .emit(&GameEvent::CurrentRoundChanged { round: &round });
        self.events.emit(&GameEvent::DeckChanged { deck: &self.deck });
        self.events.emit(&GameEvent::DiscardsChanged {
            discards: &self.discards,
        });

        true
    }
}
