//! Game engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, build_deck};
use crate::event::{EventBus, EventKind, GameEvent, ListenerId};
use crate::options::GameOptions;
use crate::player::Player;
use crate::round::Round;

mod actions;
mod lifecycle;
pub mod state;

pub use state::GameState;

/// A 24 game session that manages the deck, rounds, players, and events.
///
/// The game owns the remaining deck, the discard pile, the round in play and
/// every player record. Operations run to completion and notify observers
/// inline, in a fixed order, before they return.
///
/// Every card of the session is either still in the deck or in the discard
/// pile, and the round in play is always part of the discard pile.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Cards not yet drawn.
    deck: Vec<Card>,
    /// Every card drawn this session.
    discards: Vec<Card>,
    /// The round in play.
    current: Option<Round>,
    /// Player records in registration order.
    players: Vec<Player>,
    /// Registered observers.
    events: EventBus,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The deck is built immediately but no round is drawn until
    /// [`start`](Self::start) is called.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyfour::{Game, GameOptions};
    ///
    /// let options = GameOptions::default().with_include_face_cards(true);
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: GameState::NotStarted,
            deck: build_deck(options.include_face_cards),
            discards: Vec::new(),
            current: None,
            players: Vec::new(),
            events: EventBus::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the round in play.
    ///
    /// Returns `None` before the game starts and after it finishes.
    #[must_use]
    pub const fn current_round(&self) -> Option<&Round> {
        self.current.as_ref()
    }

    /// Returns the cards still in the deck.
    #[must_use]
    pub fn deck_remaining(&self) -> &[Card] {
        &self.deck
    }

    /// Returns every card drawn this session, in draw order.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns every player, in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Registers an empty player.
    ///
    /// Registering an id that already exists returns the existing record
    /// unchanged.
    pub fn add_player(&mut self, id: &str) -> &Player {
        let index = self.player_index_or_insert(id);
        &self.players[index]
    }

    fn player_index_or_insert(&mut self, id: &str) -> usize {
        if let Some(index) = self.players.iter().position(|player| player.id() == id) {
            tracing::debug!(player = id, "player already registered");
            return index;
        }
        self.players.push(Player::new(String::from(id)));
        self.players.len() - 1
    }

    /// Replaces the remaining deck.
    ///
    /// Useful for staging a known sequence of rounds. The cards are not
    /// checked against the discard pile.
    pub fn replace_deck(&mut self, cards: Vec<Card>) {
        self.deck = cards;
    }

    /// Registers an observer for one kind of event.
    ///
    /// Observers are called inline, in registration order, while the game is
    /// borrowed; they cannot call back into the game.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyfour::{EventKind, Game, GameEvent, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// game.on(EventKind::CurrentRoundChanged, |event| {
    ///     if let GameEvent::CurrentRoundChanged { round } = event {
    ///         println!("new round: {round}");
    ///     }
    /// });
    /// game.start().unwrap();
    /// ```
    pub fn on<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&GameEvent<'_>) + 'static,
    {
        self.events.on(kind, Box::new(handler))
    }

    /// Removes an observer.
    ///
    /// Returns `false` if no observer with that id is registered for `kind`.
    pub fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.events.off(kind, id)
    }
}
