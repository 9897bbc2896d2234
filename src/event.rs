//! Game events and observer registration.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::player::Player;
use crate::round::Round;

/// A notification emitted by [`Game`](crate::Game).
///
/// Payloads borrow from the game and are only valid for the duration of the
/// observer call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent<'a> {
    /// The remaining deck changed.
    DeckChanged {
        /// Cards still in the deck.
        deck: &'a [Card],
    },
    /// Player records were reset.
    PlayersChanged {
        /// Every player, in registration order.
        players: &'a [Player],
    },
    /// Cards were moved to the discard pile.
    DiscardsChanged {
        /// Every card drawn so far this session.
        discards: &'a [Card],
    },
    /// A new round was drawn.
    CurrentRoundChanged {
        /// The round now in play.
        round: &'a Round,
    },
    /// The deck ran out; the game is over.
    GameFinished,
    /// A player solved the round.
    PointScored {
        /// The player after the point was awarded.
        player: &'a Player,
    },
    /// A well-formed submission did not make 24.
    AttemptIncorrect {
        /// Who submitted.
        player_id: &'a str,
        /// The submitted text.
        expr: &'a str,
        /// What the submission evaluated to.
        value: f64,
    },
    /// A submission was rejected.
    AttemptInvalid {
        /// Who submitted.
        player_id: &'a str,
        /// The submitted text.
        expr: &'a str,
    },
    /// A player skipped the round and a new one was drawn.
    RoundSkipped {
        /// Who skipped.
        player_id: &'a str,
        /// The round now in play.
        round: &'a Round,
    },
}

impl GameEvent<'_> {
    /// Returns the kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::DeckChanged { .. } => EventKind::DeckChanged,
            Self::PlayersChanged { .. } => EventKind::PlayersChanged,
            Self::DiscardsChanged { .. } => EventKind::DiscardsChanged,
            Self::CurrentRoundChanged { .. } => EventKind::CurrentRoundChanged,
            Self::GameFinished => EventKind::GameFinished,
            Self::PointScored { .. } => EventKind::PointScored,
            Self::AttemptIncorrect { .. } => EventKind::AttemptIncorrect,
            Self::AttemptInvalid { .. } => EventKind::AttemptInvalid,
            Self::RoundSkipped { .. } => EventKind::RoundSkipped,
        }
    }
}

/// The kind of a [`GameEvent`], used as the key for observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`GameEvent::DeckChanged`].
    DeckChanged,
    /// See [`GameEvent::PlayersChanged`].
    PlayersChanged,
    /// See [`GameEvent::DiscardsChanged`].
    DiscardsChanged,
    /// See [`GameEvent::CurrentRoundChanged`].
    CurrentRoundChanged,
    /// See [`GameEvent::GameFinished`].
    GameFinished,
    /// See [`GameEvent::PointScored`].
    PointScored,
    /// See [`GameEvent::AttemptIncorrect`].
    AttemptIncorrect,
    /// See [`GameEvent::AttemptInvalid`].
    AttemptInvalid,
    /// See [`GameEvent::RoundSkipped`].
    RoundSkipped,
}

/// Handle returned when registering an observer, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GameEvent<'_>)>;

/// Observers keyed by event kind, called in registration order.
#[derive(Default)]
pub(crate) struct EventBus {
    next_id: u64,
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
}

impl EventBus {
    pub(crate) fn on(&mut self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push((id, listener));
        id
    }

    pub(crate) fn off(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let Some(listeners) = self.listeners.get_mut(&kind) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    pub(crate) fn emit(&mut self, event: &GameEvent<'_>) {
        if let Some(listeners) = self.listeners.get_mut(&event.kind()) {
            for (_, listener) in listeners.iter_mut() {
                listener(event);
            }
        }
    }
}
