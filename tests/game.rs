//! Game integration tests.

#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use twentyfour::{
    ActionError, AttemptOutcome, Card, DECK_SIZE, DECK_SIZE_WITHOUT_FACE_CARDS, EventKind,
    ExpressionError, Game, GameEvent, GameOptions, GameState, StartError, Suit,
};

const ALL_KINDS: [EventKind; 9] = [
    EventKind::DeckChanged,
    EventKind::PlayersChanged,
    EventKind::DiscardsChanged,
    EventKind::CurrentRoundChanged,
    EventKind::GameFinished,
    EventKind::PointScored,
    EventKind::AttemptIncorrect,
    EventKind::AttemptInvalid,
    EventKind::RoundSkipped,
];

const fn card(suit: Suit, number: u8) -> Card {
    Card::new(suit, number)
}

fn four_of(number: u8) -> Vec<Card> {
    Suit::ALL.iter().map(|&suit| card(suit, number)).collect()
}

fn record_all(game: &mut Game) -> Rc<RefCell<Vec<EventKind>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in ALL_KINDS {
        let log = Rc::clone(&log);
        game.on(kind, move |event| log.borrow_mut().push(event.kind()));
    }
    log
}

fn started(seed: u64) -> Game {
    let mut game = Game::new(GameOptions::default(), seed);
    game.start().unwrap();
    game
}

fn sorted_numbers(cards: &[Card]) -> Vec<u8> {
    let mut numbers: Vec<u8> = cards.iter().map(|c| c.number).collect();
    numbers.sort_unstable();
    numbers
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default();
    assert!(!options.include_face_cards);
    assert_eq!(options.deck_size(), DECK_SIZE_WITHOUT_FACE_CARDS);

    let options = options.with_include_face_cards(true);
    assert!(options.include_face_cards);
    assert_eq!(options.deck_size(), DECK_SIZE);
}

#[test]
fn start_draws_round_and_emits_in_order() {
    let mut game = Game::new(GameOptions::default(), 1);
    let log = record_all(&mut game);
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.current_round().is_none());

    game.start().unwrap();

    assert_eq!(game.state(), GameState::RoundActive);
    assert_eq!(
        *log.borrow(),
        vec![
            EventKind::CurrentRoundChanged,
            EventKind::DeckChanged,
            EventKind::DiscardsChanged,
        ]
    );

    let round = *game.current_round().unwrap();
    assert_eq!(game.deck_remaining().len(), DECK_SIZE_WITHOUT_FACE_CARDS - 4);
    assert_eq!(game.discards(), round.cards());
    for card in round.cards() {
        assert!(!game.deck_remaining().contains(card));
    }
}

#[test]
fn face_cards_option_builds_full_deck() {
    let options = GameOptions::default().with_include_face_cards(true);
    let mut game = Game::new(options, 3);
    assert_eq!(game.deck_remaining().len(), DECK_SIZE);

    game.start().unwrap();
    assert_eq!(game.deck_remaining().len(), DECK_SIZE - 4);
}

#[test]
fn start_twice_is_rejected() {
    let mut game = started(2);
    assert_eq!(game.start().unwrap_err(), StartError::AlreadyStarted);
}

#[test]
fn actions_before_start_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 2);
    let log = record_all(&mut game);

    assert_eq!(
        game.attempt_solution("ann", "1+2+3+4").unwrap_err(),
        ActionError::NotStarted
    );
    assert_eq!(game.skip_round("ann").unwrap_err(), ActionError::NotStarted);
    assert!(log.borrow().is_empty());
}

#[test]
fn same_seed_draws_same_rounds() {
    let mut a = started(99);
    let mut b = started(99);
    assert_eq!(a.current_round(), b.current_round());

    for _ in 0..5 {
        assert_eq!(a.skip_round("x").unwrap(), b.skip_round("x").unwrap());
    }
}

#[test]
fn invalid_attempt_emits_attempt_invalid() {
    let mut game = started(4);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    game.on(EventKind::AttemptInvalid, move |event| {
        if let GameEvent::AttemptInvalid { player_id, expr } = event {
            sink.borrow_mut().push(((*player_id).to_owned(), (*expr).to_owned()));
        }
    });
    let round = *game.current_round().unwrap();

    let outcome = game.attempt_solution("fakeplayer", "1 + 1").unwrap();

    assert_eq!(
        outcome,
        AttemptOutcome::Invalid(ExpressionError::TooFewNumbers { found: 2 })
    );
    assert_eq!(
        *seen.borrow(),
        vec![("fakeplayer".to_owned(), "1 + 1".to_owned())]
    );
    assert_eq!(game.current_round(), Some(&round));
    assert!(game.players().is_empty());
}

#[test]
fn incorrect_attempt_emits_value() {
    let mut game = started(5);
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    game.on(EventKind::AttemptIncorrect, move |event| {
        if let GameEvent::AttemptIncorrect { value, .. } = event {
            sink.borrow_mut().push(*value);
        }
    });

    let numbers = game.current_round().unwrap().numbers();
    let text = numbers
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" - ");
    let expected = numbers[1..]
        .iter()
        .fold(f64::from(numbers[0]), |acc, &n| acc - f64::from(n));

    let outcome = game.attempt_solution("fakeplayer", &text).unwrap();

    assert_eq!(outcome, AttemptOutcome::Incorrect(expected));
    assert_eq!(*values.borrow(), vec![expected]);
}

#[test]
fn all_ones_subtraction_is_incorrect() {
    let mut game = started(6);
    game.replace_deck(four_of(1));
    game.skip_round("setup").unwrap();

    let log = record_all(&mut game);
    let outcome = game.attempt_solution("ann", "1-1-1-1").unwrap();

    assert_eq!(outcome, AttemptOutcome::Incorrect(-2.0));
    assert_eq!(*log.borrow(), vec![EventKind::AttemptIncorrect]);
}

#[test]
fn correct_attempt_scores_and_redraws() {
    let mut game = started(7);
    game.replace_deck(four_of(6));
    game.skip_round("setup").unwrap();
    game.replace_deck(four_of(3));
    let round = *game.current_round().unwrap();
    assert_eq!(round.numbers(), [6, 6, 6, 6]);

    let log = record_all(&mut game);
    let scored = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&scored);
    game.on(EventKind::PointScored, move |event| {
        if let GameEvent::PointScored { player } = event {
            sink.borrow_mut().push((player.id().to_owned(), player.score(), player.cards().len()));
        }
    });

    let outcome = game.attempt_solution("ann", "6 + 6 + 6 + 6").unwrap();

    assert_eq!(outcome, AttemptOutcome::Scored { score: 1 });
    assert_eq!(*scored.borrow(), vec![("ann".to_owned(), 1, 4)]);
    assert_eq!(
        *log.borrow(),
        vec![
            EventKind::PointScored,
            EventKind::CurrentRoundChanged,
            EventKind::DeckChanged,
            EventKind::DiscardsChanged,
        ]
    );

    let player = game.player("ann").unwrap();
    assert_eq!(player.cards(), round.cards());
    assert_eq!(game.current_round().unwrap().numbers(), [3, 3, 3, 3]);
}

#[test]
fn scoring_the_last_round_finishes_the_game() {
    let mut game = started(8);
    game.replace_deck(vec![
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 2),
        card(Suit::Spades, 3),
        card(Suit::Clubs, 4),
    ]);
    game.skip_round("setup").unwrap();
    assert_eq!(sorted_numbers(game.current_round().unwrap().cards()), [1, 2, 3, 4]);

    let log = record_all(&mut game);
    let outcome = game.attempt_solution("bob", "4*3*2*1").unwrap();

    assert!(outcome.is_scored());
    assert_eq!(
        *log.borrow(),
        vec![EventKind::PointScored, EventKind::GameFinished]
    );
    assert_eq!(game.state(), GameState::Finished);
    assert!(game.current_round().is_none());
    assert_eq!(game.player("bob").unwrap().score(), 1);
}

#[test]
fn short_deck_finishes_instead_of_partial_round() {
    let mut game = started(9);
    game.replace_deck(vec![card(Suit::Hearts, 5)]);
    let discards_before = game.discards().len();
    let log = record_all(&mut game);

    assert_eq!(game.skip_round("ann").unwrap(), None);

    assert_eq!(*log.borrow(), vec![EventKind::GameFinished]);
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.deck_remaining().len(), 1);
    assert_eq!(game.discards().len(), discards_before);
    assert_eq!(
        game.attempt_solution("ann", "1+2+3+4").unwrap_err(),
        ActionError::GameFinished
    );
    assert_eq!(game.skip_round("ann").unwrap_err(), ActionError::GameFinished);
}

#[test]
fn skip_round_emits_draw_events_then_skipped() {
    let mut game = started(10);
    let log = record_all(&mut game);
    let skipped = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&skipped);
    game.on(EventKind::RoundSkipped, move |event| {
        if let GameEvent::RoundSkipped { player_id, round } = event {
            sink.borrow_mut().push(((*player_id).to_owned(), **round));
        }
    });

    let old = *game.current_round().unwrap();
    let new = game.skip_round("ann").unwrap().unwrap();

    assert_ne!(old, new);
    assert_eq!(game.current_round(), Some(&new));
    assert_eq!(*skipped.borrow(), vec![("ann".to_owned(), new)]);
    assert_eq!(
        *log.borrow(),
        vec![
            EventKind::CurrentRoundChanged,
            EventKind::DeckChanged,
            EventKind::DiscardsChanged,
            EventKind::RoundSkipped,
        ]
    );
    assert_eq!(game.discards().len(), 8);
    assert_eq!(&game.discards()[..4], old.cards());
}

#[test]
fn skipping_through_whole_deck_partitions_cards() {
    let mut game = started(11);
    let finished = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&finished);
    game.on(EventKind::GameFinished, move |_| *sink.borrow_mut() += 1);

    let rounds = DECK_SIZE_WITHOUT_FACE_CARDS / 4;
    for _ in 1..rounds {
        assert!(game.skip_round("ann").unwrap().is_some());
        assert_eq!(
            game.deck_remaining().len() + game.discards().len(),
            DECK_SIZE_WITHOUT_FACE_CARDS
        );
    }
    assert!(game.deck_remaining().is_empty());
    assert_eq!(*finished.borrow(), 0);

    assert_eq!(game.skip_round("ann").unwrap(), None);
    assert_eq!(*finished.borrow(), 1);

    let mut all = game.discards().to_vec();
    all.sort_by_key(|c| (c.number, c.suit as u8));
    all.dedup();
    assert_eq!(all.len(), DECK_SIZE_WITHOUT_FACE_CARDS);
}

#[test]
fn restart_resets_players_and_draws() {
    let mut game = started(12);
    game.replace_deck(four_of(6));
    game.skip_round("setup").unwrap();
    game.attempt_solution("ann", "6*6-6-6").unwrap();
    game.add_player("bob");
    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.player("ann").unwrap().score(), 1);

    let log = record_all(&mut game);
    let snapshot = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshot);
    game.on(EventKind::PlayersChanged, move |event| {
        if let GameEvent::PlayersChanged { players } = event {
            sink.borrow_mut().extend(
                players
                    .iter()
                    .map(|p| (p.id().to_owned(), p.score(), p.cards().len())),
            );
        }
    });

    game.restart();

    assert_eq!(
        *log.borrow(),
        vec![
            EventKind::CurrentRoundChanged,
            EventKind::DeckChanged,
            EventKind::DiscardsChanged,
            EventKind::PlayersChanged,
        ]
    );
    assert_eq!(
        *snapshot.borrow(),
        vec![("ann".to_owned(), 0, 0), ("bob".to_owned(), 0, 0)]
    );
    assert_eq!(game.state(), GameState::RoundActive);
    assert!(game.current_round().is_some());
    assert_eq!(game.discards().len(), 4);
    assert_eq!(game.deck_remaining().len(), DECK_SIZE_WITHOUT_FACE_CARDS - 4);
}

#[test]
fn add_player_is_idempotent() {
    let mut game = started(13);
    game.add_player("ann");
    game.replace_deck(four_of(6));
    game.skip_round("setup").unwrap();
    game.attempt_solution("ann", "6+6+6+6").unwrap();

    let player = game.add_player("ann");
    assert_eq!(player.score(), 1);
    assert_eq!(game.players().len(), 1);
}

#[test]
fn off_removes_listener() {
    let mut game = Game::new(GameOptions::default(), 14);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = game.on(EventKind::DeckChanged, move |_| *sink.borrow_mut() += 1);

    game.start().unwrap();
    assert_eq!(*count.borrow(), 1);

    assert!(!game.off(EventKind::DiscardsChanged, id));
    assert!(game.off(EventKind::DeckChanged, id));
    assert!(!game.off(EventKind::DeckChanged, id));

    game.skip_round("ann").unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn listeners_run_in_registration_order() {
    let mut game = Game::new(GameOptions::default(), 15);
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let sink = Rc::clone(&order);
        game.on(EventKind::CurrentRoundChanged, move |_| sink.borrow_mut().push(tag));
    }

    game.start().unwrap();
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}
