//! CLI 24 game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use twentyfour::{AttemptOutcome, EventKind, Game, GameEvent, GameOptions, GameState};

const PLAYER: &str = "you";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("24 CLI example");
    println!("Make 24 from the four cards using + - * / and parentheses.");
    println!("Commands: skip, hint, score, restart, q");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let face_cards = matches!(
        prompt_line("Include face cards? (y/n): ").as_str(),
        "y" | "yes"
    );
    let options = GameOptions::default().with_include_face_cards(face_cards);
    let mut game = Game::new(options, seed);
    register_printers(&mut game);

    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    loop {
        if game.state() == GameState::Finished {
            println!("Game over!");
            print_scoreboard(&game);
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    game.restart();
                    continue;
                }
                _ => break,
            }
        }

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => break,
            "skip" => {
                if let Err(err) = game.skip_round(PLAYER) {
                    println!("Skip error: {err}");
                }
            }
            "hint" => match game.current_round().map(|round| round.solutions()) {
                Some(solutions) if !solutions.is_empty() => {
                    println!("{} solution(s), for example {}", solutions.len(), solutions[0]);
                }
                Some(_) => println!("No solution. Try skip."),
                None => println!("No round in play."),
            },
            "score" => print_scoreboard(&game),
            "restart" => game.restart(),
            "" => {}
            text => match game.attempt_solution(PLAYER, text) {
                Ok(AttemptOutcome::Scored { score }) => println!("Score: {score}"),
                Ok(AttemptOutcome::Invalid(err)) => println!("({err})"),
                Ok(AttemptOutcome::Incorrect(_)) => {}
                Err(err) => println!("Attempt error: {err}"),
            },
        }
    }
}

fn register_printers(game: &mut Game) {
    game.on(EventKind::CurrentRoundChanged, |event| {
        if let GameEvent::CurrentRoundChanged { round } = event {
            println!("\nHere are your cards: {round}");
        }
    });
    game.on(EventKind::DeckChanged, |event| {
        if let GameEvent::DeckChanged { deck } = event {
            println!("{} cards left in the deck.", deck.len());
        }
    });
    game.on(EventKind::PointScored, |event| {
        if let GameEvent::PointScored { player } = event {
            println!("{} got it!", player.id());
        }
    });
    game.on(EventKind::AttemptIncorrect, |event| {
        if let GameEvent::AttemptIncorrect { expr, value, .. } = event {
            println!("{expr} evaluates to {value}");
        }
    });
    game.on(EventKind::AttemptInvalid, |event| {
        if let GameEvent::AttemptInvalid { expr, .. } = event {
            println!("{expr} is not valid");
        }
    });
    game.on(EventKind::RoundSkipped, |event| {
        if let GameEvent::RoundSkipped { player_id, .. } = event {
            println!("{player_id} skipped the round.");
        }
    });
    game.on(EventKind::PlayersChanged, |_| println!("Scores reset."));
}

fn print_scoreboard(game: &Game) {
    if game.players().is_empty() {
        println!("Nobody has scored yet.");
    }
    for player in game.players() {
        println!(
            "{} has {} points, {} cards",
            player.id(),
            player.score(),
            player.cards().len()
        );
    }
    println!(
        "There are {} cards left to play.",
        game.deck_remaining().len()
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // End of input quits.
    if !matches!(io::stdin().read_line(&mut input), Ok(n) if n > 0) {
        return String::from("q");
    }
    input.trim().to_lowercase()
}
