//! CLI Aces Up example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use acesup::{
    Card, ClickClassifier, ClickError, ClickOutcome, DailyPlayers, DailyQuota, Game, GameOptions,
    GameStatus, GestureIntent, Guidance, HintView, MemoryCounter, MemoryStore, Pile,
    RestartOutcome, RestartPrompt, Settings, Suit, check_in, deck_stack, guidance, hints,
    restart_game,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Aces Up CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    let mut store = MemoryStore::new();
    let mut counter = MemoryCounter::new();
    let mut settings = Settings::load(&store);
    let quota = DailyQuota::from_options(&options);
    // terminal typing is slower than mouse clicks
    let mut clicks = ClickClassifier::new(2_000);

    let day = format!("day-{}", seed / 86_400);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    match check_in(&mut store, &mut counter, &mut rng, &day) {
        DailyPlayers::First => println!("You are the first player today!"),
        DailyPlayers::Count(count) => println!("{count} players have played today."),
        DailyPlayers::Unknown => println!("Player count unavailable."),
    }

    quota.record_game(&mut store, &day);
    println!(
        "Commands: 0-3 click a pile (repeat within 2s to double click), \
         d deal, r restart, h hints, c colors, q quit"
    );

    let started = Instant::now();

    loop {
        print_table(&game, &settings);
        print_status(&game);

        let input = prompt_line("> ");
        match input.as_str() {
            "q" | "quit" => return,
            "d" | "deal" => {
                if let Err(err) = game.deal() {
                    println!("Deal error: {err:?}");
                }
                clicks.reset();
            }
            "r" | "restart" => {
                try_restart(&mut game, quota, &mut store, &day, &mut clicks);
            }
            "h" | "hints" => {
                settings.hint_mode = settings.hint_mode.cycled();
                settings.save(&mut store);
                println!("Hints: {}", settings.hint_mode.as_key());
            }
            "c" | "colors" => {
                settings.colorful_suits = !settings.colorful_suits;
                settings.save(&mut store);
            }
            "0" | "1" | "2" | "3" => {
                let Ok(pile) = input.parse::<usize>() else {
                    continue;
                };
                let now = started.elapsed().as_millis() as u64;
                match clicks.observe(pile, now) {
                    GestureIntent::SingleClick(pile) => {
                        report(game.single_click(pile), &settings);
                    }
                    GestureIntent::DoubleClick(pile) => {
                        report(game.double_click(pile), &settings);
                    }
                }
            }
            "" => {}
            _ => println!(
                "Commands: 0-3 click a pile (repeat within 2s to double click), \
                 d deal, r restart, h hints, c colors, q quit"
            ),
        }
    }
}

fn try_restart(
    game: &mut Game,
    quota: DailyQuota,
    store: &mut MemoryStore,
    day: &str,
    clicks: &mut ClickClassifier,
) {
    let mut outcome = restart_game(game, &quota, store, day, false);

    if let RestartOutcome::NeedsConfirmation(prompt) = outcome {
        let message = match prompt {
            RestartPrompt::GameWon => "Four aces up, that is a win! Really start over? (y/n): ",
            RestartPrompt::AcesShowing => {
                "All four aces are already showing. Really start over? (y/n): "
            }
        };
        if prompt_line(message) != "y" {
            return;
        }
        outcome = restart_game(game, &quota, store, day, true);
    }

    match outcome {
        RestartOutcome::QuotaExhausted => {
            println!("You have played enough for today. Come back tomorrow!");
        }
        RestartOutcome::Restarted { remaining } => {
            clicks.reset();
            match remaining {
                Some(remaining) => println!("New game. {remaining} more today."),
                None => println!("New game."),
            }
        }
        RestartOutcome::NeedsConfirmation(_) => {}
    }
}

fn report(outcome: Result<ClickOutcome, ClickError>, settings: &Settings) {
    match outcome {
        Ok(ClickOutcome::Discarded(card)) => {
            println!("Discarded {}.", format_card(card, settings.colorful_suits));
        }
        Ok(ClickOutcome::Moved { from, to }) => {
            println!("Moved the top card from pile {from} to pile {to}.");
        }
        Ok(ClickOutcome::Selected(pile)) => println!("Picked up the top card of pile {pile}."),
        Ok(ClickOutcome::Deselected(pile)) => println!("Put the card back on pile {pile}."),
        Ok(ClickOutcome::Ignored) => println!("Nothing happens."),
        Err(err) => println!("Click error: {err:?}"),
    }
}

fn print_table(game: &Game, settings: &Settings) {
    let stack = "#".repeat(deck_stack(game));
    println!("\nDeck: {stack} ({} cards left)", game.deck_remaining());

    let hint_view = hints(game, settings.hint_mode);
    for (index, pile) in game.piles().iter().enumerate() {
        let marker = if game.selection() == Some(index) {
            "*"
        } else {
            " "
        };
        let hint = match hint_view {
            HintView::Show { piles } if piles[index] => colorize(" (removable)", "32"),
            _ => String::new(),
        };
        println!(
            "{marker} Pile {index}: {}{hint}",
            format_pile(pile, settings.colorful_suits)
        );
    }

    if let HintView::Exists { available: true } = hint_view {
        println!("A discard is available somewhere.");
    }
}

fn print_status(game: &Game) {
    match game.status() {
        GameStatus::InProgress => {
            if let Some(step) = guidance(game) {
                println!("{}", guidance_line(step));
            }
        }
        GameStatus::Won => println!("{}", colorize("You won! All four aces up.", "32")),
        GameStatus::Lost => println!(
            "Game over. Score {} (four is a win, lower is better).",
            game.score()
        ),
    }
}

const fn guidance_line(step: Guidance) -> &'static str {
    match step {
        Guidance::DiscardAvailable => "Click a lower same-suit card to discard it.",
        Guidance::PlaceSelection => "Click an empty pile to drop the selected card.",
        Guidance::SelectForMove => "Click a top card to move it to an empty pile.",
        Guidance::DealNext => "Deal the next round with 'd'.",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_pile(pile: &Pile, colorful: bool) -> String {
    if pile.is_empty() {
        return "(empty)".to_string();
    }
    pile.cards()
        .iter()
        .map(|&card| format_card(card, colorful))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card, colorful: bool) -> String {
    let code = if colorful {
        match card.suit {
            Suit::Hearts => "31",
            Suit::Diamonds => "33",
            Suit::Clubs => "32",
            Suit::Spades => "34",
        }
    } else if card.suit.is_red() {
        "31"
    } else {
        "90"
    };

    format!(
        "{}{}",
        card.rank.label(),
        colorize(card.suit.symbol(), code)
    )
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
