//! Tests for the shell collaborators: settings, quota, presence, gesture
//! classification, the restart flow, and view projections.

use acesup::{
    Card, ClickClassifier, CounterError, DECK_SIZE, DailyPlayers, DailyQuota, Game, GameOptions,
    GestureIntent, Guidance, HintMode, HintView, KeyValueStore, MemoryCounter, MemoryStore,
    PlayerCounter, Rank, RestartOutcome, RestartPrompt, Settings, Suit, check_in, deck_stack,
    guidance, hints, player_id, restart_game,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_with_piles(piles: [Vec<Card>; 4]) -> Game {
    Game::from_parts(GameOptions::default(), 1, Vec::new(), piles)
}

/// A board of four lone aces over the given deck remainder.
fn aces_board(deck: Vec<Card>) -> Game {
    Game::from_parts(
        GameOptions::default(),
        1,
        deck,
        [
            vec![card(Suit::Spades, Rank::Ace)],
            vec![card(Suit::Hearts, Rank::Ace)],
            vec![card(Suit::Diamonds, Rank::Ace)],
            vec![card(Suit::Clubs, Rank::Ace)],
        ],
    )
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(5)
}

/// A counter whose backend is always down.
struct FailingCounter;

impl PlayerCounter for FailingCounter {
    fn record_visit(&mut self, _date: &str, _player: &str) -> Result<u64, CounterError> {
        Err(CounterError::Unavailable)
    }

    fn daily_count(&self, _date: &str) -> Result<u64, CounterError> {
        Err(CounterError::Unavailable)
    }
}

#[test]
fn settings_default_when_store_is_empty() {
    let store = MemoryStore::new();
    let settings = Settings::load(&store);
    assert_eq!(settings.hint_mode, HintMode::Show);
    assert!(!settings.colorful_suits);
}

#[test]
fn settings_round_trip_through_the_store() {
    let mut store = MemoryStore::new();
    let settings = Settings {
        hint_mode: HintMode::Exists,
        colorful_suits: true,
    };
    settings.save(&mut store);

    assert_eq!(store.get("hintMode").as_deref(), Some("exists"));
    assert_eq!(store.get("colorfulSuits").as_deref(), Some("true"));
    assert_eq!(Settings::load(&store), settings);
}

#[test]
fn settings_tolerate_garbage_values() {
    let mut store = MemoryStore::new();
    store.set("hintMode", "sideways");
    store.set("colorfulSuits", "yes");

    let settings = Settings::load(&store);
    assert_eq!(settings.hint_mode, HintMode::Show);
    assert!(!settings.colorful_suits);
}

#[test]
fn hint_mode_cycle_visits_every_mode() {
    let start = HintMode::Show;
    let second = start.cycled();
    let third = second.cycled();
    assert_eq!(second, HintMode::Off);
    assert_eq!(third, HintMode::Exists);
    assert_eq!(third.cycled(), start);
}

#[test]
fn quota_counts_games_per_date() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(10);

    quota.record_game(&mut store, "2024-06-01");
    quota.record_game(&mut store, "2024-06-01");

    assert_eq!(quota.games_played(&store, "2024-06-01"), 2);
    assert_eq!(quota.games_played(&store, "2024-06-02"), 0);
    assert_eq!(quota.remaining(&store, "2024-06-01"), Some(8));
    assert!(quota.has_quota_left(&store, "2024-06-02"));
}

#[test]
fn quota_runs_out_at_the_limit() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(2);
    let date = "2024-06-01";

    assert!(quota.has_quota_left(&store, date));
    quota.record_game(&mut store, date);
    assert!(quota.has_quota_left(&store, date));
    quota.record_game(&mut store, date);

    assert!(!quota.has_quota_left(&store, date));
    assert_eq!(quota.remaining(&store, date), Some(0));

    // recording past the limit keeps remaining pinned at zero
    quota.record_game(&mut store, date);
    assert_eq!(quota.remaining(&store, date), Some(0));
}

#[test]
fn unlimited_quota_never_runs_out_and_never_writes() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::unlimited();

    quota.record_game(&mut store, "2024-06-01");
    assert!(quota.has_quota_left(&store, "2024-06-01"));
    assert_eq!(quota.remaining(&store, "2024-06-01"), None);
    assert_eq!(quota.games_played(&store, "2024-06-01"), 0);
    assert!(store.is_empty());
}

#[test]
fn quota_follows_game_options() {
    let store = MemoryStore::new();

    let limited = DailyQuota::from_options(&GameOptions::default().with_daily_quota(1));
    assert_eq!(limited.remaining(&store, "d"), Some(1));

    let unlimited = DailyQuota::from_options(&GameOptions::default().with_unlimited_play(true));
    assert_eq!(unlimited.remaining(&store, "d"), None);
}

#[test]
fn quota_ignores_a_corrupt_count() {
    let mut store = MemoryStore::new();
    store.set("gamesPlayed_2024-06-01", "many");

    let quota = DailyQuota::new(10);
    assert_eq!(quota.games_played(&store, "2024-06-01"), 0);
    assert!(quota.has_quota_left(&store, "2024-06-01"));
}

#[test]
fn classifier_pairs_rapid_same_pile_clicks() {
    let mut clicks = ClickClassifier::default();
    assert_eq!(clicks.observe(1, 100), GestureIntent::SingleClick(1));
    assert_eq!(clicks.observe(1, 399), GestureIntent::DoubleClick(1));
    // the pair is consumed; a third rapid click starts over
    assert_eq!(clicks.observe(1, 450), GestureIntent::SingleClick(1));
}

#[test]
fn classifier_window_is_exclusive() {
    let mut clicks = ClickClassifier::new(300);
    assert_eq!(clicks.observe(0, 0), GestureIntent::SingleClick(0));
    // exactly the window apart is too late
    assert_eq!(clicks.observe(0, 300), GestureIntent::SingleClick(0));
    assert_eq!(clicks.observe(0, 599), GestureIntent::DoubleClick(0));
}

#[test]
fn classifier_does_not_pair_across_piles() {
    let mut clicks = ClickClassifier::default();
    assert_eq!(clicks.observe(0, 100), GestureIntent::SingleClick(0));
    assert_eq!(clicks.observe(1, 150), GestureIntent::SingleClick(1));
    assert_eq!(clicks.observe(1, 200), GestureIntent::DoubleClick(1));
}

#[test]
fn classifier_reset_forgets_the_pending_click() {
    let mut clicks = ClickClassifier::default();
    clicks.observe(2, 100);
    clicks.reset();
    assert_eq!(clicks.observe(2, 120), GestureIntent::SingleClick(2));
}

#[test]
fn classifier_honors_the_configured_window() {
    let options = GameOptions::default().with_double_click_window(100);
    let mut clicks = ClickClassifier::from_options(&options);
    assert_eq!(clicks.window_ms(), 100);

    assert_eq!(clicks.observe(3, 0), GestureIntent::SingleClick(3));
    assert_eq!(clicks.observe(3, 99), GestureIntent::DoubleClick(3));
}

#[test]
fn player_id_is_created_once_and_reused() {
    let mut store = MemoryStore::new();

    let first = player_id(&mut store, &mut rng());
    assert_eq!(first.len(), 32);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));

    // a different rng does not matter once the id is stored
    let second = player_id(&mut store, &mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn check_in_counts_the_first_player() {
    let mut store = MemoryStore::new();
    let mut counter = MemoryCounter::new();

    let players = check_in(&mut store, &mut counter, &mut rng(), "2024-06-01");
    assert_eq!(players, DailyPlayers::First);
    assert_eq!(
        store.get("visitedToday_2024-06-01").as_deref(),
        Some("true")
    );
    assert_eq!(counter.daily_count("2024-06-01"), Ok(1));

    let id = store.get("playerId").unwrap();
    assert_eq!(counter.stats(&id).unwrap().visit_count, 1);
}

#[test]
fn check_in_twice_counts_the_device_once() {
    let mut store = MemoryStore::new();
    let mut counter = MemoryCounter::new();

    check_in(&mut store, &mut counter, &mut rng(), "2024-06-01");
    let players = check_in(&mut store, &mut counter, &mut rng(), "2024-06-01");

    assert_eq!(players, DailyPlayers::First);
    assert_eq!(counter.daily_count("2024-06-01"), Ok(1));
}

#[test]
fn second_device_increments_the_count() {
    let mut counter = MemoryCounter::new();

    let mut first_device = MemoryStore::new();
    let mut second_device = MemoryStore::new();

    assert_eq!(
        check_in(&mut first_device, &mut counter, &mut rng(), "2024-06-01"),
        DailyPlayers::First
    );
    assert_eq!(
        check_in(
            &mut second_device,
            &mut counter,
            &mut ChaCha8Rng::seed_from_u64(6),
            "2024-06-01"
        ),
        DailyPlayers::Count(2)
    );
}

#[test]
fn new_day_registers_the_device_again() {
    let mut store = MemoryStore::new();
    let mut counter = MemoryCounter::new();

    check_in(&mut store, &mut counter, &mut rng(), "2024-06-01");
    check_in(&mut store, &mut counter, &mut rng(), "2024-06-02");

    let id = store.get("playerId").unwrap();
    let stats = counter.stats(&id).unwrap();
    assert_eq!(stats.first_visit, "2024-06-01");
    assert_eq!(stats.last_visit, "2024-06-02");
    assert_eq!(stats.visit_count, 2);
}

#[test]
fn failed_service_degrades_to_unknown_and_retries_later() {
    let mut store = MemoryStore::new();

    let players = check_in(&mut store, &mut FailingCounter, &mut rng(), "2024-06-01");
    assert_eq!(players, DailyPlayers::Unknown);
    // the visit was not marked, so the next check-in tries again
    assert_eq!(store.get("visitedToday_2024-06-01"), None);

    let mut counter = MemoryCounter::new();
    let players = check_in(&mut store, &mut counter, &mut rng(), "2024-06-01");
    assert_eq!(players, DailyPlayers::First);
}

#[test]
fn restart_flow_records_a_game_and_restarts_an_ordinary_board() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(3);
    let mut game = Game::from_parts(
        GameOptions::default(),
        8,
        vec![card(Suit::Hearts, Rank::Eight)],
        [
            vec![card(Suit::Spades, Rank::Five)],
            vec![card(Suit::Hearts, Rank::Nine)],
            vec![],
            vec![],
        ],
    );

    let outcome = restart_game(&mut game, &quota, &mut store, "2024-06-01", false);

    assert_eq!(outcome, RestartOutcome::Restarted { remaining: Some(2) });
    assert_eq!(quota.games_played(&store, "2024-06-01"), 1);
    assert_eq!(game.deck_remaining(), DECK_SIZE);
    assert!(game.piles().iter().all(|pile| pile.is_empty()));
}

#[test]
fn restart_flow_refuses_when_the_quota_is_spent() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(1);
    quota.record_game(&mut store, "2024-06-01");

    let mut game = Game::new(GameOptions::default(), 8);
    game.deal().unwrap();
    let piles_before = game.piles().clone();

    let outcome = restart_game(&mut game, &quota, &mut store, "2024-06-01", false);

    // the refusal burns no quota and touches no game state
    assert_eq!(outcome, RestartOutcome::QuotaExhausted);
    assert_eq!(quota.games_played(&store, "2024-06-01"), 1);
    assert_eq!(game.piles(), &piles_before);
    assert_eq!(game.deck_remaining(), DECK_SIZE - 4);
}

#[test]
fn restart_flow_demands_confirmation_on_a_perfect_position() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(3);

    // deck spent: the board is a won game
    let mut won = aces_board(Vec::new());
    assert_eq!(
        restart_game(&mut won, &quota, &mut store, "2024-06-01", false),
        RestartOutcome::NeedsConfirmation(RestartPrompt::GameWon)
    );
    // declining left the board up and the day's count alone
    assert_eq!(quota.games_played(&store, "2024-06-01"), 0);
    assert_eq!(won.score(), 4);
    assert!(won.is_perfect_position());

    // cards left to deal: the aces are just up early
    let mut early = aces_board(vec![card(Suit::Hearts, Rank::Eight)]);
    assert_eq!(
        restart_game(&mut early, &quota, &mut store, "2024-06-01", false),
        RestartOutcome::NeedsConfirmation(RestartPrompt::AcesShowing)
    );
}

#[test]
fn restart_flow_confirmed_records_then_restarts() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(3);
    let mut game = aces_board(Vec::new());

    let outcome = restart_game(&mut game, &quota, &mut store, "2024-06-01", true);

    assert_eq!(outcome, RestartOutcome::Restarted { remaining: Some(2) });
    assert_eq!(quota.games_played(&store, "2024-06-01"), 1);
    assert_eq!(game.deck_remaining(), DECK_SIZE);
    assert!(game.discarded().is_empty());
}

#[test]
fn restart_flow_quota_gate_outranks_the_confirmation() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::new(1);
    quota.record_game(&mut store, "2024-06-01");

    let mut game = aces_board(Vec::new());
    let outcome = restart_game(&mut game, &quota, &mut store, "2024-06-01", true);

    assert_eq!(outcome, RestartOutcome::QuotaExhausted);
    assert!(game.is_perfect_position());
}

#[test]
fn restart_flow_in_unlimited_mode_reports_no_remaining() {
    let mut store = MemoryStore::new();
    let quota = DailyQuota::unlimited();
    let mut game = Game::new(GameOptions::default(), 8);

    let outcome = restart_game(&mut game, &quota, &mut store, "2024-06-01", false);

    assert_eq!(outcome, RestartOutcome::Restarted { remaining: None });
    assert!(store.is_empty());
}

#[test]
fn guidance_prefers_discards() {
    let mut game = game_with_piles([
        vec![card(Suit::Spades, Rank::Five)],
        vec![card(Suit::Spades, Rank::Nine)],
        vec![],
        vec![],
    ]);
    game.select(0).unwrap();
    assert_eq!(guidance(&game), Some(Guidance::DiscardAvailable));
}

#[test]
fn guidance_prompts_placing_the_selection() {
    let mut game = game_with_piles([
        vec![card(Suit::Diamonds, Rank::Three), card(Suit::Clubs, Rank::Six)],
        vec![card(Suit::Spades, Rank::Nine)],
        vec![],
        vec![],
    ]);
    game.select(0).unwrap();
    assert_eq!(guidance(&game), Some(Guidance::PlaceSelection));
}

#[test]
fn guidance_ignores_a_selection_with_no_open_pile() {
    // a selection on a full table has nowhere to go
    let mut game = Game::from_parts(
        GameOptions::default(),
        1,
        vec![card(Suit::Hearts, Rank::Eight)],
        [
            vec![card(Suit::Diamonds, Rank::Three)],
            vec![card(Suit::Spades, Rank::Nine)],
            vec![card(Suit::Clubs, Rank::Six)],
            vec![card(Suit::Hearts, Rank::Two)],
        ],
    );
    game.select(0).unwrap();

    assert_eq!(guidance(&game), Some(Guidance::DealNext));
}

#[test]
fn guidance_suggests_selecting_when_a_pile_is_open() {
    let game = game_with_piles([
        vec![card(Suit::Diamonds, Rank::Three), card(Suit::Clubs, Rank::Six)],
        vec![card(Suit::Spades, Rank::Nine)],
        vec![],
        vec![],
    ]);
    assert_eq!(guidance(&game), Some(Guidance::SelectForMove));
}

#[test]
fn guidance_falls_back_to_dealing() {
    // a bare table has nothing to select, so the prompt is to deal
    let fresh = Game::new(GameOptions::default(), 4);
    assert_eq!(guidance(&fresh), Some(Guidance::DealNext));

    // full table with nothing to do but deal
    let stuck = Game::from_parts(
        GameOptions::default(),
        1,
        vec![card(Suit::Hearts, Rank::Eight)],
        [
            vec![card(Suit::Spades, Rank::Five)],
            vec![card(Suit::Hearts, Rank::Nine)],
            vec![card(Suit::Diamonds, Rank::Three)],
            vec![card(Suit::Clubs, Rank::Two)],
        ],
    );
    assert_eq!(guidance(&stuck), Some(Guidance::DealNext));
}

#[test]
fn guidance_ends_with_the_game() {
    let game = game_with_piles([
        vec![card(Suit::Spades, Rank::Ace)],
        vec![card(Suit::Hearts, Rank::Ace)],
        vec![card(Suit::Diamonds, Rank::Ace)],
        vec![card(Suit::Clubs, Rank::Ace)],
    ]);
    assert_eq!(guidance(&game), None);
}

#[test]
fn hints_follow_the_mode() {
    let game = game_with_piles([
        vec![card(Suit::Spades, Rank::Five)],
        vec![card(Suit::Spades, Rank::Nine)],
        vec![card(Suit::Diamonds, Rank::Three)],
        vec![],
    ]);

    assert_eq!(hints(&game, HintMode::Off), HintView::Off);
    assert_eq!(
        hints(&game, HintMode::Exists),
        HintView::Exists { available: true }
    );
    assert_eq!(
        hints(&game, HintMode::Show),
        HintView::Show {
            piles: [true, false, false, false]
        }
    );
}

#[test]
fn hints_report_when_nothing_is_discardable() {
    let game = game_with_piles([
        vec![card(Suit::Diamonds, Rank::Three), card(Suit::Clubs, Rank::Six)],
        vec![card(Suit::Spades, Rank::Nine)],
        vec![],
        vec![],
    ]);
    assert_eq!(
        hints(&game, HintMode::Exists),
        HintView::Exists { available: false }
    );
}

#[test]
fn deck_stack_caps_at_five() {
    let full = Game::new(GameOptions::default(), 12);
    assert_eq!(deck_stack(&full), 5);

    let low = Game::from_parts(
        GameOptions::default(),
        1,
        vec![
            card(Suit::Spades, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
        ],
        [vec![], vec![], vec![], vec![]],
    );
    assert_eq!(deck_stack(&low), 3);

    let empty = game_with_piles([
        vec![card(Suit::Spades, Rank::Ace)],
        vec![card(Suit::Hearts, Rank::Ace)],
        vec![card(Suit::Diamonds, Rank::Ace)],
        vec![card(Suit::Clubs, Rank::Ace)],
    ]);
    assert_eq!(deck_stack(&empty), 0);
}
