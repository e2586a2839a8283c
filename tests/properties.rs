//! Randomized property tests for card conservation, operation atomicity,
//! and the exposure shortcut equivalence.

use std::collections::HashSet;

use proptest::prelude::*;

use acesup::{Card, DECK_SIZE, Game, GameOptions, Rank, Suit, deck};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One attempted player action; indices may be arbitrary junk.
#[derive(Debug, Clone, Copy)]
enum Action {
    Deal,
    Discard(usize),
    Move(usize, usize),
    Exposure(usize),
    Click(usize),
    DoubleClick(usize),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Deal),
        (0..6usize).prop_map(Action::Discard),
        (0..6usize, 0..6usize).prop_map(|(from, to)| Action::Move(from, to)),
        (0..6usize).prop_map(Action::Exposure),
        (0..6usize).prop_map(Action::Click),
        (0..6usize).prop_map(Action::DoubleClick),
    ]
}

type Snapshot = (Vec<Vec<Card>>, usize, Vec<Card>, Option<usize>);

fn snapshot(game: &Game) -> Snapshot {
    (
        game.piles().iter().map(|pile| pile.cards().to_vec()).collect(),
        game.deck_remaining(),
        game.discarded().to_vec(),
        game.selection(),
    )
}

fn cards_everywhere(game: &Game) -> usize {
    game.deck_remaining()
        + game.piles().iter().map(acesup::Pile::len).sum::<usize>()
        + game.discarded().len()
}

proptest! {
    #[test]
    fn cards_are_conserved_under_any_play(
        seed in any::<u64>(),
        actions in proptest::collection::vec(action_strategy(), 1..120),
    ) {
        let mut game = Game::new(GameOptions::default(), seed);

        for action in actions {
            let before = snapshot(&game);
            let discarded_before = game.discarded().len();

            let applied = match action {
                Action::Deal => game.deal().is_ok(),
                Action::Discard(pile) => {
                    let ok = game.discard(pile).is_ok();
                    if ok {
                        prop_assert_eq!(game.discarded().len(), discarded_before + 1);
                    }
                    ok
                }
                Action::Move(from, to) => {
                    let ok = game.move_card(from, to).is_ok();
                    if ok {
                        prop_assert_eq!(game.discarded().len(), discarded_before);
                    }
                    ok
                }
                Action::Exposure(pile) => {
                    let ok = game.discard_via_exposure(pile).is_ok();
                    if ok {
                        prop_assert_eq!(game.discarded().len(), discarded_before + 1);
                    }
                    ok
                }
                Action::Click(pile) => game.single_click(pile).is_ok(),
                Action::DoubleClick(pile) => game.double_click(pile).is_ok(),
            };

            // a rejected action leaves no trace
            if !applied {
                prop_assert_eq!(snapshot(&game), before);
            }
            prop_assert_eq!(cards_everywhere(&game), DECK_SIZE);
        }
    }

    #[test]
    fn exposure_shortcut_equals_move_then_discard(
        suit_index in 0..4usize,
        (first, second) in (0..13usize, 0..13usize)
            .prop_filter("distinct ranks", |(first, second)| first != second),
        offsuit_step in 0..3usize,
        filler_rank in 0..13usize,
        target in 2..4usize,
    ) {
        let (low, high) = if first < second { (first, second) } else { (second, first) };
        let suit = Suit::ALL[suit_index];
        let offsuit = Suit::ALL[(suit_index + 1 + offsuit_step) % 4];

        let layout = || {
            [
                vec![Card::new(suit, Rank::ALL[high]), Card::new(suit, Rank::ALL[low])],
                vec![Card::new(offsuit, Rank::ALL[filler_rank])],
                vec![],
                vec![],
            ]
        };

        let mut shortcut = Game::from_parts(GameOptions::default(), 1, Vec::new(), layout());
        prop_assert!(shortcut.discard_via_exposure(0).is_ok());

        let mut longhand = Game::from_parts(GameOptions::default(), 1, Vec::new(), layout());
        prop_assert!(longhand.move_card(0, target).is_ok());
        prop_assert!(longhand.discard(target).is_ok());

        prop_assert_eq!(snapshot(&shortcut), snapshot(&longhand));
        prop_assert_eq!(shortcut.score(), longhand.score());
        prop_assert_eq!(shortcut.status(), longhand.status());
    }

    #[test]
    fn any_seed_shuffles_a_complete_deck(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = deck::shuffled_deck(&mut rng);
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let distinct: HashSet<(Suit, Rank)> =
            deck.iter().map(|card| (card.suit, card.rank)).collect();
        prop_assert_eq!(distinct.len(), DECK_SIZE);
    }
}

#[test]
fn shuffle_spreads_a_card_over_every_position() {
    let target = Card::new(Suit::Spades, Rank::Ace);
    let mut counts = [0usize; DECK_SIZE];

    for seed in 0..2_000u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = deck::shuffled_deck(&mut rng);
        let position = deck.iter().position(|card| *card == target).unwrap();
        counts[position] += 1;
    }

    // about 38 expected per position; zero or a pile-up means a broken
    // shuffle, not bad luck
    assert!(counts.iter().all(|&count| count > 0));
    assert!(counts.iter().all(|&count| count < 150));
}
