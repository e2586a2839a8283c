use acesup::{
    Card, ClickOutcome, Game, GameOptions, GameStatus, Guidance, HintMode, HintView, Pile, Suit,
    deck_stack, guidance, hints,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    hint_mode: HintMode,
    colorful_suits: bool,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
            hint_mode: HintMode::default(),
            colorful_suits: false,
        }
    }

    /// Replaces the engine with a freshly seeded one.
    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    /// Reshuffles and starts over with the engine's own random stream.
    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn deal(&mut self) -> Result<u32, JsValue> {
        self.game.deal().map(|dealt| dealt as u32).map_err(js_err)
    }

    pub fn discard(&mut self, pile: u32) -> Result<JsValue, JsValue> {
        let card = self.game.discard(pile as usize).map_err(js_err)?;
        to_js_value(&self.card_to_js(card))
    }

    pub fn move_card(&mut self, from: u32, to: u32) -> Result<(), JsValue> {
        self.game
            .move_card(from as usize, to as usize)
            .map_err(js_err)
    }

    pub fn discard_via_exposure(&mut self, pile: u32) -> Result<JsValue, JsValue> {
        let card = self
            .game
            .discard_via_exposure(pile as usize)
            .map_err(js_err)?;
        to_js_value(&self.card_to_js(card))
    }

    pub fn select(&mut self, pile: u32) -> Result<(), JsValue> {
        self.game.select(pile as usize).map_err(js_err)
    }

    pub fn clear_selection(&mut self) {
        self.game.clear_selection();
    }

    pub fn single_click(&mut self, pile: u32) -> Result<JsValue, JsValue> {
        let outcome = self.game.single_click(pile as usize).map_err(js_err)?;
        to_js_value(&self.outcome_to_js(outcome))
    }

    pub fn double_click(&mut self, pile: u32) -> Result<JsValue, JsValue> {
        let outcome = self.game.double_click(pile as usize).map_err(js_err)?;
        to_js_value(&self.outcome_to_js(outcome))
    }

    /// Sets the hint mode from its stored spelling (`"off"`, `"exists"`,
    /// `"show"`); anything else falls back to the default.
    pub fn set_hint_mode(&mut self, mode: &str) {
        self.hint_mode = HintMode::from_key(mode);
    }

    pub fn hint_mode(&self) -> String {
        self.hint_mode.as_key().to_string()
    }

    pub fn set_colorful_suits(&mut self, colorful: bool) {
        self.colorful_suits = colorful;
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    pub fn score(&self) -> u32 {
        self.game.score() as u32
    }

    pub fn is_perfect_position(&self) -> bool {
        self.game.is_perfect_position()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let game = &self.game;

        let hint = match hints(game, self.hint_mode) {
            HintView::Off => JsHint {
                mode: "off",
                available: false,
                piles: [false; 4],
            },
            HintView::Exists { available } => JsHint {
                mode: "exists",
                available,
                piles: [false; 4],
            },
            HintView::Show { piles } => JsHint {
                mode: "show",
                available: piles.iter().any(|&flag| flag),
                piles,
            },
        };

        let piles = game
            .piles()
            .iter()
            .enumerate()
            .map(|(index, pile)| self.pile_to_js(index, pile))
            .collect();

        let snapshot = Snapshot {
            status: status_to_str(game.status()),
            score: game.score() as u32,
            deck_remaining: game.deck_remaining() as u32,
            deck_stack: deck_stack(game) as u32,
            piles,
            selection: game.selection().map(|pile| pile as u32),
            discarded: game.discarded().len() as u32,
            guidance: guidance(game).map(guidance_to_str),
            hint,
            perfect_position: game.is_perfect_position(),
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn pile_to_js(&self, index: usize, pile: &Pile) -> JsPile {
        JsPile {
            cards: pile
                .cards()
                .iter()
                .map(|&card| self.card_to_js(card))
                .collect(),
            removable: self.game.can_discard(index),
            exposable: self.game.can_discard_via_exposure(index),
        }
    }

    fn card_to_js(&self, card: Card) -> JsCard {
        JsCard {
            suit: suit_to_str(card.suit),
            rank: card.rank.label(),
            value: card.value(),
            symbol: card.suit.symbol(),
            color_class: color_class(card.suit, self.colorful_suits),
        }
    }

    fn outcome_to_js(&self, outcome: ClickOutcome) -> JsClickOutcome {
        match outcome {
            ClickOutcome::Discarded(card) => JsClickOutcome {
                kind: "Discarded",
                card: Some(self.card_to_js(card)),
                from: None,
                to: None,
                pile: None,
            },
            ClickOutcome::Moved { from, to } => JsClickOutcome {
                kind: "Moved",
                card: None,
                from: Some(from as u32),
                to: Some(to as u32),
                pile: None,
            },
            ClickOutcome::Selected(pile) => JsClickOutcome {
                kind: "Selected",
                card: None,
                from: None,
                to: None,
                pile: Some(pile as u32),
            },
            ClickOutcome::Deselected(pile) => JsClickOutcome {
                kind: "Deselected",
                card: None,
                from: None,
                to: None,
                pile: Some(pile as u32),
            },
            ClickOutcome::Ignored => JsClickOutcome {
                kind: "Ignored",
                card: None,
                from: None,
                to: None,
                pile: None,
            },
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    status: &'static str,
    score: u32,
    deck_remaining: u32,
    deck_stack: u32,
    piles: Vec<JsPile>,
    selection: Option<u32>,
    discarded: u32,
    guidance: Option<&'static str>,
    hint: JsHint,
    perfect_position: bool,
}

#[derive(Serialize)]
struct JsPile {
    cards: Vec<JsCard>,
    removable: bool,
    exposable: bool,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    symbol: &'static str,
    color_class: &'static str,
}

#[derive(Serialize)]
struct JsHint {
    mode: &'static str,
    available: bool,
    piles: [bool; 4],
}

#[derive(Serialize)]
struct JsClickOutcome {
    kind: &'static str,
    card: Option<JsCard>,
    from: Option<u32>,
    to: Option<u32>,
    pile: Option<u32>,
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn color_class(suit: Suit, colorful: bool) -> &'static str {
    if colorful {
        match suit {
            Suit::Spades => "suit-spades",
            Suit::Hearts => "suit-hearts",
            Suit::Diamonds => "suit-diamonds",
            Suit::Clubs => "suit-clubs",
        }
    } else if suit.is_red() {
        "red"
    } else {
        "black"
    }
}

fn status_to_str(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "InProgress",
        GameStatus::Won => "Won",
        GameStatus::Lost => "Lost",
    }
}

fn guidance_to_str(step: Guidance) -> &'static str {
    match step {
        Guidance::DiscardAvailable => "DiscardAvailable",
        Guidance::PlaceSelection => "PlaceSelection",
        Guidance::SelectForMove => "SelectForMove",
        Guidance::DealNext => "DealNext",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
