//! # expeditions-engine: Expeditions Card Game Core
//!
//! A deterministic rules engine for the two-to-five player expeditions card
//! game: players play cards onto ascending same-color expeditions or a shared
//! discard pile, draw from the deck or the discard, and score each round by
//! a risk/bonus formula over several rounds.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Color, CardKind, Card) and deck variants
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`piles`] - Stack-discipline piles: hands, discard, expeditions, boards
//! - [`dealer`] - Dealer button, turn order and dealing distribution
//! - [`scorer`] - Per-round ledgers and winner selection
//! - [`rules`] - Play legality and the round-closing condition
//! - [`game`] - Game state machine (plays, draws, round lifecycle)
//! - [`player`] - Player strategy contract
//! - [`engine`] - Turn loop and renderer contract
//! - [`logger`] - Event history and JSONL persistence
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use expeditions_engine::game::{GameConfig, GameState};
//! use expeditions_engine::player::{DrawFrom, PlayTo};
//!
//! let config = GameConfig { seed: Some(7), dealer_seat: Some(0), ..GameConfig::default() };
//! let mut gs = GameState::new(config).expect("valid config");
//!
//! // Seat 1 sits left of the dealer and acts first
//! let seat = gs.turn_seat();
//! let card = gs.hand(seat).cards()[0];
//! gs.play_card_to(seat, card, PlayTo::Discard).expect("card is in hand");
//! gs.draw_from(seat, DrawFrom::Deck).expect("deck has cards");
//! assert_eq!(gs.turn_seat(), 0);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles and random seat choices derive from one seed:
//!
//! ```rust
//! use expeditions_engine::cards::DeckVariant;
//! use expeditions_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(DeckVariant::Classic, 42);
//! let mut deck2 = Deck::new_with_seed(DeckVariant::Classic, 42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(deck1.cards(), deck2.cards());
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod piles;
pub mod player;
pub mod rules;
pub mod scorer;
