use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Color, DeckVariant};
use crate::dealer::{select_random_seat, Dealer};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::logger::GameSnapshot;
use crate::piles::{Discard, ExpeditionBoard, Hand};
use crate::player::{DrawFrom, PlayTo};
use crate::rules::{self, LegalityScope};
use crate::scorer::{Scorer, Winner};

pub const DEFAULT_MAX_ROUNDS: u32 = 3;
pub const DEFAULT_CARDS_PER_PLAYER: usize = 8;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// Table setup for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    pub max_rounds: u32,
    pub cards_per_player: usize,
    pub variant: DeckVariant,
    pub legality: LegalityScope,
    /// Fixed first dealer; a seeded random seat when `None`
    pub dealer_seat: Option<usize>,
    /// RNG seed for shuffles and seat selection; random when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            max_rounds: DEFAULT_MAX_ROUNDS,
            cards_per_player: DEFAULT_CARDS_PER_PLAYER,
            variant: DeckVariant::Classic,
            legality: LegalityScope::AllBoards,
            dealer_seat: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    ///
    /// [`GameError::InvalidConfig`] for out-of-range values and
    /// [`GameError::InsufficientCards`] when a deal would leave the deck empty.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player_count must be {}..={}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            )));
        }
        if self.max_rounds == 0 {
            return Err(GameError::InvalidConfig("max_rounds must be >=1".into()));
        }
        if self.cards_per_player == 0 {
            return Err(GameError::InvalidConfig(
                "cards_per_player must be >=1".into(),
            ));
        }
        if let Some(seat) = self.dealer_seat {
            if seat >= self.player_count {
                return Err(GameError::InvalidConfig(format!(
                    "dealer_seat {} out of range for {} players",
                    seat, self.player_count
                )));
            }
        }
        // the deck must survive the deal or the round is over before it starts
        let needed = self.player_count * self.cards_per_player;
        let available = self.variant.deck_size();
        if needed >= available {
            return Err(GameError::InsufficientCards {
                needed: needed + 1,
                available,
            });
        }
        Ok(())
    }
}

/// Sub-step of the current turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The turn seat must play or discard a card
    AwaitingPlay,
    /// The turn seat has played and must draw; `discarded` bars the discard pile
    AwaitingDraw { discarded: bool },
    /// The round is over and its points have been recorded
    Scored,
}

/// Result of a successful play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayOutcome {
    Expedition(Color),
    Discarded,
}

/// Full table state: piles, dealer, scores and round progress.
///
/// Every card of the variant is in exactly one of the deck, a hand, an
/// expedition or the discard pile at all times.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    seed: u64,
    deck: Deck,
    hands: Vec<Hand>,
    boards: Vec<ExpeditionBoard>,
    discard: Discard,
    dealer: Dealer,
    scorer: Scorer,
    current_round_number: u32,
    phase: TurnPhase,
}

impl GameState {
    /// Creates the game and deals the first round.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut deck = Deck::new_with_seed(config.variant, seed);
        deck.shuffle();
        Self::with_deck(config, seed, deck)
    }

    /// Creates the game around a prepared deck (top card last) and deals
    /// from it. Later rounds reshuffle from `seed`.
    pub fn with_deck(config: GameConfig, seed: u64, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        if deck.variant() != config.variant {
            return Err(GameError::InvalidConfig(
                "deck variant does not match configuration".into(),
            ));
        }
        let dealer_seat = match config.dealer_seat {
            Some(seat) => seat,
            None => {
                let mut rng = ChaCha20Rng::seed_from_u64(seed.rotate_left(17));
                select_random_seat(&mut rng, config.player_count)
            }
        };
        let n = config.player_count;
        let mut gs = Self {
            deck,
            seed,
            hands: vec![Hand::new(); n],
            boards: vec![ExpeditionBoard::new(); n],
            discard: Discard::new(),
            dealer: Dealer::new(n, dealer_seat),
            scorer: Scorer::new(n),
            current_round_number: 1,
            phase: TurnPhase::AwaitingPlay,
            config,
        };
        gs.deal()?;
        Ok(gs)
    }

    fn deal(&mut self) -> Result<(), GameError> {
        self.dealer
            .deal(&mut self.deck, &mut self.hands, self.config.cards_per_player)?;
        debug!(
            round = self.current_round_number,
            dealer = self.dealer.dealer_seat(),
            first = self.dealer.turn_seat(),
            deck_remaining = self.deck.remaining(),
            "dealt round"
        );
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, seat: usize) -> &Hand {
        &self.hands[seat]
    }

    pub fn boards(&self) -> &[ExpeditionBoard] {
        &self.boards
    }

    pub fn board(&self, seat: usize) -> &ExpeditionBoard {
        &self.boards[seat]
    }

    pub fn discard(&self) -> &Discard {
        &self.discard
    }

    pub fn discard_top(&self) -> Option<&Card> {
        self.discard.peek()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn dealer_seat(&self) -> usize {
        self.dealer.dealer_seat()
    }

    pub fn turn_seat(&self) -> usize {
        self.dealer.turn_seat()
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn ledger_totals(&self) -> Vec<i32> {
        self.scorer.totals()
    }

    pub fn current_round_number(&self) -> u32 {
        self.current_round_number
    }

    pub fn max_rounds(&self) -> u32 {
        self.config.max_rounds
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Cards currently held anywhere on the table.
    pub fn total_cards(&self) -> usize {
        self.deck.remaining()
            + self.hands.iter().map(Hand::len).sum::<usize>()
            + self.boards.iter().map(ExpeditionBoard::card_count).sum::<usize>()
            + self.discard.len()
    }

    pub fn has_round_started(&self) -> bool {
        !self.discard.is_empty() || self.boards.iter().any(|b| !b.is_empty())
    }

    /// Cards the turn seat could legally send to an expedition right now.
    pub fn board_playable_cards(&self) -> Vec<Card> {
        rules::board_playable_cards(
            &self.boards,
            self.turn_seat(),
            self.config.variant,
            self.config.legality,
        )
    }

    pub fn is_discard_top_playable(&self) -> bool {
        match self.discard.peek() {
            Some(top) => self.board_playable_cards().contains(top),
            None => false,
        }
    }

    /// Whether the turn seat may end its turn by taking the discard top.
    pub fn can_draw_from_discard(&self) -> bool {
        matches!(self.phase, TurnPhase::AwaitingDraw { discarded: false })
            && !self.discard.is_empty()
    }

    pub fn is_round_over(&self) -> bool {
        self.deck.is_empty() || rules::all_colors_closed(&self.boards, self.config.variant)
    }

    pub fn is_game_over(&self) -> bool {
        self.is_round_over() && self.current_round_number >= self.config.max_rounds
    }

    /// `None` until the final round has been scored.
    pub fn winner(&self) -> Option<Winner> {
        if !self.is_game_over() || self.phase != TurnPhase::Scored {
            return None;
        }
        self.scorer.get_winner()
    }

    /// Moves `card` from `seat`'s hand to its expedition or the discard pile.
    ///
    /// # Errors
    ///
    /// Fails without changing any pile when the round is over, it is not
    /// `seat`'s play step, the card is not in the hand, or an expedition play
    /// does not beat the required color maximum.
    pub fn play_card_to(
        &mut self,
        seat: usize,
        card: Card,
        dest: PlayTo,
    ) -> Result<PlayOutcome, GameError> {
        if self.is_round_over() {
            return Err(GameError::RoundOver);
        }
        self.check_turn(seat)?;
        if self.phase != TurnPhase::AwaitingPlay {
            return Err(GameError::WrongPhase { expected: "draw" });
        }
        if !self.hands[seat].contains(&card) {
            return Err(GameError::CardNotInHand { seat, card });
        }
        let outcome = match dest {
            PlayTo::Discard => {
                self.take_from_hand(seat, &card)?;
                self.discard.push(card);
                PlayOutcome::Discarded
            }
            PlayTo::Expedition => {
                let max = rules::required_max(&self.boards, seat, card.color, self.config.legality);
                rules::validate_expedition_play(&card, max)?;
                self.take_from_hand(seat, &card)?;
                self.boards[seat].expedition_mut(card.color).push(card);
                PlayOutcome::Expedition(card.color)
            }
        };
        self.phase = TurnPhase::AwaitingDraw {
            discarded: outcome == PlayOutcome::Discarded,
        };
        debug!(seat, card = %card, ?dest, "played card");
        Ok(outcome)
    }

    fn take_from_hand(&mut self, seat: usize, card: &Card) -> Result<Card, GameError> {
        self.hands[seat]
            .remove(card)
            .ok_or(GameError::CardNotInHand { seat, card: *card })
    }

    /// Draws the top card of `source` into `seat`'s hand and passes the turn.
    ///
    /// # Errors
    ///
    /// Fails without changing any pile or the turn seat when it is not
    /// `seat`'s draw step, the source is empty, or the discard is requested
    /// right after discarding.
    pub fn draw_from(&mut self, seat: usize, source: DrawFrom) -> Result<Card, GameError> {
        self.check_turn(seat)?;
        let discarded = match self.phase {
            TurnPhase::AwaitingDraw { discarded } => discarded,
            _ => return Err(GameError::WrongPhase { expected: "play" }),
        };
        let card = match source {
            DrawFrom::Deck => self.deck.pop().ok_or(GameError::EmptySource {
                source_name: "deck",
            })?,
            DrawFrom::Discard => {
                if self.discard.is_empty() {
                    return Err(GameError::EmptySource {
                        source_name: "discard",
                    });
                }
                if discarded {
                    return Err(GameError::DiscardPickupNotAllowed);
                }
                self.discard.pop().ok_or(GameError::EmptySource {
                    source_name: "discard",
                })?
            }
        };
        self.hands[seat].push(card);
        self.phase = TurnPhase::AwaitingPlay;
        self.dealer.advance_turn();
        debug!(seat, card = %card, ?source, next = self.turn_seat(), "drew card");
        Ok(card)
    }

    fn check_turn(&self, seat: usize) -> Result<(), GameError> {
        if seat != self.turn_seat() {
            return Err(GameError::NotPlayersTurn {
                expected: self.turn_seat(),
                actual: seat,
            });
        }
        Ok(())
    }

    /// Points each seat's board is worth right now.
    pub fn board_points(&self) -> Vec<i32> {
        self.boards.iter().map(ExpeditionBoard::points).collect()
    }

    /// Records this round's board points in every ledger. Allowed once per
    /// round, after the round is over and the last turn is complete.
    pub fn assign_points(&mut self) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::Scored => return Err(GameError::WrongPhase { expected: "new round" }),
            TurnPhase::AwaitingDraw { .. } => return Err(GameError::WrongPhase { expected: "draw" }),
            TurnPhase::AwaitingPlay => {}
        }
        if !self.is_round_over() {
            return Err(GameError::WrongPhase { expected: "play" });
        }
        let points = self.board_points();
        self.scorer.record_round(&points);
        self.phase = TurnPhase::Scored;
        Ok(())
    }

    /// Clears the table, reshuffles, moves the button and deals the next
    /// round. Only valid after [`GameState::assign_points`].
    pub fn create_new_round(&mut self) -> Result<(), GameError> {
        if self.phase != TurnPhase::Scored {
            return Err(GameError::WrongPhase {
                expected: "round scoring",
            });
        }
        if self.current_round_number >= self.config.max_rounds {
            return Err(GameError::RoundOver);
        }
        self.hands.iter_mut().for_each(Hand::clear);
        self.boards.iter_mut().for_each(ExpeditionBoard::clear);
        self.discard.clear();
        self.deck.shuffle();
        self.dealer.advance_button();
        self.current_round_number += 1;
        self.phase = TurnPhase::AwaitingPlay;
        self.deal()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(self)
    }
}
