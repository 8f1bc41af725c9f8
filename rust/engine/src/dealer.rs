use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::piles::Hand;

/// Tracks the dealer button and whose turn it is, and owns the dealing order.
///
/// Seats are indices into the player list. Dealing and play both start with
/// the seat left of the dealer, i.e. `dealer_seat + 1` modulo the player count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    player_count: usize,
    dealer_seat: usize,
    turn_seat: usize,
}

impl Dealer {
    pub fn new(player_count: usize, dealer_seat: usize) -> Self {
        Self {
            player_count,
            dealer_seat,
            turn_seat: next_seat(dealer_seat, player_count),
        }
    }

    pub fn dealer_seat(&self) -> usize {
        self.dealer_seat
    }

    pub fn turn_seat(&self) -> usize {
        self.turn_seat
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Passes the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.turn_seat = next_seat(self.turn_seat, self.player_count);
    }

    /// Moves the button one seat; the new first-to-act seat is left of it.
    pub fn advance_button(&mut self) {
        self.dealer_seat = next_seat(self.dealer_seat, self.player_count);
        self.turn_seat = next_seat(self.dealer_seat, self.player_count);
    }

    /// Deals `cards_per_player` cards to every hand, one card per seat per
    /// pass, starting left of the dealer and ending with the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientCards`] without touching the deck when
    /// it holds fewer than `hands.len() * cards_per_player` cards.
    pub fn deal(
        &self,
        deck: &mut Deck,
        hands: &mut [Hand],
        cards_per_player: usize,
    ) -> Result<(), GameError> {
        let needed = hands.len() * cards_per_player;
        if deck.remaining() < needed {
            return Err(GameError::InsufficientCards {
                needed,
                available: deck.remaining(),
            });
        }
        let order = seat_order(self.dealer_seat, hands.len());
        for _ in 0..cards_per_player {
            for &seat in &order {
                let c = deck.pop().ok_or(GameError::InsufficientCards {
                    needed,
                    available: 0,
                })?;
                hands[seat].push(c);
            }
        }
        Ok(())
    }
}

pub fn next_seat(current: usize, player_count: usize) -> usize {
    (current + 1) % player_count
}

/// Dealing order for one pass: left of the dealer first, dealer last.
pub fn seat_order(dealer_seat: usize, player_count: usize) -> Vec<usize> {
    (1..=player_count)
        .map(|offset| (dealer_seat + offset) % player_count)
        .collect()
}

/// Uniform seat choice in `[0, player_count)`.
pub fn select_random_seat<R: Rng + ?Sized>(rng: &mut R, player_count: usize) -> usize {
    rng.random_range(0..player_count)
}
