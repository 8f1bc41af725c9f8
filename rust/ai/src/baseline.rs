//! Baseline bot: random but always legal play.
//!
//! Used as the default opponent and as a reference point for simulations.

use expeditions_engine::cards::Card;
use expeditions_engine::player::{DrawFrom, PlayTo, PlayerStrategy, StrategyError};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Chance of taking a playable discard top instead of drawing blind.
pub const DISCARD_PICKUP_PROBABILITY: f64 = 0.8;

/// Random legal-play bot.
///
/// # Strategy
///
/// - Plays a random hand card that the legal listing allows onto its
///   expedition; with no such card it discards a random hand card.
/// - Draws from the deck unless the discard top is playable, in which case it
///   takes the discard with probability [`DISCARD_PICKUP_PROBABILITY`].
///
/// All choices come from a ChaCha20 stream seeded at construction, so a seeded
/// game against this bot replays identically.
///
/// # Example
///
/// ```rust
/// use expeditions_ai::baseline::BaselineBot;
/// use expeditions_engine::cards::Card;
/// use expeditions_engine::player::{PlayTo, PlayerStrategy};
///
/// let mut bot = BaselineBot::new(42);
/// let hand: Vec<Card> = ["Y3", "B9"].iter().map(|s| s.parse().unwrap()).collect();
/// let legal: Vec<Card> = vec!["Y3".parse().unwrap()];
/// let (card, dest) = bot.choose_card_to_play(&hand, &legal).unwrap();
/// assert_eq!(card.to_string(), "Y3");
/// assert_eq!(dest, PlayTo::Expedition);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineBot {
    rng: ChaCha20Rng,
}

impl BaselineBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for BaselineBot {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PlayerStrategy for BaselineBot {
    fn name(&self) -> &str {
        "BaselineBot"
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        let playable: Vec<Card> = hand.iter().filter(|c| legal.contains(c)).copied().collect();
        if let Some(card) = playable.choose(&mut self.rng) {
            return Ok((*card, PlayTo::Expedition));
        }
        hand.choose(&mut self.rng)
            .map(|c| (*c, PlayTo::Discard))
            .ok_or_else(|| StrategyError::Internal("empty hand".into()))
    }

    fn choose_draw_source(&mut self, is_discard_top_playable: bool) -> Result<DrawFrom, StrategyError> {
        if is_discard_top_playable && self.rng.random_bool(DISCARD_PICKUP_PROBABILITY) {
            Ok(DrawFrom::Discard)
        } else {
            Ok(DrawFrom::Deck)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn plays_only_legal_cards_to_expeditions() {
        let mut bot = BaselineBot::new(3);
        let hand = cards("Y3 Y5 B9 RH G2");
        let legal = cards("Y5 B9 W2");
        for _ in 0..50 {
            let (card, dest) = bot.choose_card_to_play(&hand, &legal).unwrap();
            assert_eq!(dest, PlayTo::Expedition);
            assert!(legal.contains(&card) && hand.contains(&card));
        }
    }

    #[test]
    fn discards_from_hand_when_nothing_is_legal() {
        let mut bot = BaselineBot::new(3);
        let hand = cards("Y3 Y5");
        for _ in 0..20 {
            let (card, dest) = bot.choose_card_to_play(&hand, &cards("R10")).unwrap();
            assert_eq!(dest, PlayTo::Discard);
            assert!(hand.contains(&card));
        }
    }

    #[test]
    fn empty_hand_is_an_internal_error() {
        let mut bot = BaselineBot::new(3);
        assert!(matches!(
            bot.choose_card_to_play(&[], &[]),
            Err(StrategyError::Internal(_))
        ));
    }

    #[test]
    fn unplayable_discard_is_never_taken() {
        let mut bot = BaselineBot::new(9);
        for _ in 0..50 {
            assert_eq!(bot.choose_draw_source(false).unwrap(), DrawFrom::Deck);
        }
    }

    #[test]
    fn playable_discard_is_usually_taken() {
        let mut bot = BaselineBot::new(9);
        let taken = (0..1000)
            .filter(|_| bot.choose_draw_source(true).unwrap() == DrawFrom::Discard)
            .count();
        assert!((700..=900).contains(&taken), "took {taken} of 1000");
    }

    #[test]
    fn same_seed_same_choices() {
        let hand = cards("Y3 Y5 B9 RH G2 W7 W8 B4");
        let mut a = BaselineBot::new(11);
        let mut b = BaselineBot::new(11);
        for _ in 0..20 {
            assert_eq!(
                a.choose_card_to_play(&hand, &hand).unwrap(),
                b.choose_card_to_play(&hand, &hand).unwrap()
            );
        }
    }

    #[test]
    fn forced_deck_draw_skips_the_coin_flip() {
        let mut bot = BaselineBot::new(1);
        assert_eq!(bot.draw_source(false, true).unwrap(), DrawFrom::Deck);
    }
}
