use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{build_deck, Card, DeckVariant};
use crate::errors::GameError;
use crate::piles::Pile;

/// The draw pile. Owns its RNG so every reshuffle continues the same seeded
/// stream, which keeps whole games reproducible from a single seed.
#[derive(Debug, Clone)]
pub struct Deck {
    variant: DeckVariant,
    pile: Pile,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(variant: DeckVariant, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep build order until shuffle is called explicitly
        Self {
            variant,
            pile: Pile::from_cards(build_deck(variant)),
            rng,
        }
    }

    /// Builds a deck in a fixed order (top card last). The cards must be
    /// exactly the variant's card set; `seed` drives later reshuffles.
    pub fn stacked(variant: DeckVariant, seed: u64, cards: Vec<Card>) -> Result<Self, GameError> {
        let mut expected = build_deck(variant);
        let mut given = cards.clone();
        expected.sort();
        given.sort();
        if expected != given {
            return Err(GameError::InvalidConfig(format!(
                "stacked deck is not a {} card set",
                variant.as_str()
            )));
        }
        Ok(Self {
            variant,
            pile: Pile::from_cards(cards),
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    /// Refills the deck with the full card set and shuffles it.
    pub fn shuffle(&mut self) {
        let mut cards = build_deck(self.variant);
        cards.shuffle(&mut self.rng);
        self.pile = Pile::from_cards(cards);
    }

    /// Takes the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.pile.peek()
    }

    pub fn remaining(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn variant(&self) -> DeckVariant {
        self.variant
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }
}
