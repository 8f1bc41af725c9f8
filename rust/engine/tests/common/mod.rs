#![allow(dead_code)]

use expeditions_engine::cards::{build_deck, Card, DeckVariant};
use expeditions_engine::deck::Deck;
use expeditions_engine::game::{GameConfig, GameState};
use expeditions_engine::rules::LegalityScope;

/// Builds a game whose first deal gives `hands[seat]` to each seat and whose
/// next draws come off the deck in `next_draws` order.
///
/// The last seat deals, so seat 0 receives first and acts first.
pub fn stacked_game(
    variant: DeckVariant,
    hands: &[Vec<Card>],
    next_draws: &[Card],
    max_rounds: u32,
) -> GameState {
    stacked_game_scoped(variant, LegalityScope::AllBoards, hands, next_draws, max_rounds)
}

pub fn stacked_game_scoped(
    variant: DeckVariant,
    legality: LegalityScope,
    hands: &[Vec<Card>],
    next_draws: &[Card],
    max_rounds: u32,
) -> GameState {
    let n = hands.len();
    let per_player = hands[0].len();
    let mut deal_order = Vec::with_capacity(n * per_player);
    for pass in 0..per_player {
        for hand in hands {
            deal_order.push(hand[pass]);
        }
    }

    let mut rest = build_deck(variant);
    for c in deal_order.iter().chain(next_draws) {
        let idx = rest
            .iter()
            .position(|x| x == c)
            .unwrap_or_else(|| panic!("{} listed more often than the deck holds", c));
        rest.remove(idx);
    }

    let mut cards = rest;
    cards.extend(next_draws.iter().rev());
    cards.extend(deal_order.iter().rev());

    let config = GameConfig {
        player_count: n,
        max_rounds,
        cards_per_player: per_player,
        variant,
        legality,
        dealer_seat: Some(n - 1),
        seed: Some(99),
    };
    let deck = Deck::stacked(variant, 99, cards).expect("stacked deck");
    GameState::with_deck(config, 99, deck).expect("stacked game")
}

pub fn parse(cards: &str) -> Vec<Card> {
    cards
        .split_whitespace()
        .map(|s| s.parse().expect("card notation"))
        .collect()
}
