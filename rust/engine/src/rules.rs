use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{all_colors, build_deck, Card, Color, DeckVariant};
use crate::errors::GameError;
use crate::piles::ExpeditionBoard;

/// Which boards constrain an expedition play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalityScope {
    /// A card must beat the highest numbered card of its color on any board
    #[default]
    AllBoards,
    /// A card must beat the highest numbered card of its color on the player's own board
    OwnBoard,
}

impl LegalityScope {
    pub fn as_str(self) -> &'static str {
        match self {
            LegalityScope::AllBoards => "all-boards",
            LegalityScope::OwnBoard => "own-board",
        }
    }
}

impl FromStr for LegalityScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all-boards" => Ok(LegalityScope::AllBoards),
            "own-board" => Ok(LegalityScope::OwnBoard),
            other => Err(format!("unknown legality scope: {}", other)),
        }
    }
}

/// Highest numbered value per color across every board (0 when unplayed).
pub fn color_maxes(boards: &[ExpeditionBoard]) -> BTreeMap<Color, u8> {
    all_colors()
        .iter()
        .map(|&c| {
            let max = boards
                .iter()
                .map(|b| b.max_card_in_color(c))
                .max()
                .unwrap_or(0);
            (c, max)
        })
        .collect()
}

/// The maximum a play by `seat` in `color` has to beat under `scope`.
pub fn required_max(
    boards: &[ExpeditionBoard],
    seat: usize,
    color: Color,
    scope: LegalityScope,
) -> u8 {
    match scope {
        LegalityScope::AllBoards => boards
            .iter()
            .map(|b| b.max_card_in_color(color))
            .max()
            .unwrap_or(0),
        LegalityScope::OwnBoard => boards
            .get(seat)
            .map(|b| b.max_card_in_color(color))
            .unwrap_or(0),
    }
}

/// Lists every distinct card of the variant that `seat` could legally send to
/// an expedition right now, regardless of who holds it.
///
/// A card qualifies when its value beats the required maximum of its color or
/// when no numbered card of that color has been played yet. Wild cards
/// therefore only appear for colors that are still unopened.
///
/// # Examples
///
/// ```
/// use expeditions_engine::cards::{Card, Color, DeckVariant};
/// use expeditions_engine::piles::ExpeditionBoard;
/// use expeditions_engine::rules::{board_playable_cards, LegalityScope};
///
/// let mut boards = vec![ExpeditionBoard::new(), ExpeditionBoard::new()];
/// boards[1].expedition_mut(Color::Red).push(Card::numbered(Color::Red, 8));
///
/// let legal = board_playable_cards(&boards, 0, DeckVariant::Compact, LegalityScope::AllBoards);
/// assert!(legal.contains(&Card::numbered(Color::Red, 9)));
/// assert!(!legal.contains(&Card::numbered(Color::Red, 7)));
///
/// let own = board_playable_cards(&boards, 0, DeckVariant::Compact, LegalityScope::OwnBoard);
/// assert!(own.contains(&Card::numbered(Color::Red, 7)));
/// ```
pub fn board_playable_cards(
    boards: &[ExpeditionBoard],
    seat: usize,
    variant: DeckVariant,
    scope: LegalityScope,
) -> Vec<Card> {
    let mut cards: Vec<Card> = build_deck(variant)
        .into_iter()
        .filter(|c| {
            let max = required_max(boards, seat, c.color, scope);
            max == 0 || c.value > max
        })
        .collect();
    cards.dedup();
    cards
}

/// Checks an expedition play against the maximum it has to beat.
///
/// # Errors
///
/// Returns [`GameError::IllegalPlayOrder`] for a numbered card that does not
/// exceed a nonzero `max`. Wild cards always pass.
///
/// # Examples
///
/// ```
/// use expeditions_engine::cards::{Card, Color};
/// use expeditions_engine::errors::GameError;
/// use expeditions_engine::rules::validate_expedition_play;
///
/// assert!(validate_expedition_play(&Card::numbered(Color::Blue, 8), 7).is_ok());
/// assert!(validate_expedition_play(&Card::wild(Color::Blue), 7).is_ok());
/// assert!(matches!(
///     validate_expedition_play(&Card::numbered(Color::Blue, 5), 7),
///     Err(GameError::IllegalPlayOrder { max: 7, .. })
/// ));
/// ```
pub fn validate_expedition_play(card: &Card, max: u8) -> Result<(), GameError> {
    if !card.is_wild() && max > 0 && card.value <= max {
        return Err(GameError::IllegalPlayOrder { card: *card, max });
    }
    Ok(())
}

/// True when every color has reached the variant's top value on some board.
pub fn all_colors_closed(boards: &[ExpeditionBoard], variant: DeckVariant) -> bool {
    color_maxes(boards)
        .values()
        .all(|&max| max == variant.max_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boards_with(plays: &[(usize, Card)]) -> Vec<ExpeditionBoard> {
        let mut boards = vec![ExpeditionBoard::new(), ExpeditionBoard::new()];
        for &(seat, c) in plays {
            boards[seat].expedition_mut(c.color).push(c);
        }
        boards
    }

    #[test]
    fn maxes_are_cross_player() {
        let boards = boards_with(&[
            (0, Card::numbered(Color::Green, 4)),
            (1, Card::numbered(Color::Green, 7)),
        ]);
        assert_eq!(color_maxes(&boards)[&Color::Green], 7);
        assert_eq!(color_maxes(&boards)[&Color::Red], 0);
        assert_eq!(
            required_max(&boards, 0, Color::Green, LegalityScope::OwnBoard),
            4
        );
    }

    #[test]
    fn wilds_listed_only_for_unopened_colors() {
        let boards = boards_with(&[(1, Card::numbered(Color::Yellow, 6))]);
        let legal = board_playable_cards(
            &boards,
            0,
            DeckVariant::Classic,
            LegalityScope::AllBoards,
        );
        assert!(!legal.contains(&Card::wild(Color::Yellow)));
        assert!(legal.contains(&Card::wild(Color::Blue)));
        assert_eq!(
            legal.iter().filter(|c| **c == Card::wild(Color::Blue)).count(),
            1
        );
        assert!(!legal.contains(&Card::numbered(Color::Yellow, 6)));
        assert!(legal.contains(&Card::numbered(Color::Yellow, 7)));
    }

    #[test]
    fn equal_value_is_rejected() {
        assert!(validate_expedition_play(&Card::numbered(Color::Red, 7), 7).is_err());
        assert!(validate_expedition_play(&Card::numbered(Color::Red, 2), 0).is_ok());
    }

    #[test]
    fn closed_when_every_color_hits_ten() {
        let mut plays: Vec<(usize, Card)> = all_colors()
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % 2, Card::numbered(c, 10)))
            .collect();
        let last = plays.pop().unwrap();
        assert!(!all_colors_closed(&boards_with(&plays), DeckVariant::Compact));
        plays.push(last);
        assert!(all_colors_closed(&boards_with(&plays), DeckVariant::Compact));
    }
}
