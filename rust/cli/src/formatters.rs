//! Card, expedition and score formatters for terminal display.
//!
//! Pure functions from engine types to strings. Cards use their notation
//! (`Y7`, `BH`), so what the table shows is exactly what a player types.
//!
//! ## Example
//!
//! ```rust
//! use expeditions_engine::cards::{Card, Color};
//! use expeditions_cli::formatters::{format_card, format_cards};
//!
//! let seven = Card::numbered(Color::Yellow, 7);
//! assert_eq!(format_card(&seven), "Y7");
//! assert_eq!(format_cards(&[seven, Card::wild(Color::Blue)]), "Y7 BH");
//! ```

use expeditions_engine::cards::Card;
use expeditions_engine::piles::{Expedition, ExpeditionBoard};
use expeditions_engine::scorer::Winner;

pub fn format_card(card: &Card) -> String {
    card.to_string()
}

/// Cards in the given order, space separated; `-` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Hand sorted by color, wilds first, then by value.
pub fn format_hand(cards: &[Card]) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| a.color.cmp(&b.color).then(a.value.cmp(&b.value)));
    format_cards(&sorted)
}

/// One expedition with its running score, e.g. `Y: YH Y4 Y7 (-18)`.
pub fn format_expedition(expedition: &Expedition) -> String {
    format!(
        "{}: {} ({})",
        expedition.color().letter(),
        format_cards(expedition.cards()),
        expedition.points()
    )
}

/// Non-empty expeditions, one per line, indented.
pub fn format_board(board: &ExpeditionBoard) -> Vec<String> {
    let lines: Vec<String> = board
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| format!("  {}", format_expedition(e)))
        .collect();
    if lines.is_empty() {
        vec!["  (no expeditions)".to_string()]
    } else {
        lines
    }
}

/// `seat 1 (CautiousBot)`
pub fn format_seat(seat: usize, names: &[&str]) -> String {
    match names.get(seat) {
        Some(name) => format!("seat {} ({})", seat, name),
        None => format!("seat {}", seat),
    }
}

/// `seat 0 (You) 12, seat 1 (BaselineBot) -5`
pub fn format_scores(scores: &[i32], names: &[&str]) -> String {
    scores
        .iter()
        .enumerate()
        .map(|(seat, s)| format!("{} {}", format_seat(seat, names), s))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_winner(winner: &Winner, names: &[&str]) -> String {
    match winner {
        Winner::Single(seat, points) => {
            format!("Winner: {} with {} points", format_seat(*seat, names), points)
        }
        Winner::Tie(_) => {
            let seats: Vec<String> = winner
                .seats()
                .into_iter()
                .map(|seat| format_seat(seat, names))
                .collect();
            format!("Tie: {} with {} points", seats.join(", "), winner.points())
        }
    }
}
