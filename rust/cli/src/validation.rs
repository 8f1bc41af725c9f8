//! Input parsing and validation for interactive commands.
//!
//! Each prompt of a human turn has its own parser. All of them accept `q` or
//! `quit` to leave the game and report anything else as
//! [`ParseResult::Invalid`] with a message meant for the player.

use expeditions_engine::cards::{Card, DeckVariant};
use expeditions_engine::player::{DrawFrom, PlayTo};
use expeditions_engine::rules::LegalityScope;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    /// Valid input
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input, "q" | "quit")
}

/// Parses card notation: a color letter followed by a value or `H` for the
/// wild card, case-insensitive.
///
/// # Example
///
/// ```rust
/// # use expeditions_cli::validation::{parse_card_input, ParseResult};
/// use expeditions_engine::cards::{Card, Color};
///
/// assert_eq!(parse_card_input("y7"), ParseResult::Value(Card::numbered(Color::Yellow, 7)));
/// assert_eq!(parse_card_input("BH"), ParseResult::Value(Card::wild(Color::Blue)));
/// assert_eq!(parse_card_input("quit"), ParseResult::Quit);
/// ```
pub fn parse_card_input(input: &str) -> ParseResult<Card> {
    let input = input.trim();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(&input.to_lowercase()) {
        return ParseResult::Quit;
    }
    match input.to_uppercase().parse::<Card>() {
        Ok(card) => ParseResult::Value(card),
        Err(_) => ParseResult::Invalid(format!(
            "Unrecognized card '{}'. Use a color letter (Y, B, W, G, R) and a value, or H for a wild card, e.g. Y7 or BH",
            input
        )),
    }
}

/// Parses where the chosen card goes: `e`/`expedition` or `d`/`discard`.
pub fn parse_destination(input: &str) -> ParseResult<PlayTo> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "e" | "expedition" => ParseResult::Value(PlayTo::Expedition),
        "d" | "discard" => ParseResult::Value(PlayTo::Discard),
        s if is_quit(s) => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized destination '{}'. Valid: e (expedition), d (discard), q",
            other
        )),
    }
}

/// Parses the draw source: `de`/`deck` or `di`/`discard`.
pub fn parse_draw_source(input: &str) -> ParseResult<DrawFrom> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "de" | "deck" => ParseResult::Value(DrawFrom::Deck),
        "di" | "discard" => ParseResult::Value(DrawFrom::Discard),
        s if is_quit(s) => ParseResult::Quit,
        other => ParseResult::Invalid(format!(
            "Unrecognized draw source '{}'. Valid: de (deck), di (discard), q",
            other
        )),
    }
}

/// Parses a `--variant` value.
pub fn parse_variant(input: &str) -> Result<DeckVariant, String> {
    input.trim().to_lowercase().parse()
}

/// Parses a `--legality` value.
pub fn parse_legality(input: &str) -> Result<LegalityScope, String> {
    input.trim().to_lowercase().parse()
}
