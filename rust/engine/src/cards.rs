use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five expedition colors.
/// Every card, expedition stack, and color maximum is keyed by a [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Yellow expedition (Y)
    Yellow,
    /// Blue expedition (B)
    Blue,
    /// White expedition (W)
    White,
    /// Green expedition (G)
    Green,
    /// Red expedition (R)
    Red,
}

impl Color {
    /// Single-letter code used in card notation (`Y7`, `BH`).
    pub fn letter(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::White => 'W',
            Color::Green => 'G',
            Color::Red => 'R',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'Y' => Some(Color::Yellow),
            'B' => Some(Color::Blue),
            'W' => Some(Color::White),
            'G' => Some(Color::Green),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
}

pub fn all_colors() -> [Color; 5] {
    [
        Color::Yellow,
        Color::Blue,
        Color::White,
        Color::Green,
        Color::Red,
    ]
}

/// Distinguishes numbered expedition cards from wild (handshake) cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Wild card: value 0, multiplies the score of its expedition
    Wild,
    /// Numbered card with a face value
    Numbered,
}

/// Represents a single card: a color, a kind, and a face value.
/// Wild cards always carry value 0. Cards compare by value, so two wild
/// cards of the same color are interchangeable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The expedition color of the card
    pub color: Color,
    /// Numbered or wild
    pub kind: CardKind,
    /// Face value (0 for wild cards)
    pub value: u8,
}

impl Card {
    pub fn numbered(color: Color, value: u8) -> Self {
        Self {
            color,
            kind: CardKind::Numbered,
            value,
        }
    }

    pub fn wild(color: Color) -> Self {
        Self {
            color,
            kind: CardKind::Wild,
            value: 0,
        }
    }

    pub fn is_wild(&self) -> bool {
        self.kind == CardKind::Wild
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Wild => write!(f, "{}H", self.color.letter()),
            CardKind::Numbered => write!(f, "{}{}", self.color.letter(), self.value),
        }
    }
}

/// Error returned when card notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardError(pub String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card notation: {}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses notation such as `Y7`, `r10` or `BH` (blue wild).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let color = chars
            .next()
            .and_then(Color::from_letter)
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        let rest = chars.as_str();
        if rest.eq_ignore_ascii_case("h") {
            return Ok(Card::wild(color));
        }
        match rest.parse::<u8>() {
            Ok(v) if v > 0 => Ok(Card::numbered(color, v)),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

/// Deck composition. Each variant fixes the numbered range and the number
/// of wild cards per color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckVariant {
    /// 2..=10 plus three wild cards per color (60 cards)
    #[default]
    Classic,
    /// 6..=10, no wild cards (25 cards)
    Compact,
    /// 6..=10 plus three wild cards per color (40 cards)
    CompactWithWilds,
}

impl DeckVariant {
    pub fn min_value(self) -> u8 {
        match self {
            DeckVariant::Classic => 2,
            DeckVariant::Compact | DeckVariant::CompactWithWilds => 6,
        }
    }

    /// Highest numbered value; a color is closed once this value is played.
    pub fn max_value(self) -> u8 {
        10
    }

    pub fn wilds_per_color(self) -> usize {
        match self {
            DeckVariant::Compact => 0,
            DeckVariant::Classic | DeckVariant::CompactWithWilds => 3,
        }
    }

    pub fn deck_size(self) -> usize {
        let numbered = (self.max_value() - self.min_value() + 1) as usize;
        all_colors().len() * (numbered + self.wilds_per_color())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeckVariant::Classic => "classic",
            DeckVariant::Compact => "compact",
            DeckVariant::CompactWithWilds => "compact-with-wilds",
        }
    }
}

impl FromStr for DeckVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(DeckVariant::Classic),
            "compact" => Ok(DeckVariant::Compact),
            "compact-with-wilds" => Ok(DeckVariant::CompactWithWilds),
            other => Err(format!("unknown deck variant: {}", other)),
        }
    }
}

/// Builds the unshuffled card set for a variant: wild cards first, then
/// numbered cards color by color in ascending value.
pub fn build_deck(variant: DeckVariant) -> Vec<Card> {
    let mut v = Vec::with_capacity(variant.deck_size());
    for &c in &all_colors() {
        for _ in 0..variant.wilds_per_color() {
            v.push(Card::wild(c));
        }
    }
    for &c in &all_colors() {
        for value in variant.min_value()..=variant.max_value() {
            v.push(Card::numbered(c, value));
        }
    }
    v
}
