//! Ordered card collections.
//!
//! A [`Pile`] is a stack: cards are pushed onto and popped from the top (the
//! end of the vector). Hands, the discard pile and expedition stacks are thin
//! wrappers that add their own queries on top of that discipline.

use serde::{Deserialize, Serialize};

use crate::cards::{all_colors, Card, CardKind, Color};

/// Points subtracted from every started expedition.
pub const EXPEDITION_COST: i32 = 20;
/// Bonus for an expedition holding at least [`LENGTH_BONUS_CARDS`] cards.
pub const LENGTH_BONUS: i32 = 20;
pub const LENGTH_BONUS_CARDS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Extracts the first card equal to `c`, wherever it sits in the pile.
    pub fn remove(&mut self, c: &Card) -> Option<Card> {
        let idx = self.cards.iter().position(|x| x == c)?;
        Some(self.cards.remove(idx))
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// A player's private hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pile: Pile,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: Card) {
        self.pile.push(c);
    }

    pub fn remove(&mut self, c: &Card) -> Option<Card> {
        self.pile.remove(c)
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.pile.contains(c)
    }

    pub fn clear(&mut self) {
        self.pile.clear();
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }
}

/// The shared discard pile. Only the top card is visible and drawable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    pile: Pile,
}

impl Discard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: Card) {
        self.pile.push(c);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.pile.peek()
    }

    pub fn clear(&mut self) {
        self.pile.clear();
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }
}

/// One color's stack on a player's board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expedition {
    color: Color,
    pile: Pile,
}

impl Expedition {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pile: Pile::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn push(&mut self, c: Card) {
        self.pile.push(c);
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    pub fn card_count(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn wild_count(&self) -> usize {
        self.pile.iter().filter(|c| c.is_wild()).count()
    }

    /// Highest numbered value in the stack, 0 when none has been played.
    pub fn max_number(&self) -> u8 {
        self.pile
            .iter()
            .filter(|c| c.kind == CardKind::Numbered)
            .map(|c| c.value)
            .max()
            .unwrap_or(0)
    }

    /// `(sum - 20) * (1 + wilds) + bonus`, or 0 for an unstarted expedition.
    pub fn points(&self) -> i32 {
        if self.is_empty() {
            return 0;
        }
        let sum: i32 = self.pile.iter().map(|c| c.value as i32).sum();
        let multiplier = 1 + self.wild_count() as i32;
        let bonus = if self.card_count() >= LENGTH_BONUS_CARDS {
            LENGTH_BONUS
        } else {
            0
        };
        (sum - EXPEDITION_COST) * multiplier + bonus
    }

    pub fn clear(&mut self) {
        self.pile.clear();
    }
}

/// A player's five expeditions, one per color in [`all_colors`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionBoard {
    expeditions: Vec<Expedition>,
}

impl Default for ExpeditionBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpeditionBoard {
    pub fn new() -> Self {
        Self {
            expeditions: all_colors().iter().map(|&c| Expedition::new(c)).collect(),
        }
    }

    pub fn expedition(&self, color: Color) -> &Expedition {
        &self.expeditions[color_index(color)]
    }

    pub fn expedition_mut(&mut self, color: Color) -> &mut Expedition {
        &mut self.expeditions[color_index(color)]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expedition> {
        self.expeditions.iter()
    }

    pub fn max_card_in_color(&self, color: Color) -> u8 {
        self.expedition(color).max_number()
    }

    pub fn points(&self) -> i32 {
        self.expeditions.iter().map(Expedition::points).sum()
    }

    pub fn card_count(&self) -> usize {
        self.expeditions.iter().map(Expedition::card_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.expeditions.iter().all(Expedition::is_empty)
    }

    pub fn clear(&mut self) {
        self.expeditions.iter_mut().for_each(Expedition::clear);
    }
}

fn color_index(color: Color) -> usize {
    match color {
        Color::Yellow => 0,
        Color::Blue => 1,
        Color::White => 2,
        Color::Green => 3,
        Color::Red => 4,
    }
}
