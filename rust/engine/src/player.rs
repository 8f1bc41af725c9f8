use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Where a played card goes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayTo {
    /// The player's own expedition of the card's color
    Expedition,
    /// The shared discard pile
    Discard,
}

/// Where the end-of-turn card comes from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawFrom {
    /// Top of the draw deck
    Deck,
    /// Top of the discard pile
    Discard,
}

/// Reasons a strategy could not produce a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// The player asked to leave the game
    Quit,
    /// The strategy failed for another reason
    Internal(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Quit => write!(f, "player quit"),
            StrategyError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// Decision-making for one seat.
///
/// The engine only ever hands a strategy its own hand and public information.
/// Returned choices are not trusted: the game state re-validates them and
/// asks again after an illegal choice.
///
/// # Example Implementation
///
/// ```rust
/// use expeditions_engine::cards::Card;
/// use expeditions_engine::player::{DrawFrom, PlayTo, PlayerStrategy, StrategyError};
///
/// struct AlwaysDiscard;
///
/// impl PlayerStrategy for AlwaysDiscard {
///     fn name(&self) -> &str {
///         "AlwaysDiscard"
///     }
///
///     fn choose_card_to_play(
///         &mut self,
///         hand: &[Card],
///         _legal: &[Card],
///     ) -> Result<(Card, PlayTo), StrategyError> {
///         let card = hand.first().copied().ok_or(StrategyError::Internal("empty hand".into()))?;
///         Ok((card, PlayTo::Discard))
///     }
///
///     fn choose_draw_source(&mut self, _playable: bool) -> Result<DrawFrom, StrategyError> {
///         Ok(DrawFrom::Deck)
///     }
/// }
/// ```
pub trait PlayerStrategy {
    /// Display name for this seat.
    fn name(&self) -> &str;

    /// Pick a card from `hand` and where to send it. `legal` lists the cards
    /// that could currently go to an expedition (not filtered by hand).
    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError>;

    /// Pick a draw source when the discard is available.
    fn choose_draw_source(&mut self, is_discard_top_playable: bool)
        -> Result<DrawFrom, StrategyError>;

    /// Draw-source entry point used by the engine. The deck is forced when
    /// the discard cannot be taken; implementors only see real choices.
    fn draw_source(
        &mut self,
        can_draw_from_discard: bool,
        is_discard_top_playable: bool,
    ) -> Result<DrawFrom, StrategyError> {
        if !can_draw_from_discard {
            return Ok(DrawFrom::Deck);
        }
        self.choose_draw_source(is_discard_top_playable)
    }

    /// Called after every deal, before the first play of `round`.
    fn round_started(&mut self, _round: u32) {}
}

impl<T: PlayerStrategy + ?Sized> PlayerStrategy for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        (**self).choose_card_to_play(hand, legal)
    }

    fn choose_draw_source(
        &mut self,
        is_discard_top_playable: bool,
    ) -> Result<DrawFrom, StrategyError> {
        (**self).choose_draw_source(is_discard_top_playable)
    }

    fn draw_source(
        &mut self,
        can_draw_from_discard: bool,
        is_discard_top_playable: bool,
    ) -> Result<DrawFrom, StrategyError> {
        (**self).draw_source(can_draw_from_discard, is_discard_top_playable)
    }

    fn round_started(&mut self, round: u32) {
        (**self).round_started(round)
    }
}
