use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("{card} is not in player {seat}'s hand")]
    CardNotInHand { seat: usize, card: Card },
    #[error("You must play higher than a {max} (tried {card})")]
    IllegalPlayOrder { card: Card, max: u8 },
    #[error("There are no cards in the {source_name}")]
    EmptySource { source_name: &'static str },
    #[error("Cannot pick up the card that was just discarded")]
    DiscardPickupNotAllowed,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Expected a {expected} step")]
    WrongPhase { expected: &'static str },
    #[error("The round is over")]
    RoundOver,
    #[error("Not enough cards to deal: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Player {seat} left the game")]
    PlayerQuit { seat: usize },
    #[error("Player strategy failed: {0}")]
    Strategy(String),
}

impl GameError {
    /// Errors caused by an illegal move choice. The turn loop reports these
    /// and asks the same seat again; everything else ends the game.
    pub fn is_player_move_error(&self) -> bool {
        matches!(
            self,
            GameError::CardNotInHand { .. }
                | GameError::IllegalPlayOrder { .. }
                | GameError::EmptySource { .. }
                | GameError::DiscardPickupNotAllowed
                | GameError::NotPlayersTurn { .. }
                | GameError::WrongPhase { .. }
                | GameError::RoundOver
        )
    }
}
