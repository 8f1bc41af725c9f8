//! Deal command handler: one deal, every hand face up.

use super::{load_config, resolve_variant};
use crate::error::CliError;
use crate::formatters::format_hand;
use expeditions_engine::game::{GameConfig, GameState};
use std::io::Write;

/// Deals the first round of a game and prints dealer, first seat and hands.
///
/// # Errors
///
/// `CliError::Engine` when the player count is out of range or the variant
/// cannot supply the deal; `CliError::Io` on write failure.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    variant: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let variant = resolve_variant(variant.as_deref(), cfg.variant)?;
    let gs = GameState::new(GameConfig {
        player_count: players,
        variant,
        seed: Some(seed),
        ..GameConfig::default()
    })?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Variant: {}", variant.as_str())?;
    writeln!(out, "Dealer: seat {}", gs.dealer_seat())?;
    writeln!(out, "First to act: seat {}", gs.turn_seat())?;
    for (seat, hand) in gs.hands().iter().enumerate() {
        writeln!(out, "Seat {}: {}", seat, format_hand(hand.cards()))?;
    }
    writeln!(out, "Deck remaining: {}", gs.deck_remaining())?;
    Ok(())
}
