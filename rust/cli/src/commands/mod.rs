//! Command handler modules.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never taken from the process
//! - Errors propagated as [`CliError`]
//!
//! Flags given on the command line override the resolved configuration.

mod cfg;
mod deal;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayArgs, handle_play_command};
pub use sim::{SimArgs, handle_sim_command};

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use crate::validation::{parse_legality, parse_variant};
use expeditions_engine::cards::DeckVariant;
use expeditions_engine::rules::LegalityScope;
use std::io::Write;

/// Loads file and environment configuration, reporting failures on `err`.
fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load_with_sources() {
        Ok(resolved) => Ok(resolved.config),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(e.to_string()))
        }
    }
}

fn resolve_variant(flag: Option<&str>, fallback: DeckVariant) -> Result<DeckVariant, CliError> {
    match flag {
        Some(s) => parse_variant(s).map_err(CliError::InvalidInput),
        None => Ok(fallback),
    }
}

fn resolve_legality(flag: Option<&str>, fallback: LegalityScope) -> Result<LegalityScope, CliError> {
    match flag {
        Some(s) => parse_legality(s).map_err(CliError::InvalidInput),
        None => Ok(fallback),
    }
}

fn unknown_ai(name: &str) -> CliError {
    CliError::InvalidInput(format!(
        "unknown ai '{}' (available: {})",
        name,
        expeditions_ai::available_ais().join(", ")
    ))
}
