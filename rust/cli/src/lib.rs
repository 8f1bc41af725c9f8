//! # Expeditions CLI Library
//!
//! Command-line front end for the expeditions card game engine: play a game
//! on the terminal, simulate bot matches, inspect a deal, show configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and executes the subcommand; it never exits
//! the process, it returns the exit code.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = expeditions_cli::run(["expeditions", "deal", "--seed", "42"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Seat 0: "));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against a bot (`--vs human`) or watch two bots (`--vs ai`)
//! - `sim`: Run many bot-vs-bot games and report wins and average scores
//! - `deal`: Deal one round and show every hand
//! - `cfg`: Display the resolved configuration with value sources

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
pub mod render;
pub mod terminal;
pub mod ui;
pub mod validation;

use cli::{Commands, ExpeditionsCli};
use commands::{
    PlayArgs, SimArgs, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application, reading interactive input from
/// the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success (including an abandoned game), `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream for `play --vs human`.
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("quit\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = expeditions_cli::run_with_input(
///     ["expeditions", "play", "--vs", "human", "--seed", "1"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Game abandoned"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ExpeditionsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            vs,
            rounds,
            seed,
            variant,
            legality,
            ai,
            log,
        } => {
            let args = PlayArgs {
                vs,
                rounds,
                seed,
                variant,
                legality,
                ai,
                log,
            };
            handle_play_command(args, out, err, stdin)
        }
        Commands::Sim {
            games,
            seed,
            ai_a,
            ai_b,
            rounds,
            variant,
        } => {
            let args = SimArgs {
                games,
                seed,
                ai_a,
                ai_b,
                rounds,
                variant,
            };
            handle_sim_command(args, out, err)
        }
        Commands::Deal {
            seed,
            players,
            variant,
        } => handle_deal_command(seed, players, variant, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Config(_)) => exit_code::ERROR, // already reported
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Expeditions CLI").is_err()
                || writeln!(err, "Usage: expeditions <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            if writeln!(err, "\nFor full help, run: expeditions --help").is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
