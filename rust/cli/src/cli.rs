//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Expeditions card game on the command line.
#[derive(Parser, Debug)]
#[command(
    name = "expeditions",
    version,
    about = "Expeditions card game: play, simulate and inspect deals"
)]
pub struct ExpeditionsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against a bot, or watch two bots
    Play {
        #[arg(long, value_enum)]
        vs: Vs,
        /// Rounds to play (config default: 3)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// classic, compact or compact-with-wilds
        #[arg(long)]
        variant: Option<String>,
        /// all-boards or own-board
        #[arg(long)]
        legality: Option<String>,
        /// Opponent bot name
        #[arg(long)]
        ai: Option<String>,
        /// Write the game history as JSON lines
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Run bot-vs-bot games and report results
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long = "ai-a")]
        ai_a: Option<String>,
        #[arg(long = "ai-b")]
        ai_b: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
        #[arg(long)]
        variant: Option<String>,
    },
    /// Deal one round and show every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long)]
        variant: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Who sits at seat 0 in `play`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Interactive player reading moves from stdin
    Human,
    /// A second bot; the game plays itself
    Ai,
}

impl Vs {
    /// # Examples
    ///
    /// ```
    /// # use expeditions_cli::cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
