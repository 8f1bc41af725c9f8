//! # Sim Command
//!
//! Bot-vs-bot games in bulk. Bot A always sits at seat 0 and bot B at
//! seat 1; game `i` uses seed `seed + i`, so a run is reproducible from its
//! base seed.

use super::{load_config, resolve_variant, unknown_ai};
use crate::error::CliError;
use expeditions_ai::create_ai;
use expeditions_engine::engine::{Engine, NullRenderer};
use expeditions_engine::game::GameConfig;
use expeditions_engine::scorer::Winner;
use std::io::Write;
use tracing::debug;

/// Flags of the `sim` subcommand.
#[derive(Debug, Clone)]
pub struct SimArgs {
    pub games: u32,
    pub seed: Option<u64>,
    pub ai_a: Option<String>,
    pub ai_b: Option<String>,
    pub rounds: Option<u32>,
    pub variant: Option<String>,
}

impl SimArgs {
    pub fn new(games: u32) -> Self {
        Self {
            games,
            seed: None,
            ai_a: None,
            ai_b: None,
            rounds: None,
            variant: None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    wins_a: u32,
    wins_b: u32,
    ties: u32,
    total_a: i64,
    total_b: i64,
}

impl Tally {
    fn record(&mut self, winner: Option<&Winner>, totals: &[i32]) {
        match winner {
            Some(Winner::Single(0, _)) => self.wins_a += 1,
            Some(Winner::Single(_, _)) => self.wins_b += 1,
            Some(Winner::Tie(_)) | None => self.ties += 1,
        }
        self.total_a += i64::from(totals.first().copied().unwrap_or(0));
        self.total_b += i64::from(totals.get(1).copied().unwrap_or(0));
    }
}

/// Handle the sim command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero games, an unknown bot or variant;
/// `CliError::Config` for a bad configuration; `CliError::Engine` if a game
/// cannot be set up.
pub fn handle_sim_command(
    args: SimArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = load_config(err)?;
    let base_seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let rounds = args.rounds.unwrap_or(cfg.rounds);
    let variant = resolve_variant(args.variant.as_deref(), cfg.variant)?;
    let ai_a = args.ai_a.clone().unwrap_or_else(|| cfg.ai.clone());
    let ai_b = args.ai_b.clone().unwrap_or_else(|| cfg.ai.clone());
    for name in [&ai_a, &ai_b] {
        if create_ai(name, 0).is_none() {
            return Err(unknown_ai(name));
        }
    }

    writeln!(
        out,
        "sim: games={} seed={} ai_a={} ai_b={} rounds={} variant={}",
        args.games,
        base_seed,
        ai_a,
        ai_b,
        rounds,
        variant.as_str()
    )?;

    let mut tally = Tally::default();
    for i in 0..args.games {
        let seed = base_seed.wrapping_add(u64::from(i));
        let a = create_ai(&ai_a, seed.wrapping_mul(2)).ok_or_else(|| unknown_ai(&ai_a))?;
        let b = create_ai(&ai_b, seed.wrapping_mul(2).wrapping_add(1))
            .ok_or_else(|| unknown_ai(&ai_b))?;
        let config = GameConfig {
            player_count: 2,
            max_rounds: rounds,
            variant,
            legality: cfg.legality,
            seed: Some(seed),
            ..GameConfig::default()
        };
        let mut engine = Engine::new(config, vec![a, b])?;
        let winner = engine.play(&mut NullRenderer)?;
        let totals = engine.state().ledger_totals();
        debug!(game = i + 1, seed, ?totals, "sim game finished");
        tally.record(winner.as_ref(), &totals);
    }

    let games = f64::from(args.games);
    writeln!(out, "Games: {}", args.games)?;
    writeln!(out, "A ({}) wins: {}", ai_a, tally.wins_a)?;
    writeln!(out, "B ({}) wins: {}", ai_b, tally.wins_b)?;
    writeln!(out, "Ties: {}", tally.ties)?;
    writeln!(out, "Average score A: {:.2}", tally.total_a as f64 / games)?;
    writeln!(out, "Average score B: {:.2}", tally.total_b as f64 / games)?;
    Ok(())
}
