//! # Play Command
//!
//! One game of expeditions on the terminal.
//!
//! - **Human vs AI**: seat 0 reads moves from stdin, seat 1 is a bot
//! - **AI vs AI**: both seats are bots and only round summaries are shown
//!
//! Typing `q`/`quit` or closing the input abandons the game; that is a
//! normal exit, not an error.

use super::{load_config, resolve_legality, resolve_variant, unknown_ai};
use crate::cli::Vs;
use crate::error::CliError;
use crate::formatters::{format_scores, format_winner};
use crate::human::ConsolePlayer;
use crate::render::ConsoleRenderer;
use crate::terminal::Terminal;
use expeditions_ai::create_ai;
use expeditions_engine::engine::Engine;
use expeditions_engine::errors::GameError;
use expeditions_engine::game::GameConfig;
use expeditions_engine::logger::EventLogger;
use expeditions_engine::player::PlayerStrategy;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Flags of the `play` subcommand.
#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub vs: Vs,
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub variant: Option<String>,
    pub legality: Option<String>,
    pub ai: Option<String>,
    pub log: Option<PathBuf>,
}

impl PlayArgs {
    pub fn new(vs: Vs) -> Self {
        Self {
            vs,
            rounds: None,
            seed: None,
            variant: None,
            legality: None,
            ai: None,
            log: None,
        }
    }
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when the game finishes or the human quits
/// * `Err(CliError)` for bad flags or configuration, an engine failure, or
///   an I/O error on the output streams or the log file
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let rounds = args.rounds.unwrap_or(cfg.rounds);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let variant = resolve_variant(args.variant.as_deref(), cfg.variant)?;
    let legality = resolve_legality(args.legality.as_deref(), cfg.legality)?;
    let ai_name = args.ai.clone().unwrap_or(cfg.ai);
    let opponent = create_ai(&ai_name, seed.wrapping_add(1)).ok_or_else(|| unknown_ai(&ai_name))?;

    writeln!(
        out,
        "play: vs={} rounds={} seed={} variant={} legality={} ai={}",
        args.vs.as_str(),
        rounds,
        seed,
        variant.as_str(),
        legality.as_str(),
        ai_name
    )?;

    let config = GameConfig {
        player_count: 2,
        max_rounds: rounds,
        variant,
        legality,
        seed: Some(seed),
        ..GameConfig::default()
    };

    let terminal = Terminal::new(out, err);
    let (seat0, human_seat): (Box<dyn PlayerStrategy + '_>, Option<usize>) = match args.vs {
        Vs::Human => (Box::new(ConsolePlayer::new(stdin, terminal.clone())), Some(0)),
        Vs::Ai => (
            create_ai(&ai_name, seed).ok_or_else(|| unknown_ai(&ai_name))?,
            None,
        ),
    };

    let mut engine = Engine::new(config, vec![seat0, opponent])?;
    let mut renderer = ConsoleRenderer::new(terminal.clone(), human_seat);
    let result = engine.play(&mut renderer);

    if let Some(path) = &args.log {
        let mut logger = EventLogger::create(path)?;
        logger.write_all(engine.log())?;
        terminal.line(&format!("Log: {} ({} events)", path.display(), engine.log().len()));
    }

    let names = engine.player_names();
    match result {
        Ok(winner) => {
            terminal.line(&format!(
                "Final scores: {}",
                format_scores(&engine.state().ledger_totals(), &names)
            ));
            if let Some(w) = winner {
                terminal.line(&format_winner(&w, &names));
            }
        }
        Err(GameError::PlayerQuit { seat }) => {
            tracing::info!(seat, round = engine.state().current_round_number(), "player quit");
            terminal.line(&format!(
                "Game abandoned in round {}",
                engine.state().current_round_number()
            ));
        }
        Err(e) => return Err(e.into()),
    }

    match terminal.take_failure() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
