use tracing::{info, warn};

use crate::errors::GameError;
use crate::game::{GameConfig, GameState, TurnPhase};
use crate::logger::{Action, Event, GameLog};
use crate::player::{PlayerStrategy, StrategyError};
use crate::scorer::Winner;

/// Presentation side of the turn loop. The engine calls it, never the reverse.
pub trait Renderer {
    /// Show the table; called once per loop iteration and at round/game end.
    fn render(&mut self, state: &GameState, players: &[&str]);

    /// Report an illegal move that the loop is about to retry.
    fn render_error(&mut self, error: &GameError);

    /// Receive the full history once the game is over.
    fn render_log(&mut self, _log: &GameLog) {}
}

/// Renderer that shows nothing, for simulations.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState, _players: &[&str]) {}
    fn render_error(&mut self, _error: &GameError) {}
}

/// Drives a game from the first deal to the final score.
///
/// Owns the [`GameState`] and one strategy per seat. Each iteration attempts
/// the current seat's turn (play, then draw); an illegal choice is reported
/// and only the failed step is asked again. Round ends are scored and
/// redealt here.
///
/// # Examples
///
/// ```
/// use expeditions_engine::cards::Card;
/// use expeditions_engine::engine::{Engine, NullRenderer};
/// use expeditions_engine::game::GameConfig;
/// use expeditions_engine::player::{DrawFrom, PlayTo, PlayerStrategy, StrategyError};
///
/// struct Discarder;
///
/// impl PlayerStrategy for Discarder {
///     fn name(&self) -> &str { "Discarder" }
///     fn choose_card_to_play(&mut self, hand: &[Card], _legal: &[Card])
///         -> Result<(Card, PlayTo), StrategyError> {
///         Ok((hand[0], PlayTo::Discard))
///     }
///     fn choose_draw_source(&mut self, _playable: bool) -> Result<DrawFrom, StrategyError> {
///         Ok(DrawFrom::Deck)
///     }
/// }
///
/// let config = GameConfig { seed: Some(42), max_rounds: 1, ..GameConfig::default() };
/// let mut engine = Engine::new(config, vec![Box::new(Discarder), Box::new(Discarder)]).unwrap();
/// let winner = engine.play(&mut NullRenderer).unwrap();
/// assert!(winner.is_some());
/// assert!(engine.state().is_game_over());
/// ```
pub struct Engine<'a> {
    state: GameState,
    players: Vec<Box<dyn PlayerStrategy + 'a>>,
    log: GameLog,
}

impl<'a> Engine<'a> {
    pub fn new(
        config: GameConfig,
        players: Vec<Box<dyn PlayerStrategy + 'a>>,
    ) -> Result<Self, GameError> {
        if players.len() != config.player_count {
            return Err(GameError::InvalidConfig(format!(
                "{} players seated but player_count is {}",
                players.len(),
                config.player_count
            )));
        }
        let state = GameState::new(config)?;
        Ok(Self::from_state(state, players))
    }

    /// Wraps an already dealt game.
    pub fn from_state(state: GameState, players: Vec<Box<dyn PlayerStrategy + 'a>>) -> Self {
        let mut log = GameLog::new();
        log.push(Event::new(&state, Action::BeginGame, None));
        Self {
            state,
            players,
            log,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name()).collect()
    }

    /// Runs the game to completion and returns the winner.
    ///
    /// A state whose round was already scored resumes with the next deal;
    /// a finished game returns its winner without playing.
    ///
    /// # Errors
    ///
    /// Illegal moves never escape; they go to [`Renderer::render_error`].
    /// Fatal errors (a player quitting, a failing strategy, a deal that runs
    /// out of cards) stop the game and are returned.
    pub fn play(&mut self, renderer: &mut dyn Renderer) -> Result<Option<Winner>, GameError> {
        if self.players.len() != self.state.player_count() {
            return Err(GameError::InvalidConfig("seat count mismatch".into()));
        }
        if self.state.phase() == TurnPhase::Scored && self.state.is_game_over() {
            return Ok(self.state.winner());
        }
        if self.state.phase() != TurnPhase::Scored {
            self.begin_round();
        }
        loop {
            match self.state.phase() {
                TurnPhase::Scored => {
                    if self.state.is_game_over() {
                        break;
                    }
                    self.state.create_new_round()?;
                    self.begin_round();
                    continue;
                }
                TurnPhase::AwaitingPlay if self.state.is_round_over() => {
                    self.finish_round()?;
                    if !self.state.is_game_over() {
                        self.render(renderer);
                    }
                    continue;
                }
                _ => {}
            }

            self.render(renderer);
            let seat = self.state.turn_seat();
            match self.take_turn(seat) {
                Ok(()) => {}
                Err(e) if e.is_player_move_error() => {
                    warn!(seat, error = %e, "illegal move");
                    renderer.render_error(&e);
                }
                Err(e) => return Err(e),
            }
        }

        self.log.push(Event::new(&self.state, Action::EndGame, None));
        self.render(renderer);
        renderer.render_log(&self.log);
        Ok(self.state.winner())
    }

    fn begin_round(&mut self) {
        let round = self.state.current_round_number();
        for player in &mut self.players {
            player.round_started(round);
        }
        self.log
            .push(Event::new(&self.state, Action::BeginRound, None));
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        let names = self.player_names();
        renderer.render(&self.state, &names);
    }

    fn finish_round(&mut self) -> Result<(), GameError> {
        self.state.assign_points()?;
        info!(
            round = self.state.current_round_number(),
            points = ?self.state.board_points(),
            totals = ?self.state.ledger_totals(),
            "round over"
        );
        self.log.push(Event::new(&self.state, Action::EndRound, None));
        Ok(())
    }

    /// Attempts whatever is left of `seat`'s turn: the play if it has not
    /// happened yet, then the draw.
    fn take_turn(&mut self, seat: usize) -> Result<(), GameError> {
        if self.state.phase() == TurnPhase::AwaitingPlay {
            let legal = self.state.board_playable_cards();
            let hand = self.state.hand(seat).cards().to_vec();
            let (card, dest) = self.players[seat]
                .choose_card_to_play(&hand, &legal)
                .map_err(|e| strategy_error(seat, e))?;
            self.state.play_card_to(seat, card, dest)?;
            self.log
                .push(Event::new(&self.state, Action::PlayCard, Some(seat)));
        }

        if let TurnPhase::AwaitingDraw { .. } = self.state.phase() {
            let can_draw_from_discard = self.state.can_draw_from_discard();
            let playable = self.state.is_discard_top_playable();
            let source = self.players[seat]
                .draw_source(can_draw_from_discard, playable)
                .map_err(|e| strategy_error(seat, e))?;
            self.state.draw_from(seat, source)?;
            self.log
                .push(Event::new(&self.state, Action::PickupCard, Some(seat)));
        }
        Ok(())
    }
}

fn strategy_error(seat: usize, e: StrategyError) -> GameError {
    match e {
        StrategyError::Quit => GameError::PlayerQuit { seat },
        StrategyError::Internal(msg) => GameError::Strategy(msg),
    }
}
