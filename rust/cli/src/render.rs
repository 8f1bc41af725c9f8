//! Text rendering of the table for `play`.

use crate::formatters::{format_board, format_card, format_hand, format_scores, format_seat};
use crate::terminal::Terminal;
use expeditions_engine::engine::Renderer;
use expeditions_engine::errors::GameError;
use expeditions_engine::game::{GameState, TurnPhase};
use expeditions_engine::logger::GameLog;

/// Writes the table to the terminal.
///
/// With a human seat the full table is shown before each of that seat's
/// plays; bot-only games print just the round and game summaries.
pub struct ConsoleRenderer<'a> {
    terminal: Terminal<'a>,
    human_seat: Option<usize>,
}

impl<'a> ConsoleRenderer<'a> {
    pub fn new(terminal: Terminal<'a>, human_seat: Option<usize>) -> Self {
        Self {
            terminal,
            human_seat,
        }
    }

    fn render_table(&self, state: &GameState, players: &[&str], seat: usize) {
        let t = &self.terminal;
        t.line("");
        t.line(&format!(
            "Round {}/{}  deck: {}  discard: {}",
            state.current_round_number(),
            state.max_rounds(),
            state.deck_remaining(),
            state
                .discard_top()
                .map(format_card)
                .unwrap_or_else(|| "-".to_string())
        ));
        for (i, board) in state.boards().iter().enumerate() {
            t.line(&format!("{}:", format_seat(i, players)));
            for line in format_board(board) {
                t.line(&line);
            }
        }
        t.line(&format!("Your hand: {}", format_hand(state.hand(seat).cards())));
    }

    fn render_round_end(&self, state: &GameState, players: &[&str]) {
        let t = &self.terminal;
        t.line(&format!(
            "Round {} over: {}",
            state.current_round_number(),
            format_scores(&state.board_points(), players)
        ));
        t.line(&format!("Totals: {}", format_scores(&state.ledger_totals(), players)));
        if state.is_game_over() {
            t.line("Game over");
        }
    }
}

impl Renderer for ConsoleRenderer<'_> {
    fn render(&mut self, state: &GameState, players: &[&str]) {
        match state.phase() {
            TurnPhase::Scored => self.render_round_end(state, players),
            TurnPhase::AwaitingPlay if Some(state.turn_seat()) == self.human_seat => {
                if !state.is_round_over() {
                    self.render_table(state, players, state.turn_seat());
                }
            }
            _ => {}
        }
    }

    fn render_error(&mut self, error: &GameError) {
        self.terminal.error(&error.to_string());
    }

    fn render_log(&mut self, log: &GameLog) {
        tracing::debug!(events = log.len(), "game log complete");
    }
}
