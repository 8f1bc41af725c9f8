//! Interactive player reading moves from a line-based input.

use crate::formatters::format_hand;
use crate::io_utils::read_stdin_line;
use crate::terminal::Terminal;
use crate::validation::{ParseResult, parse_card_input, parse_destination, parse_draw_source};
use expeditions_engine::cards::Card;
use expeditions_engine::player::{DrawFrom, PlayTo, PlayerStrategy, StrategyError};
use std::io::BufRead;

/// A human at the keyboard.
///
/// Each step re-prompts until the line parses. `q`, `quit` or end of input
/// becomes [`StrategyError::Quit`]. Whether the parsed move is legal is left
/// to the engine, which reports a rejection and asks again.
pub struct ConsolePlayer<'a> {
    input: &'a mut dyn BufRead,
    terminal: Terminal<'a>,
}

impl<'a> ConsolePlayer<'a> {
    pub fn new(input: &'a mut dyn BufRead, terminal: Terminal<'a>) -> Self {
        Self { input, terminal }
    }

    fn ask<T>(&mut self, prompt: &str, parse: fn(&str) -> ParseResult<T>) -> Result<T, StrategyError> {
        loop {
            self.terminal.prompt(prompt);
            let Some(line) = read_stdin_line(self.input) else {
                return Err(StrategyError::Quit);
            };
            match parse(&line) {
                ParseResult::Value(v) => return Ok(v),
                ParseResult::Quit => return Err(StrategyError::Quit),
                ParseResult::Invalid(msg) => self.terminal.error(&msg),
            }
        }
    }
}

impl PlayerStrategy for ConsolePlayer<'_> {
    fn name(&self) -> &str {
        "You"
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        let playable: Vec<Card> = hand.iter().filter(|c| legal.contains(c)).copied().collect();
        self.terminal
            .line(&format!("Playable on expeditions: {}", format_hand(&playable)));
        let card = self.ask("Card (e.g. Y7, BH; q to quit): ", parse_card_input)?;
        let dest = self.ask("Expedition or discard? [e/d]: ", parse_destination)?;
        Ok((card, dest))
    }

    fn choose_draw_source(&mut self, is_discard_top_playable: bool) -> Result<DrawFrom, StrategyError> {
        let prompt = if is_discard_top_playable {
            "Draw from deck or discard (top is playable)? [de/di]: "
        } else {
            "Draw from deck or discard? [de/di]: "
        };
        self.ask(prompt, parse_draw_source)
    }
}
