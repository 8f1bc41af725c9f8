use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::GameState;

/// What happened at a point in the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    BeginGame,
    BeginRound,
    PlayCard,
    PickupCard,
    EndRound,
    EndGame,
}

/// Public and private table state captured after an action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Round number (1-based)
    pub round: u32,
    pub dealer_seat: usize,
    pub turn_seat: usize,
    pub deck_remaining: usize,
    /// Discard pile from bottom to top
    pub discard: Vec<Card>,
    /// Hand contents per seat
    pub hands: Vec<Vec<Card>>,
    /// Per seat, per color (in color order), the expedition cards as played
    pub expeditions: Vec<Vec<Vec<Card>>>,
    /// Ledger totals per seat
    pub scores: Vec<i32>,
}

impl GameSnapshot {
    pub fn from_state(gs: &GameState) -> Self {
        Self {
            round: gs.current_round_number(),
            dealer_seat: gs.dealer_seat(),
            turn_seat: gs.turn_seat(),
            deck_remaining: gs.deck_remaining(),
            discard: gs.discard().cards().to_vec(),
            hands: gs.hands().iter().map(|h| h.cards().to_vec()).collect(),
            expeditions: gs
                .boards()
                .iter()
                .map(|b| b.iter().map(|e| e.cards().to_vec()).collect())
                .collect(),
            scores: gs.ledger_totals(),
        }
    }
}

/// One entry of the game history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub snapshot: GameSnapshot,
    pub action: Action,
    /// Acting seat for per-player actions
    #[serde(default)]
    pub seat: Option<usize>,
    /// Timestamp (RFC3339), filled in when persisted
    #[serde(default)]
    pub ts: Option<String>,
}

impl Event {
    pub fn new(gs: &GameState, action: Action, seat: Option<usize>) -> Self {
        Self {
            snapshot: gs.snapshot(),
            action,
            seat,
            ts: None,
        }
    }
}

/// Append-only, in-memory game history.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    events: Vec<Event>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn count(&self, action: Action) -> usize {
        self.events.iter().filter(|e| e.action == action).count()
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes events as JSON lines (LF only).
pub struct EventLogger {
    writer: BufWriter<File>,
}

impl EventLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, event: &Event) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut ev = event.clone();
        if ev.ts.is_none() {
            ev.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&ev).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn write_all(&mut self, log: &GameLog) -> std::io::Result<()> {
        for e in log.events() {
            self.write(e)?;
        }
        Ok(())
    }
}
