use serde::{Deserialize, Serialize};

/// Per-player running record: one entry per completed round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    values: Vec<i32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_a_value(&mut self, v: i32) {
        self.values.push(v);
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn total(&self) -> i32 {
        self.values.iter().sum()
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// Exactly one seat holds the highest total: `(seat, points)`
    Single(usize, i32),
    /// Every seat sharing the highest total, in seat order
    Tie(Vec<(usize, i32)>),
}

impl Winner {
    pub fn seats(&self) -> Vec<usize> {
        match self {
            Winner::Single(seat, _) => vec![*seat],
            Winner::Tie(entries) => entries.iter().map(|(s, _)| *s).collect(),
        }
    }

    pub fn points(&self) -> i32 {
        match self {
            Winner::Single(_, p) => *p,
            Winner::Tie(entries) => entries.first().map(|(_, p)| *p).unwrap_or(0),
        }
    }
}

/// One ledger per seat, in seat order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorer {
    ledgers: Vec<Ledger>,
}

impl Scorer {
    pub fn new(player_count: usize) -> Self {
        Self {
            ledgers: vec![Ledger::new(); player_count],
        }
    }

    pub fn ledgers(&self) -> &[Ledger] {
        &self.ledgers
    }

    /// Appends one round's points; `round_points[i]` belongs to seat `i`.
    pub fn record_round(&mut self, round_points: &[i32]) {
        for (ledger, &p) in self.ledgers.iter_mut().zip(round_points) {
            ledger.add_a_value(p);
        }
    }

    pub fn totals(&self) -> Vec<i32> {
        self.ledgers.iter().map(Ledger::total).collect()
    }

    pub fn rounds_recorded(&self) -> usize {
        self.ledgers.first().map(|l| l.values().len()).unwrap_or(0)
    }

    /// Highest total wins; ties return every tied seat.
    pub fn get_winner(&self) -> Option<Winner> {
        let totals = self.totals();
        let best = *totals.iter().max()?;
        let mut top: Vec<(usize, i32)> = totals
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == best)
            .map(|(i, &t)| (i, t))
            .collect();
        if top.len() == 1 {
            let (seat, points) = top.remove(0);
            Some(Winner::Single(seat, points))
        } else {
            Some(Winner::Tie(top))
        }
    }
}
