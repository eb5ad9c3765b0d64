use serde::{Deserialize, Serialize};

use super::game::{Move, Outcome};

/// How often the player has picked each move this session.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceHistogram {
    counts: [u32; 3],
}

impl ChoiceHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: Move) {
        self.counts[value.index()] += 1;
    }

    pub fn count(&self, value: Move) -> u32 {
        self.counts[value.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// First move in Rock/Paper/Scissors order with the lowest count.
    pub fn least_used(&self) -> Move {
        Move::ALL
            .into_iter()
            .min_by_key(|value| self.count(*value))
            .unwrap_or(Move::Rock)
    }

    /// First move in Rock/Paper/Scissors order with the highest count.
    pub fn most_used(&self) -> Move {
        // max_by_key keeps the last maximum, so walk the moves backwards
        Move::ALL
            .into_iter()
            .rev()
            .max_by_key(|value| self.count(*value))
            .unwrap_or(Move::Rock)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.player_wins + self.computer_wins + self.ties
    }
}
