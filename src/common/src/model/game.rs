use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

/// Declaration order doubles as the tie-breaking order: Rock < Paper < Scissors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Move {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Steps forward through Rock -> Paper -> Scissors, wrapping around.
    pub fn offset(self, steps: usize) -> Move {
        Self::from_index(self.index() + steps)
    }

    /// The move that beats this one.
    pub fn counter(self) -> Move {
        self.offset(1)
    }

    pub fn beats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(label)
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(GameError::UnknownMove(s.trim().to_owned())),
        }
    }
}

pub fn resolve_round(player_move: Move, computer_move: Move) -> Outcome {
    match player_move.beats(&computer_move) {
        None => Outcome::Tie,
        Some(true) => Outcome::PlayerWin,
        Some(false) => Outcome::ComputerWin,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub player_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
}

impl RoundResult {
    pub fn new(player_move: Move, computer_move: Move) -> Self {
        RoundResult {
            player_move,
            computer_move,
            outcome: resolve_round(player_move, computer_move),
        }
    }
}

// One line of the session log
impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (player, computer) = (self.player_move, self.computer_move);
        match self.outcome {
            Outcome::Tie => write!(f, "{} ties {} (Tie)", player, computer),
            Outcome::PlayerWin => write!(f, "{} breaks {} (Player wins)", player, computer),
            Outcome::ComputerWin => write!(f, "{} beats {} (Computer wins)", computer, player),
        }
    }
}
