use std::fmt;

use common::model::{game::Move, stats::ChoiceHistogram};
use serde::{Deserialize, Serialize};

use crate::dice::Dice;

/// How the computer picks its move for one round.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    LeastUsed,
    MostUsed,
    LastUsed,
    Cheat,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::LeastUsed,
        Strategy::MostUsed,
        Strategy::LastUsed,
        Strategy::Cheat,
    ];

    /// `histogram` already includes the move being played this round;
    /// `last_player_move` is the one from the round before.
    ///
    /// LeastUsed and MostUsed step `+1` / `+2` through Rock -> Paper -> Scissors
    /// from the player's least / most picked move. Only the `+1` case lands on
    /// the move that beats it.
    pub fn make_move<D>(
        &self,
        histogram: &ChoiceHistogram,
        last_player_move: Option<Move>,
        dice: &mut D,
    ) -> Move
    where
        D: Dice + ?Sized,
    {
        match self {
            Strategy::Random => dice.any_move(),
            Strategy::LeastUsed => histogram.least_used().offset(1),
            Strategy::MostUsed => histogram.most_used().offset(2),
            Strategy::LastUsed => last_player_move.unwrap_or_else(|| dice.any_move()),
            // Nothing to peek at before the first round
            Strategy::Cheat => match last_player_move {
                Some(last) if dice.cheat() => last.counter(),
                _ => dice.any_move(),
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Random => "Random",
            Strategy::LeastUsed => "Least Used",
            Strategy::MostUsed => "Most Used",
            Strategy::LastUsed => "Last Used",
            Strategy::Cheat => "Cheat",
        };
        f.write_str(label)
    }
}
