use std::collections::VecDeque;

use common::model::game::Move;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::warn;

use crate::strategy::Strategy;

/// Chance that the cheating strategy peeks at the player's last move.
pub const CHEAT_PROBABILITY: f64 = 0.1;

/// Every random draw the computer opponent makes.
pub trait Dice {
    /// Strategy for the coming round, uniform over all five.
    fn strategy(&mut self) -> Strategy;

    /// Uniform over Rock, Paper and Scissors.
    fn any_move(&mut self) -> Move;

    /// True with probability [`CHEAT_PROBABILITY`].
    fn cheat(&mut self) -> bool;
}

pub struct RngDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }
}

impl RngDice<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn strategy(&mut self) -> Strategy {
        Strategy::ALL[self.rng.random_range(0..Strategy::ALL.len())]
    }

    fn any_move(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }

    fn cheat(&mut self) -> bool {
        self.rng.random_bool(CHEAT_PROBABILITY)
    }
}

/// Replays queued draws in order, for sessions that must play out exactly.
///
/// Once a queue runs dry it falls back to `Strategy::Random`, `Move::Rock`
/// and no cheating respectively.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDice {
    strategies: VecDeque<Strategy>,
    moves: VecDeque<Move>,
    cheats: VecDeque<bool>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategies(mut self, strategies: impl IntoIterator<Item = Strategy>) -> Self {
        self.strategies.extend(strategies);
        self
    }

    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves.extend(moves);
        self
    }

    pub fn with_cheats(mut self, cheats: impl IntoIterator<Item = bool>) -> Self {
        self.cheats.extend(cheats);
        self
    }
}

impl Dice for ScriptedDice {
    fn strategy(&mut self) -> Strategy {
        self.strategies.pop_front().unwrap_or_else(|| {
            warn!("Scripted strategies exhausted, using Random");
            Strategy::Random
        })
    }

    fn any_move(&mut self) -> Move {
        self.moves.pop_front().unwrap_or_else(|| {
            warn!("Scripted moves exhausted, using Rock");
            Move::Rock
        })
    }

    fn cheat(&mut self) -> bool {
        self.cheats.pop_front().unwrap_or_else(|| {
            warn!("Scripted cheats exhausted, not cheating");
            false
        })
    }
}
