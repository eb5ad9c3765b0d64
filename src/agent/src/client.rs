use common::model::{game::Move, stats::ChoiceHistogram};
use tracing::debug;

use crate::{dice::Dice, strategy::Strategy};

/// The computer side of a session: rolls a strategy each round and plays it.
pub struct Client<D: Dice> {
    dice: D,
}

impl<D: Dice> Client<D> {
    pub fn new(dice: D) -> Self {
        Client { dice }
    }

    pub fn play(
        &mut self,
        histogram: &ChoiceHistogram,
        last_player_move: Option<Move>,
    ) -> (Strategy, Move) {
        let strategy = self.dice.strategy();
        let next_move = strategy.make_move(histogram, last_player_move, &mut self.dice);
        debug!(%strategy, computer_move = %next_move, "Computer picked a move");
        (strategy, next_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn rolls_strategy_before_move() {
        let dice = ScriptedDice::new()
            .with_strategies([Strategy::Random, Strategy::LastUsed])
            .with_moves([Move::Scissors]);
        let mut client = Client::new(dice);
        let histogram = ChoiceHistogram::new();

        assert_eq!(
            client.play(&histogram, None),
            (Strategy::Random, Move::Scissors)
        );
        assert_eq!(
            client.play(&histogram, Some(Move::Paper)),
            (Strategy::LastUsed, Move::Paper)
        );
    }
}
