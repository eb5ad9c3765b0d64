use agent::{client::Client, dice::Dice};
use common::model::{
    game::{Move, RoundResult},
    messages::Id,
    stats::{ChoiceHistogram, SessionTally},
};
use tracing::debug;

/// Everything a session accumulates between process start and quit.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: Id,
    pub histogram: ChoiceHistogram,
    pub last_player_move: Option<Move>,
    pub tally: SessionTally,
    pub log: Vec<RoundResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_id(Id::new())
    }

    pub fn with_id(id: Id) -> Self {
        SessionState {
            id,
            histogram: ChoiceHistogram::new(),
            last_player_move: None,
            tally: SessionTally::new(),
            log: Vec::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RoundEngine<D: Dice> {
    computer: Client<D>,
}

impl<D: Dice> RoundEngine<D> {
    pub fn new(dice: D) -> Self {
        RoundEngine {
            computer: Client::new(dice),
        }
    }

    pub fn play_round(&mut self, state: &mut SessionState, player_move: Move) -> RoundResult {
        // The strategies see this round's pick in the histogram but only the
        // previous round's move as "last used".
        state.histogram.record(player_move);
        let (strategy, computer_move) = self
            .computer
            .play(&state.histogram, state.last_player_move);
        let result = RoundResult::new(player_move, computer_move);

        state.tally.record(result.outcome);
        state.last_player_move = Some(player_move);
        state.log.push(result);
        debug!(session = %state.id, %strategy, "{}", result);
        result
    }
}
