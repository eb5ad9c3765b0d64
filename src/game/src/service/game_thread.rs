use agent::dice::Dice;
use common::model::messages::{ClientRequest, ClientResponse};
use tokio::sync::{
    broadcast,
    mpsc::{Receiver, Sender},
};
use tracing::{debug, info, warn};

use crate::{
    model::internal::GameRequest,
    service::round_engine::{RoundEngine, SessionState},
};

/// Owns one session and works through console requests one at a time.
pub struct GameThread<D: Dice> {
    engine: RoundEngine<D>,
    state: SessionState,
}

impl<D: Dice> GameThread<D> {
    pub fn new(engine: RoundEngine<D>, state: SessionState) -> Self {
        GameThread { engine, state }
    }

    /// Runs until the player quits, the console hangs up or a shutdown
    /// signal arrives, then hands back the final session state.
    pub async fn run(
        mut self,
        shutdown_receiver: &mut broadcast::Receiver<()>,
        mut from_console: Receiver<GameRequest>,
        to_console: Sender<ClientResponse>,
    ) -> SessionState {
        info!(session = %self.state.id, "Session started");
        let greeting = ClientResponse::SessionStarted {
            session_id: self.state.id,
        };
        if to_console.send(greeting).await.is_err() {
            warn!("Console closed before the session started");
            return self.state;
        }

        loop {
            tokio::select! {
                request = from_console.recv() => {
                    let Some(request) = request else {
                        debug!("Console input closed");
                        break;
                    };
                    let response = self.update(request);
                    let done = matches!(response, ClientResponse::Goodbye { .. });
                    if to_console.send(response).await.is_err() {
                        warn!("Console output closed");
                        break;
                    }
                    if done {
                        break;
                    }
                }
                _ = shutdown_receiver.recv() => {
                    break;
                }
            }
        }

        info!(
            session = %self.state.id,
            rounds = self.state.tally.rounds_played(),
            "Session ended"
        );
        self.state
    }

    pub fn update(&mut self, request: GameRequest) -> ClientResponse {
        match request {
            GameRequest::Client(ClientRequest::Move { value }) => {
                let result = self.engine.play_round(&mut self.state, value);
                ClientResponse::RoundResult {
                    result,
                    tally: self.state.tally,
                }
            }
            GameRequest::Client(ClientRequest::ShowLog) => ClientResponse::Log {
                rounds: self.state.log.clone(),
            },
            GameRequest::Client(ClientRequest::Quit) => ClientResponse::Goodbye {
                tally: self.state.tally,
            },
            GameRequest::Invalid { input, reason } => {
                warn!("Rejected input {:?}: {}", input, reason);
                ClientResponse::Rejected { input, reason }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &SessionState {
        &self.state
    }
}
