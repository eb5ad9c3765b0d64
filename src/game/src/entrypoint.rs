use agent::dice::RngDice;
use common::error::Result;
use tokio::{
    io::{AsyncRead, AsyncWrite, BufReader},
    sync::{broadcast, mpsc},
    task::JoinHandle,
};
use tracing::info;

use super::service::{
    console::{self, Format},
    game_thread::GameThread,
    round_engine::{RoundEngine, SessionState},
};

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub format: Format,
    // None draws the seed from the OS
    pub seed: Option<u64>,
}

/// Plays one session over `input` / `output` until the player quits, input
/// runs out or `shutdown_receiver` fires.
pub async fn serve<R, W>(
    config: GameConfig,
    input: R,
    output: W,
    mut shutdown_receiver: broadcast::Receiver<()>,
) -> Result<SessionState>
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (to_game_sender, to_game_receiver) = mpsc::channel(100);
    let (to_console_sender, to_console_receiver) = mpsc::channel(100);

    let dice = match config.seed {
        Some(seed) => {
            info!("Seeding computer opponent with {}", seed);
            RngDice::seeded(seed)
        }
        None => RngDice::from_os_rng(),
    };
    let game = GameThread::new(RoundEngine::new(dice), SessionState::new());

    let game_handle: JoinHandle<SessionState> = tokio::spawn(async move {
        game.run(&mut shutdown_receiver, to_game_receiver, to_console_sender)
            .await
    });
    let reader_handle: JoinHandle<Result<()>> = tokio::spawn(console::read_requests(
        BufReader::new(input),
        config.format,
        to_game_sender,
    ));
    let presenter_handle: JoinHandle<Result<()>> = tokio::spawn(console::present_responses(
        console::presenter(config.format, output),
        to_console_receiver,
    ));

    let state = game_handle.await?;
    // A finished reader may carry an input error; a pending one is just waiting on input
    if reader_handle.is_finished() {
        reader_handle.await??;
    } else {
        reader_handle.abort();
    }
    presenter_handle.await??;
    Ok(state)
}
