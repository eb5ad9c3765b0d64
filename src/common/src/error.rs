use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unrecognized move `{0}`, expected rock, paper or scissors")]
    UnknownMove(String),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GameError>;
