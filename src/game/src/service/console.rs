use async_trait::async_trait;
use common::{
    error::{GameError, Result},
    model::{
        game::Move,
        messages::{ClientRequest, ClientResponse},
        stats::SessionTally,
    },
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::mpsc::{Receiver, Sender},
};
use tracing::debug;

use crate::model::internal::GameRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Plain commands in, scoreboard and round log out
    #[default]
    Text,
    /// One JSON request per line in, one JSON response per line out
    Json,
}

/// Turns one line of console input into a request for the game thread.
/// Blank lines are skipped.
pub fn parse_line(format: Format, line: &str) -> Option<GameRequest> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }
    let parsed = match format {
        Format::Text => parse_command(input),
        Format::Json => serde_json::from_str::<ClientRequest>(input).map_err(GameError::from),
    };
    Some(match parsed {
        Ok(request) => GameRequest::Client(request),
        Err(error) => GameRequest::Invalid {
            input: input.to_owned(),
            reason: error.to_string(),
        },
    })
}

pub fn parse_command(input: &str) -> Result<ClientRequest> {
    match input.to_ascii_lowercase().as_str() {
        "quit" | "q" => Ok(ClientRequest::Quit),
        "log" | "l" => Ok(ClientRequest::ShowLog),
        _ => input.parse::<Move>().map(|value| ClientRequest::Move { value }),
    }
}

/// Forwards console lines to the game thread. Running out of input counts as
/// quitting.
pub async fn read_requests<R>(reader: R, format: Format, to_game: Sender<GameRequest>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut reader = reader;
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer).await? == 0 {
            break;
        }
        // Bytes that are not UTF-8 still reach parse_line and get rejected there
        let line = String::from_utf8_lossy(&buffer);
        let Some(request) = parse_line(format, &line) else {
            continue;
        };
        if to_game.send(request).await.is_err() {
            debug!("Game thread gone, stop reading input");
            return Ok(());
        }
    }
    debug!("End of input");
    let _ = to_game.send(ClientRequest::Quit.into()).await;
    Ok(())
}

#[async_trait]
pub trait Presenter: Send {
    async fn present(&mut self, response: &ClientResponse) -> Result<()>;
}

pub fn presenter<W>(format: Format, out: W) -> Box<dyn Presenter>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    match format {
        Format::Text => Box::new(TextPresenter::new(out)),
        Format::Json => Box::new(JsonPresenter::new(out)),
    }
}

pub async fn present_responses(
    mut presenter: Box<dyn Presenter>,
    mut from_game: Receiver<ClientResponse>,
) -> Result<()> {
    while let Some(response) = from_game.recv().await {
        presenter.present(&response).await?;
    }
    Ok(())
}

pub struct TextPresenter<W> {
    out: W,
}

impl<W> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        TextPresenter { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W> Presenter for TextPresenter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&mut self, response: &ClientResponse) -> Result<()> {
        self.out.write_all(render_text(response).as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

pub struct JsonPresenter<W> {
    out: W,
}

impl<W> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        JsonPresenter { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W> Presenter for JsonPresenter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn present(&mut self, response: &ClientResponse) -> Result<()> {
        let mut body = serde_json::to_string(response)?;
        body.push('\n');
        self.out.write_all(body.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

pub fn render_text(response: &ClientResponse) -> String {
    match response {
        ClientResponse::SessionStarted { .. } => {
            "Choose your move: rock, paper or scissors (log to review, quit to leave)\n".to_string()
        }
        ClientResponse::RoundResult { result, tally } => {
            format!("{}\n{}\n", result, scoreboard(tally))
        }
        ClientResponse::Log { rounds } if rounds.is_empty() => "No rounds played yet\n".to_string(),
        ClientResponse::Log { rounds } => rounds.iter().map(|round| format!("{}\n", round)).collect(),
        ClientResponse::Rejected { input, reason } => format!("Ignored {:?}: {}\n", input, reason),
        ClientResponse::Goodbye { tally } => format!("Final score | {}\n", scoreboard(tally)),
    }
}

fn scoreboard(tally: &SessionTally) -> String {
    format!(
        "Player wins: {} | Computer wins: {} | Ties: {}",
        tally.player_wins, tally.computer_wins, tally.ties
    )
}

#[cfg(test)]
mod tests {
    use common::model::{game::RoundResult, messages::Id};
    use tokio::{io::BufReader, sync::mpsc};

    use super::*;

    fn tally(player_wins: u32, computer_wins: u32, ties: u32) -> SessionTally {
        SessionTally {
            player_wins,
            computer_wins,
            ties,
        }
    }

    #[test]
    fn text_commands() {
        assert_eq!(
            parse_line(Format::Text, "  Rock \n"),
            Some(GameRequest::Client(ClientRequest::Move { value: Move::Rock }))
        );
        assert_eq!(
            parse_line(Format::Text, "p"),
            Some(GameRequest::Client(ClientRequest::Move { value: Move::Paper }))
        );
        assert_eq!(
            parse_line(Format::Text, "LOG"),
            Some(GameRequest::Client(ClientRequest::ShowLog))
        );
        assert_eq!(
            parse_line(Format::Text, "q"),
            Some(GameRequest::Client(ClientRequest::Quit))
        );
        assert_eq!(parse_line(Format::Text, "   "), None);
    }

    #[test]
    fn unknown_text_is_invalid() {
        let Some(GameRequest::Invalid { input, reason }) = parse_line(Format::Text, "lizard") else {
            panic!("Expected invalid request");
        };
        assert_eq!(input, "lizard");
        assert!(reason.contains("lizard"), "{}", reason);
    }

    #[test]
    fn json_requests() {
        assert_eq!(
            parse_line(Format::Json, r#"{"type":"Move","value":"Scissors"}"#),
            Some(GameRequest::Client(ClientRequest::Move {
                value: Move::Scissors
            }))
        );
        assert!(matches!(
            parse_line(Format::Json, "rock"),
            Some(GameRequest::Invalid { .. })
        ));
        assert!(matches!(
            parse_line(Format::Json, r#"{"type":"Move","value":"Lizard"}"#),
            Some(GameRequest::Invalid { .. })
        ));
    }

    #[test]
    fn text_rendering() {
        let response = ClientResponse::RoundResult {
            result: RoundResult::new(Move::Scissors, Move::Rock),
            tally: tally(0, 1, 0),
        };
        assert_eq!(
            render_text(&response),
            "Rock beats Scissors (Computer wins)\nPlayer wins: 0 | Computer wins: 1 | Ties: 0\n"
        );

        let log = ClientResponse::Log {
            rounds: vec![
                RoundResult::new(Move::Rock, Move::Rock),
                RoundResult::new(Move::Paper, Move::Rock),
            ],
        };
        assert_eq!(
            render_text(&log),
            "Rock ties Rock (Tie)\nPaper breaks Rock (Player wins)\n"
        );
        assert_eq!(
            render_text(&ClientResponse::Log { rounds: vec![] }),
            "No rounds played yet\n"
        );
    }

    #[tokio::test]
    async fn json_presenter_writes_one_line_per_response() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter
            .present(&ClientResponse::SessionStarted {
                session_id: Id::new(),
            })
            .await
            .unwrap();
        presenter
            .present(&ClientResponse::Goodbye {
                tally: tally(1, 2, 3),
            })
            .await
            .unwrap();

        let written = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        let goodbye: ClientResponse = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(
            goodbye,
            ClientResponse::Goodbye {
                tally: tally(1, 2, 3)
            }
        );
    }

    #[tokio::test]
    async fn text_presenter_writes_rendered_text() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter
            .present(&ClientResponse::Rejected {
                input: "spock".to_string(),
                reason: "nope".to_string(),
            })
            .await
            .unwrap();
        let written = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(written, "Ignored \"spock\": nope\n");
    }

    #[tokio::test]
    async fn undecodable_line_is_rejected() {
        let input: &[u8] = b"rock\n\xff\xfe\npaper\n";
        let (to_game, mut from_console) = mpsc::channel(8);
        read_requests(BufReader::new(input), Format::Text, to_game)
            .await
            .unwrap();

        assert_eq!(
            from_console.recv().await,
            Some(GameRequest::Client(ClientRequest::Move { value: Move::Rock }))
        );
        assert!(matches!(
            from_console.recv().await,
            Some(GameRequest::Invalid { .. })
        ));
        assert_eq!(
            from_console.recv().await,
            Some(GameRequest::Client(ClientRequest::Move { value: Move::Paper }))
        );
        assert_eq!(
            from_console.recv().await,
            Some(GameRequest::Client(ClientRequest::Quit))
        );
    }

    #[test]
    fn exit_is_not_a_command() {
        assert!(matches!(
            parse_line(Format::Text, "exit"),
            Some(GameRequest::Invalid { .. })
        ));
    }

    #[tokio::test]
    async fn end_of_input_quits() {
        let input: &[u8] = b"rock\n\nlizard\n";
        let (to_game, mut from_console) = mpsc::channel(8);
        read_requests(BufReader::new(input), Format::Text, to_game)
            .await
            .unwrap();

        assert_eq!(
            from_console.recv().await,
            Some(GameRequest::Client(ClientRequest::Move { value: Move::Rock }))
        );
        assert!(matches!(
            from_console.recv().await,
            Some(GameRequest::Invalid { .. })
        ));
        assert_eq!(
            from_console.recv().await,
            Some(GameRequest::Client(ClientRequest::Quit))
        );
        assert_eq!(from_console.recv().await, None);
    }
}
