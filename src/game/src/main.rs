use std::process;

use clap::Parser;
use common::utility::create_shutdown_channel;
use game::{
    entrypoint::{serve, GameConfig},
    service::console::Format,
};
use tracing::{error, info, Level};

#[derive(Debug, Parser)]
#[command(name = "rps", version)]
#[command(about = "Play Rock Paper Scissors against a computer that keeps changing its mind")]
struct Args {
    /// Console format: plain commands or JSON lines
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Seed for the computer opponent, for replaying a session
    #[arg(long)]
    seed: Option<u64>,

    /// Log each round's strategy and session lifecycle to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::ERROR })
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig {
        format: args.format,
        seed: args.seed,
    };
    let shutdown_receiver = create_shutdown_channel().await;
    let result = serve(config, tokio::io::stdin(), tokio::io::stdout(), shutdown_receiver).await;

    // Exit right away: a stdin read still parked on its blocking thread would
    // otherwise hold up runtime shutdown.
    match result {
        Ok(state) => {
            info!(session = %state.id, "Goodbye");
            process::exit(0);
        }
        Err(e) => {
            error!("Session failed: {}", e);
            process::exit(1);
        }
    }
}
