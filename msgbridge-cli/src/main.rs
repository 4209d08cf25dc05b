//! msgbridge CLI - bulletin board and private message exchange
//!
//! `msgbridge serve` runs the HTTP server. Configuration comes from
//! flags, the environment, or a local .env file.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "msgbridge",
    version,
    about = "Bulletin board and private message exchange over Postgres"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL and friends from a local .env, if present.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    match cli.command {
        Command::Serve(args) => commands::serve::run_serve(args).await,
    }
}
