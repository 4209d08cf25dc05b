//! HTTP server command
//!
//! Resolves the database connection string once at startup, then hands
//! explicit configuration to the server. A missing connection string is
//! fatal here, before any operation can run.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use msgbridge_server::{run_server, DbConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (falls back to the DATABASE_URL environment variable)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("starting msgbridge server on {}", args.bind);

    let db = DbConfig::new(database_url);
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(db, config).await.context("server error")?;

    Ok(())
}
