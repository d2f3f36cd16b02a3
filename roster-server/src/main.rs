//! rosterd: employee tool server entry point

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster_server::{serve, AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "rosterd",
    version,
    about = "Employee tool server backed by PostgreSQL"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Enable debug logging (unless RUST_LOG is already set)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; the real environment wins
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let state = AppState::from_env();
    let config = ServerConfig {
        bind_addr: cli.bind,
    };

    serve(state, config).await.context("server error")?;
    Ok(())
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
