use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pawhub::config::{Profile, ServerConfig};

/// GraphQL API over a Postgres registry of owners and their pets
#[derive(Debug, Parser)]
#[command(name = "pawhub", version)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:4000")]
    bind: SocketAddr,

    /// Allow any CORS origin (development only)
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    #[arg(long)]
    debug: bool,
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
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let profile = Profile::from_env();
    tracing::info!(profile = profile.as_str(), "starting pawhub");

    let pool = pawhub::connect(profile)
        .await
        .context("failed to connect to database")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    pawhub::serve(pool, config).await?;
    Ok(())
}
