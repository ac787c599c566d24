//! ticklist-server binary - argument parsing, tracing setup, serve loop

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ticklist_server::{serve, ServerConfig};

/// Server command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "ticklist-server",
    author,
    version,
    about = "Web-based to-do list manager over PostgreSQL"
)]
struct ServerArgs {
    /// Port to listen on (default: PORT env var, then 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// PostgreSQL connection string (default: DATABASE_URL env var)
    #[arg(long)]
    database_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Enable debug logging (unless RUST_LOG is set)
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
    // .env is optional; environment wins where both are set
    dotenvy::dotenv().ok();

    let args = ServerArgs::parse();
    init_tracing(args.debug)?;

    let mut config = ServerConfig::default();
    config.host = args.bind;
    config.timeout_secs = args.timeout;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    serve(config).await?;

    Ok(())
}
