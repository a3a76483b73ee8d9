//! Ave.ai API gateway.
//!
//! A thin HTTP gateway in front of the Ave.ai v2 cryptocurrency-data REST
//! API. Inbound routes map one-to-one onto upstream endpoints (plus two
//! composite routes that fan out to three concurrent upstream calls); the
//! gateway attaches the API-key header, strips the upstream `data`
//! envelope, and applies client-side truncation for the enumerated list
//! selectors.
//!
//! Startup order: tracing → CLI → config → credential (fatal if absent) →
//! upstream client → listener → serve.

use clap::Parser;
use tokio::net::TcpListener;

use ave_gateway::config::{self, ApiKey};
use ave_gateway::http::HttpServer;
use ave_gateway::lifecycle::Shutdown;
use ave_gateway::observability::logging;
use ave_gateway::upstream::UpstreamClient;

#[derive(Debug, Parser)]
#[command(name = "ave-gateway", version, about = "HTTP gateway for the Ave.ai v2 API")]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = config::load_or_default(cli.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // The credential never lives in config files; missing means we stop
    // here, before the listener binds.
    let api_key = ApiKey::from_env()?;

    let upstream = UpstreamClient::new(&config.upstream, api_key)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, upstream);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
