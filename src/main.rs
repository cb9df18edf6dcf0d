use std::path::PathBuf;

use clap::Parser;
use simple_server::config::Config;
use simple_server::server::{listener, SimpleServer};
use tracing_subscriber::EnvFilter;

/// Minimal static file server
#[derive(Debug, Parser)]
#[command(name = "simple-server", version)]
struct Cli {
    /// Port to listen on (0 picks a free port). Without it, one request is
    /// read from stdin and answered on stdout.
    port: Option<u16>,

    /// YAML configuration file
    #[arg(long, env = "SIMPLE_SERVER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the response in standalone mode
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load(),
    };
    let address = cfg.address.clone();
    let server = SimpleServer::new(cfg);

    let Some(port) = cli.port else {
        return listener::serve_stdio(&server).await;
    };

    tokio::select! {
        res = listener::run(&server, &address, port) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
