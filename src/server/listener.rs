use anyhow::Context;
use tokio::io::BufReader;
use tokio::net::TcpListener;
use tracing::info;

use crate::server::FileServer;

/// Binds the listening socket. Port 0 asks the OS for a free port; the port
/// actually bound is logged.
pub async fn bind(address: &str, port: u16) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((address, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", address, port))?;

    let local = listener.local_addr()?;
    info!(
        "Server is listening on {} & ready to process clients...",
        local.port()
    );

    Ok(listener)
}

/// Server mode: bind, then serve clients sequentially forever.
pub async fn run<S: FileServer>(server: &S, address: &str, port: u16) -> anyhow::Result<()> {
    let listener = bind(address, port).await?;
    server.run_forever(listener).await
}

/// Standalone mode: one request from stdin, answered on stdout.
pub async fn serve_stdio<S: FileServer>(server: &S) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    server.handle_connection(stdin, stdout).await
}
