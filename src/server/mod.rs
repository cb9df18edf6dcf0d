//! Connection loop
//!
//! [`FileServer`] is the seam between the accept loop and the per-connection
//! handler. [`SimpleServer`] is the stock implementation; tests can supply
//! their own `handle_connection` and keep the default loop.

pub mod listener;

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);
use crate::http::connection::Connection;

#[allow(async_fn_in_trait)]
pub trait FileServer {
    /// Serves one request from `reader`, answering on `writer`.
    async fn handle_connection<R, W>(&self, reader: R, writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin;

    /// Accepts clients one at a time, forever.
    ///
    /// Each connection is handled to completion and closed before the next
    /// accept. Failed accepts and failed connections are logged and do not
    /// stop the loop.
    async fn run_forever(&self, listener: TcpListener) -> anyhow::Result<()> {
        loop {
            let (mut socket, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                    // EMFILE and friends stay set until a descriptor frees up
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let (read_half, write_half) = socket.split();
            if let Err(e) = self
                .handle_connection(BufReader::new(read_half), write_half)
                .await
            {
                error!("Connection error from {}: {}", peer, e);
            }
        }
    }
}

/// Serves files from the configured document root.
#[derive(Debug, Clone)]
pub struct SimpleServer {
    config: Config,
}

impl SimpleServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl FileServer for SimpleServer {
    async fn handle_connection<R, W>(&self, reader: R, writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        Connection::new(reader, writer, &self.config).run().await
    }
}
