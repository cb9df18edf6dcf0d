use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};

use crate::config::Config;
use crate::files::{self, FileMetadata};
use crate::http::mime::mime_type;
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// Serves exactly one request read from `reader`, answering on `writer`.
pub struct Connection<'a, R, W> {
    reader: R,
    writer: ResponseWriter<W>,
    config: &'a Config,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    ReadingRequest,
    Resolving(Request),
    Responding(Outcome),
    Closed,
}

/// What the client is about to receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found {
        file: FileMetadata,
        content_type: &'static str,
    },
    /// The path quoted in the 404 body, empty for a malformed request
    NotFound(String),
}

impl<'a, R, W> Connection<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, config: &'a Config) -> Self {
        Self {
            reader,
            writer: ResponseWriter::new(writer, config.body_mode),
            config,
            state: ConnectionState::ReadingRequest,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &self.state {
                ConnectionState::ReadingRequest => {
                    let req = self.read_request().await;
                    self.state = ConnectionState::Resolving(req);
                }

                ConnectionState::Resolving(req) => {
                    let outcome = Self::resolve(req, self.config).await;
                    self.state = ConnectionState::Responding(outcome);
                }

                ConnectionState::Responding(outcome) => {
                    match outcome {
                        Outcome::Found { file, content_type } => {
                            let sent = self.writer.send_file(file, *content_type).await?;
                            if sent != file.size_bytes {
                                tracing::debug!(
                                    advertised = file.size_bytes,
                                    sent,
                                    "Body length differs from Content-Length"
                                );
                            }
                        }
                        Outcome::NotFound(path) => {
                            self.writer.send_not_found(path).await?;
                        }
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request line, then skips header lines up to the blank
    /// `\r\n` line or end of stream.
    ///
    /// Read failures are not fatal: they leave an empty line behind, which
    /// parses as malformed.
    pub async fn read_request(&mut self) -> Request {
        let mut buf = Vec::new();

        if let Err(e) = self.reader.read_until(b'\n', &mut buf).await {
            tracing::warn!(error = %e, "Failed to read request line");
            buf.clear();
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        tracing::info!(request = %line, "Request");

        loop {
            buf.clear();
            match self.reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) if buf == b"\r\n" => break,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read request headers");
                    break;
                }
            }
        }

        Request::from_line(line, &self.config.default_document)
    }

    async fn resolve(req: &Request, config: &Config) -> Outcome {
        if req.is_malformed() {
            return Outcome::NotFound(String::new());
        }

        let Some(path) = files::resolve(&config.document_root, &req.resource_path) else {
            tracing::warn!(path = %req.resource_path, "Refusing path outside document root");
            return Outcome::NotFound(req.resource_path.clone());
        };
        let file = files::probe(&path).await;

        if file.exists {
            Outcome::Found {
                file,
                content_type: mime_type(&req.resource_path),
            }
        } else {
            Outcome::NotFound(req.resource_path.clone())
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}
