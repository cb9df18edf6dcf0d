use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::BodyMode;
use crate::files::FileMetadata;
use crate::http::response::ResponseHead;

const HTTP_VERSION: &str = "HTTP/1.1";

pub fn serialize_head(head: &ResponseHead) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in head.headers() {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes complete responses onto a client channel.
pub struct ResponseWriter<W> {
    stream: W,
    body_mode: BodyMode,
}

impl<W> ResponseWriter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(stream: W, body_mode: BodyMode) -> Self {
        Self { stream, body_mode }
    }

    /// Sends a 200 response whose body is the file described by `file`.
    ///
    /// `content_type` normally comes from [`mime_type`](crate::http::mime::mime_type)
    /// applied to the requested path.
    ///
    /// `Content-Length` is the size recorded at probe time. Returns the number
    /// of body bytes actually written, which differs from that size when the
    /// file changed since probing or when line mode appends a terminator.
    pub async fn send_file(
        &mut self,
        file: &FileMetadata,
        content_type: &'static str,
    ) -> anyhow::Result<u64> {
        let shown = file.path.display();
        let head = ResponseHead::ok(file.size_bytes, content_type);
        tracing::info!(path = %shown, mime = head.content_type, "Sending file");

        self.stream.write_all(&serialize_head(&head)).await?;

        let source = File::open(&file.path)
            .await
            .with_context(|| format!("failed to reopen {}", shown))?;

        let written = match self.body_mode {
            BodyMode::Bytes => {
                let mut source = source;
                tokio::io::copy(&mut source, &mut self.stream).await?
            }
            BodyMode::Lines => self.copy_lines(source).await?,
        };

        self.stream.flush().await?;
        Ok(written)
    }

    /// Sends a 404 response naming `path` in its body.
    pub async fn send_not_found(&mut self, path: &str) -> anyhow::Result<()> {
        let (head, body) = ResponseHead::not_found(path);
        tracing::info!(path = %path, "File not found");

        self.stream.write_all(&serialize_head(&head)).await?;
        self.stream.write_all(body.as_bytes()).await?;
        self.stream.flush().await?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.stream
    }

    async fn copy_lines(&mut self, source: File) -> anyhow::Result<u64> {
        let mut reader = BufReader::new(source);
        let mut line = Vec::new();
        let mut written = 0u64;

        loop {
            line.clear();
            let n = reader.read_until(b'\n', &mut line).await?;
            if n == 0 {
                break;
            }
            if line.last() != Some(&b'\n') {
                line.push(b'\n');
            }
            self.stream.write_all(&line).await?;
            written += line.len() as u64;
        }

        Ok(written)
    }
}
