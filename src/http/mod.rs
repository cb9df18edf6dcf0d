//! HTTP-like request/response handling.
//!
//! This module answers one request per connection with either the contents
//! of a file or a 404 diagnostic.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Extracts the target path from a request line
//! - **`request`**: Request representation (first line only)
//! - **`response`**: Status codes and the fixed response header set
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │  ReadingRequest  │ ← Request line, headers skipped
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Resolving     │ ← Parse target, probe file
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← 200 with file body, or 404
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use simple_server::config::Config;
//! use simple_server::http::connection::Connection;
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load();
//!     let mut conn = Connection::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), &cfg);
//!     conn.run().await
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
