//! Tests for the per-connection request/response cycle

use simple_server::config::{BodyMode, Config};
use simple_server::http::connection::{Connection, ConnectionState};
use std::path::PathBuf;

fn doc_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "simple-server-conn-{}-{}",
        name,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_for(root: PathBuf) -> Config {
    Config {
        document_root: root,
        ..Config::default()
    }
}

async fn serve(request: &[u8], cfg: &Config) -> String {
    let mut conn = Connection::new(request, Vec::new(), cfg);
    conn.run().await.unwrap();
    assert!(matches!(conn.state(), ConnectionState::Closed));
    String::from_utf8(conn.into_writer()).unwrap()
}

fn body_of(response: &str) -> &str {
    match response.find("\r\n\r\n") {
        Some(pos) => &response[pos + 4..],
        None => "",
    }
}

#[tokio::test]
async fn test_root_serves_default_document() {
    let root = doc_root("root");
    std::fs::write(root.join("index.html"), "hello").unwrap();
    let cfg = config_for(root);

    let resp = serve(b"GET / HTTP/1.1\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(resp.contains("Content-Type: text/html\r\n"));
    assert!(resp.contains("Content-Length: 5\r\n"));
    assert!(body_of(&resp).contains("hello"));
}

#[tokio::test]
async fn test_missing_file_is_404_with_path() {
    let cfg = config_for(doc_root("missing"));

    let resp = serve(b"GET /missing.png HTTP/1.1\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert_eq!(
        body_of(&resp),
        "The following file was not found: /missing.png"
    );
}

#[tokio::test]
async fn test_malformed_request_is_404_with_empty_path() {
    let cfg = config_for(doc_root("malformed"));

    let resp = serve(b"GET /\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert_eq!(body_of(&resp), "The following file was not found: ");
}

#[tokio::test]
async fn test_empty_input_is_404() {
    let cfg = config_for(doc_root("empty-input"));

    let resp = serve(b"", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_headers_are_ignored() {
    let root = doc_root("headers");
    std::fs::write(root.join("pic.png"), [0x89, b'P', b'N', b'G']).unwrap();
    let cfg = Config {
        body_mode: BodyMode::Bytes,
        ..config_for(root)
    };

    let request = b"GET /pic.png HTTP/1.1\r\n\
                    Host: localhost\r\n\
                    Accept: image/*\r\n\
                    Connection: keep-alive\r\n\
                    \r\n";
    let mut conn = Connection::new(&request[..], Vec::new(), &cfg);
    conn.run().await.unwrap();
    let out = conn.into_writer();

    let text = String::from_utf8_lossy(&out);
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: image/png\r\n"));
    assert!(text.contains("Connection: Close\r\n"));
    assert!(out.ends_with(&[0x89, b'P', b'N', b'G']));
}

#[tokio::test]
async fn test_missing_blank_line_reads_to_end() {
    let root = doc_root("no-blank");
    std::fs::write(root.join("notes.txt"), "abc\n").unwrap();
    let cfg = config_for(root);

    let resp = serve(b"GET /notes.txt HTTP/1.1\r\nHost: x\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(resp.contains("Content-Type: text/plain\r\n"));
    assert_eq!(body_of(&resp), "abc\n");
}

#[tokio::test]
async fn test_custom_default_document() {
    let root = doc_root("custom-default");
    std::fs::write(root.join("home.html"), "<p>home</p>").unwrap();
    let cfg = Config {
        default_document: "home.html".to_string(),
        ..config_for(root)
    };

    let resp = serve(b"GET  HTTP/1.1\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(body_of(&resp).contains("<p>home</p>"));
}

#[tokio::test]
async fn test_directory_target_is_404() {
    let root = doc_root("dir-target");
    std::fs::create_dir_all(root.join("sub")).unwrap();
    let cfg = config_for(root);

    let resp = serve(b"GET /sub HTTP/1.1\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert_eq!(body_of(&resp), "The following file was not found: /sub");
}

#[tokio::test]
async fn test_non_utf8_request_line_is_handled() {
    let cfg = config_for(doc_root("non-utf8"));

    let resp = serve(b"GET /\xff\xfe.html HTTP/1.1\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_read_request_stops_at_blank_line() {
    let cfg = config_for(doc_root("read-request"));
    let input = b"GET /a.html HTTP/1.1\r\nHost: x\r\n\r\nleftover";
    let mut reader = &input[..];

    let mut conn = Connection::new(&mut reader, Vec::new(), &cfg);
    let req = conn.read_request().await;
    drop(conn);

    assert_eq!(req.line, "GET /a.html HTTP/1.1");
    assert_eq!(req.resource_path, "/a.html");
    assert_eq!(reader, b"leftover");
}

#[tokio::test]
async fn test_parent_dir_cannot_escape_root() {
    let base = doc_root("escape");
    let root = base.join("www");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(base.join("secret.txt"), "TOPSECRET").unwrap();
    let cfg = config_for(root);

    let resp = serve(b"GET /../secret.txt HTTP/1.1\r\n\r\n", &cfg).await;

    assert!(resp.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(!resp.contains("TOPSECRET"));
    assert_eq!(
        body_of(&resp),
        "The following file was not found: /../secret.txt"
    );
}
