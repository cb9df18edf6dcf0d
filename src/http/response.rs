use crate::http::mime::DEFAULT_MIME_TYPE;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "SimpleServer";

/// Prefix of the body sent with every 404.
pub const NOT_FOUND_MESSAGE: &str = "The following file was not found: ";

/// HTTP status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use simple_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Status line and headers of a response.
///
/// The body is not part of this type: a 200 body is streamed from disk by
/// the writer, a 404 body is the fixed diagnostic in [`ResponseHead::not_found`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub content_length: u64,
    pub content_type: &'static str,
}

impl ResponseHead {
    pub fn ok(content_length: u64, content_type: &'static str) -> Self {
        Self {
            status: StatusCode::Ok,
            content_length,
            content_type,
        }
    }

    /// Head and body of the 404 answer for `path`.
    pub fn not_found(path: &str) -> (Self, String) {
        let body = format!("{NOT_FOUND_MESSAGE}{path}");
        let head = Self {
            status: StatusCode::NotFound,
            content_length: body.len() as u64,
            content_type: DEFAULT_MIME_TYPE,
        };
        (head, body)
    }

    /// Header lines in wire order: Server, Content-Length, Connection,
    /// Content-Type.
    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            ("Server", SERVER_NAME.to_string()),
            ("Content-Length", self.content_length.to_string()),
            ("Connection", "Close".to_string()),
            ("Content-Type", self.content_type.to_string()),
        ]
    }
}
