use crate::http::parser::parse_request_line;

/// A client request, reduced to its first line.
///
/// Method, version and headers are not kept; only the target survives as
/// `resource_path`.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request line as received, without its line terminator
    pub line: String,
    /// Resolved target, empty when the line could not be parsed
    pub resource_path: String,
}

impl Request {
    /// Builds a request from its raw first line.
    ///
    /// A malformed line yields an empty `resource_path` instead of an error, so
    /// the caller can still answer with a 404.
    pub fn from_line(line: impl Into<String>, default_document: &str) -> Self {
        let line = line.into();
        let resource_path = match parse_request_line(&line, default_document) {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = ?e, line = %line, "Malformed request line");
                String::new()
            }
        };

        Self {
            line,
            resource_path,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.resource_path.is_empty()
    }
}
