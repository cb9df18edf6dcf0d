/// Shortest request line that can hold three space-delimited fields.
pub const MIN_REQUEST_LINE_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line shorter than [`MIN_REQUEST_LINE_LEN`]
    TooShort,
    /// Fewer than two spaces, so there is no field between method and version
    MissingTarget,
}

/// Extracts the target of a `METHOD target VERSION` request line.
///
/// The target is everything strictly between the first and the last space.
/// An empty target or `/` resolves to `default_document`; any other target is
/// returned unchanged.
///
/// # Example
///
/// ```
/// # use simple_server::http::parser::parse_request_line;
/// assert_eq!(parse_request_line("GET /a.png HTTP/1.1", "index.html").unwrap(), "/a.png");
/// assert_eq!(parse_request_line("GET / HTTP/1.1", "index.html").unwrap(), "index.html");
/// assert!(parse_request_line("GET /", "index.html").is_err());
/// ```
pub fn parse_request_line(line: &str, default_document: &str) -> Result<String, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.len() < MIN_REQUEST_LINE_LEN {
        return Err(ParseError::TooShort);
    }

    let first = line.find(' ').ok_or(ParseError::MissingTarget)?;
    let last = line.rfind(' ').ok_or(ParseError::MissingTarget)?;
    if last <= first {
        return Err(ParseError::MissingTarget);
    }

    let target = &line[first + 1..last];
    if target.is_empty() || target == "/" {
        return Ok(default_document.to_string());
    }

    Ok(target.to_string())
}
