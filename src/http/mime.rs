/// Content type used when the extension is missing or unknown.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Returns the content type for `path` based on the text after its last `.`.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// # use simple_server::http::mime::mime_type;
/// assert_eq!(mime_type("a/b.html"), "text/html");
/// assert_eq!(mime_type("photo.JPG"), "text/plain");
/// ```
pub fn mime_type(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return DEFAULT_MIME_TYPE;
    };

    match ext {
        "html" => "text/html",
        "png" => "image/png",
        "jpg" => "image/jpeg",
        _ => DEFAULT_MIME_TYPE,
    }
}
