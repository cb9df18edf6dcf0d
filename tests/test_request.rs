use simple_server::http::request::Request;

#[test]
fn test_request_keeps_raw_line() {
    let req = Request::from_line("GET /a.html HTTP/1.1", "index.html");

    assert_eq!(req.line, "GET /a.html HTTP/1.1");
    assert_eq!(req.resource_path, "/a.html");
    assert!(!req.is_malformed());
}

#[test]
fn test_request_root_is_not_malformed() {
    let req = Request::from_line("GET / HTTP/1.1", "index.html");

    assert_eq!(req.resource_path, "index.html");
    assert!(!req.is_malformed());
}

#[test]
fn test_request_malformed_has_empty_path() {
    let req = Request::from_line("GET /", "index.html");

    assert_eq!(req.resource_path, "");
    assert!(req.is_malformed());
}

#[test]
fn test_request_empty_line_is_malformed() {
    let req = Request::from_line(String::new(), "index.html");
    assert!(req.is_malformed());
}
