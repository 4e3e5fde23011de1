use httpget::http::response::{StatusClass, classify};

#[test]
fn test_status_class_as_u16() {
    assert_eq!(StatusClass::Ok.as_u16(), Some(200));
    assert_eq!(StatusClass::NotFound.as_u16(), Some(404));
    assert_eq!(StatusClass::MovedPermanently.as_u16(), Some(301));
    assert_eq!(StatusClass::Unknown.as_u16(), None);
}

#[test]
fn test_status_class_marker() {
    assert_eq!(StatusClass::Ok.marker(), Some("200 OK"));
    assert_eq!(StatusClass::NotFound.marker(), Some("404 File not found"));
    assert_eq!(
        StatusClass::MovedPermanently.marker(),
        Some("301 Moved Permanently")
    );
    assert_eq!(StatusClass::Unknown.marker(), None);
}

#[test]
fn test_classify_status_lines() {
    assert_eq!(classify(b"HTTP/1.0 200 OK"), StatusClass::Ok);
    assert_eq!(classify(b"HTTP/1.1 200 OK\r\nServer: a"), StatusClass::Ok);
    assert_eq!(
        classify(b"HTTP/1.0 404 File not found\r\n"),
        StatusClass::NotFound
    );
    assert_eq!(
        classify(b"HTTP/1.0 301 Moved Permanently\r\nLocation: /x"),
        StatusClass::MovedPermanently
    );
}

#[test]
fn test_classify_needs_exact_reason_phrase() {
    // Standard 404 wording is not the marker this client looks for.
    assert_eq!(classify(b"HTTP/1.1 404 Not Found"), StatusClass::Unknown);
    assert_eq!(classify(b"HTTP/1.1 200 ok"), StatusClass::Unknown);
    assert_eq!(classify(b"HTTP/1.1 302 Found"), StatusClass::Unknown);
    assert_eq!(classify(b""), StatusClass::Unknown);
}

#[test]
fn test_classify_matches_anywhere_in_block() {
    let header = b"HTTP/1.0 500 Oops\r\nX-Note: 200 OK";
    assert_eq!(classify(header), StatusClass::Ok);
}

#[test]
fn test_classify_priority_order() {
    let header = b"HTTP/1.0 404 File not found\r\nX-Was: 200 OK";
    assert_eq!(classify(header), StatusClass::Ok);
}

#[test]
fn test_classify_non_utf8_header() {
    let header = b"HTTP/1.0 200 OK\r\nX-Bin: \xff\xfe";
    assert_eq!(classify(header), StatusClass::Ok);
}
