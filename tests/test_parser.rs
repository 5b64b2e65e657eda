use std::path::PathBuf;

use tiny_static::http::parser::{ParseError, parse_request, resolve_target};
use tiny_static::http::reader::LineReader;
use tiny_static::http::request::Request;

async fn parse(raw: &[u8]) -> Result<Request, ParseError> {
    let mut reader = LineReader::new(raw);
    parse_request(&mut reader).await
}

#[tokio::test]
async fn test_parse_simple_get_request() {
    let req = parse(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.filename, PathBuf::from("index.html"));
    assert_eq!(req.range_offset, 0);
    assert_eq!(req.range_end, 0);
    assert!(!req.range_requested);
}

#[tokio::test]
async fn test_parse_root_maps_to_current_directory() {
    let req = parse(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
    assert_eq!(req.filename, PathBuf::from("."));
}

#[tokio::test]
async fn test_parse_bare_newline_terminators() {
    let req = parse(b"GET /a.txt HTTP/1.0\nHost: x\n\n").await.unwrap();
    assert_eq!(req.filename, PathBuf::from("a.txt"));
}

#[tokio::test]
async fn test_parse_range_header() {
    let req = parse(b"GET /video.mp4 HTTP/1.1\r\nRange: bytes=0-99\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(req.range_offset, 0);
    assert_eq!(req.range_end, 100);
    assert!(req.range_requested);
}

#[tokio::test]
async fn test_parse_open_ended_range() {
    let req = parse(b"GET /video.mp4 HTTP/1.1\r\nHost: h\r\nRange: bytes=2048-\r\nAccept: */*\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(req.range_offset, 2048);
    assert_eq!(req.range_end, 0);
}

#[tokio::test]
async fn test_parse_unrecognised_range_is_ignored() {
    for header in [
        "Range: bytes=-500",
        "Range: items=1-2",
        "Range: bytes=4294967296-",
    ] {
        let raw = format!("GET /video.mp4 HTTP/1.1\r\n{}\r\n\r\n", header);
        let req = parse(raw.as_bytes()).await.unwrap();

        assert!(!req.range_requested, "{}", header);
        assert!(!req.is_partial(), "{}", header);
        assert_eq!((req.range_offset, req.range_end), (0, 0), "{}", header);
    }
}

#[tokio::test]
async fn test_parse_method_is_not_inspected() {
    let req = parse(b"BREW /pot HTTP/1.1\r\n\r\n").await.unwrap();

    assert_eq!(req.method, "BREW");
    assert_eq!(req.filename, PathBuf::from("pot"));
}

#[tokio::test]
async fn test_parse_query_string_stripped_and_path_decoded() {
    let req = parse(b"GET /my%20docs/a%2Bb.txt?download=1 HTTP/1.1\r\n\r\n")
        .await
        .unwrap();

    assert_eq!(req.filename, PathBuf::from("my docs/a+b.txt"));
}

#[tokio::test]
async fn test_parse_empty_request_line_is_accepted() {
    let req = parse(b"\r\n").await.unwrap();

    assert_eq!(req.method, "");
    assert_eq!(req.filename, PathBuf::from(""));
}

#[tokio::test]
async fn test_parse_missing_blank_line_is_an_error() {
    let result = parse(b"GET / HTTP/1.1\r\nHost: example.com\r\n").await;
    assert!(matches!(result, Err(ParseError::UnexpectedEof)));
}

#[tokio::test]
async fn test_parse_empty_stream_is_an_error() {
    let result = parse(b"").await;
    assert!(matches!(result, Err(ParseError::UnexpectedEof)));
}

#[tokio::test]
async fn test_parse_leaves_body_unread() {
    let raw = b"POST /upload HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let mut reader = LineReader::new(&raw[..]);

    parse_request(&mut reader).await.unwrap();

    assert_eq!(reader.buffered(), 5);
}

#[test]
fn test_resolve_target_without_leading_slash() {
    assert_eq!(resolve_target(b"notes.txt"), PathBuf::from("notes.txt"));
    assert_eq!(resolve_target(b"/?x=1"), PathBuf::from("."));
}

#[test]
fn test_resolve_target_keeps_dot_dot_segments() {
    assert_eq!(resolve_target(b"/../etc/hosts"), PathBuf::from("../etc/hosts"));
}
