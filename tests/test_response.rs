use tiny_static::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::PartialContent.as_u16(), 206);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::RangeNotSatisfiable.as_u16(), 416);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::PartialContent.reason_phrase(), "Partial");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    assert_eq!(
        response.header("Content-length"),
        Some(body.len().to_string().as_str())
    );
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-length", "999")
        .build();

    assert_eq!(response.header("Content-length"), Some("999"));
    assert!(response.body.is_empty());
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Cache-Control", "max-age=60")
        .header("Content-type", "text/plain")
        .header("cache-control", "no-cache")
        .build();

    assert_eq!(response.headers[0].1, "no-cache");
    assert_eq!(response.headers[1].0, "Content-type");
}

#[test]
fn test_error_response() {
    let response = Response::error(StatusCode::NotFound, "Not found", "File not found");

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.reason, "Not found");
    assert_eq!(response.body, b"File not found".to_vec());
    assert_eq!(response.header("Content-length"), Some("14"));
    assert_eq!(response.header("Content-type"), None);
}
