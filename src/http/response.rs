/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): whole file or directory listing
/// - `PartialContent` (206): byte range of a file
/// - `BadRequest` (400): unreadable request or unsupported file type
/// - `NotFound` (404): target missing
/// - `RangeNotSatisfiable` (416): range starts past the end of the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 206 Partial
    PartialContent,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 416 Range Not Satisfiable
    RangeNotSatisfiable,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tiny_static::http::response::StatusCode;
    /// assert_eq!(StatusCode::PartialContent.as_u16(), 206);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::PartialContent => 206,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::RangeNotSatisfiable => 416,
        }
    }

    /// Returns the reason phrase sent when none is supplied.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::PartialContent => "Partial",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::RangeNotSatisfiable => "Range Not Satisfiable",
        }
    }
}

/// A response ready to be serialised.
///
/// Headers go on the wire in insertion order. The body may be empty even
/// when `Content-length` is set, for responses whose body is streamed
/// separately after the head.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    reason: Option<String>,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: None,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Overrides the default reason phrase.
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Appends a header, replacing an earlier one with the same name.
    ///
    /// Names compare case-insensitively; the replaced header keeps its
    /// position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Appends `Content-length` from the body size unless already present.
    pub fn build(self) -> Response {
        let has_length = self
            .headers
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case("Content-length"));

        let builder = if has_length {
            self
        } else {
            let len = self.body.len().to_string();
            self.header("Content-length", len)
        };

        Response {
            reason: builder
                .reason
                .unwrap_or_else(|| builder.status.reason_phrase().to_string()),
            status: builder.status,
            headers: builder.headers,
            body: builder.body,
        }
    }
}

impl Response {
    /// Minimal error response: status line, `Content-length` and the body
    /// verbatim, with no content type.
    pub fn error(status: StatusCode, reason: &str, body: &str) -> Self {
        ResponseBuilder::new(status)
            .reason(reason)
            .body(body.as_bytes().to_vec())
            .build()
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
