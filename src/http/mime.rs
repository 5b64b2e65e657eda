//! Content type lookup by file extension.

/// Returned when the extension is missing or unknown.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Searched in order; the first exact match wins.
const MIME_TYPES: &[(&str, &str)] = &[
    (".css", "text/css"),
    (".gif", "image/gif"),
    (".htm", "text/html"),
    (".html", "text/html"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".ico", "image/x-icon"),
    (".js", "application/javascript"),
    (".pdf", "application/pdf"),
    (".mp4", "video/mp4"),
    (".png", "image/png"),
    (".svg", "image/svg+xml"),
    (".xml", "text/xml"),
];

/// Maps everything from the last `.` of `filename` to a content type.
///
/// Matching is case-sensitive.
///
/// ```
/// # use tiny_static::http::mime::mime_type;
/// assert_eq!(mime_type("a.b.html"), "text/html");
/// assert_eq!(mime_type("noext"), "text/plain");
/// ```
pub fn mime_type(filename: &str) -> &'static str {
    let Some(dot) = filename.rfind('.') else {
        return DEFAULT_MIME_TYPE;
    };
    let extension = &filename[dot..];

    MIME_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .unwrap_or(DEFAULT_MIME_TYPE)
}
