//! Streaming a regular file, or a byte range of it, to the client.

use std::io::{self, SeekFrom};

use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWrite, AsyncWriteExt};

use crate::error::ServeError;
use crate::http::mime::mime_type;
use crate::http::request::{ByteRange, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// Builds the response head for sending `range` of the requested file.
///
/// Partial requests get `206 Partial` and a `Content-Range` whose upper
/// bound is inclusive; everything else gets `200 OK` and `Accept-Ranges`.
pub fn static_head(request: &Request, range: &ByteRange) -> Response {
    let builder = if request.is_partial() {
        ResponseBuilder::new(StatusCode::PartialContent).header(
            "Content-Range",
            format!("bytes {}-{}/{}", range.offset, range.end - 1, range.total),
        )
    } else {
        ResponseBuilder::new(StatusCode::Ok).header("Accept-Ranges", "bytes")
    };

    builder
        .header("Cache-Control", "no-cache")
        .header("Content-length", range.len().to_string())
        .header(
            "Content-type",
            mime_type(&request.filename.to_string_lossy()),
        )
        .build()
}

/// Writes the head, then bytes `[range.offset, range.end)` of `file`.
///
/// One pass, no retry: any write failure, or the file running out before
/// `range.end`, is a [`ServeError::Transfer`]. Returns the body bytes sent.
/// The caller owns `out` and closes it afterwards either way.
pub async fn serve_static<W>(
    out: &mut W,
    file: &mut File,
    request: &Request,
    range: ByteRange,
) -> Result<u64, ServeError>
where
    W: AsyncWrite + Unpin,
{
    ResponseWriter::new(&static_head(request, &range))
        .write_to_stream(out)
        .await
        .map_err(ServeError::Transfer)?;

    file.seek(SeekFrom::Start(range.offset))
        .await
        .map_err(ServeError::Transfer)?;

    let mut body = (&mut *file).take(range.len());
    let sent = tokio::io::copy(&mut body, out)
        .await
        .map_err(ServeError::Transfer)?;

    if sent < range.len() {
        return Err(ServeError::Transfer(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("file ended after {} of {} bytes", sent, range.len()),
        )));
    }

    out.flush().await.map_err(ServeError::Transfer)?;

    tracing::debug!(
        offset = range.offset,
        end = range.end,
        sent,
        "file transfer complete"
    );

    Ok(sent)
}
