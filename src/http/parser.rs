use std::ffi::OsString;
use std::io;
use std::os::unix::ffi::OsStringExt;
use std::path::PathBuf;

use percent_encoding::percent_decode;
use thiserror::Error;
use tokio::io::AsyncRead;

use crate::http::reader::{LineReader, MAX_LINE};
use crate::http::request::Request;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("connection closed before end of headers")]
    UnexpectedEof,
}

/// Reads the request line and header block from `reader`.
///
/// Only the target and an optional `Range: bytes=<start>-<end>` header are
/// kept. Bytes after the blank line are left unread.
pub async fn parse_request<R>(reader: &mut LineReader<R>) -> Result<Request, ParseError>
where
    R: AsyncRead + Unpin,
{
    let mut line = Vec::with_capacity(MAX_LINE);

    reader.read_line(&mut line, MAX_LINE).await?;
    let mut parts = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|part| !part.is_empty());
    let method = String::from_utf8_lossy(parts.next().unwrap_or_default()).into_owned();
    let target = parts.next().unwrap_or_default().to_vec();

    let mut range = None;
    while !is_blank_line(&line) {
        if reader.read_line(&mut line, MAX_LINE).await? == 0 {
            return Err(ParseError::UnexpectedEof);
        }

        if let Some(parsed) = line.strip_prefix(b"Range:").and_then(parse_range) {
            range = Some(parsed);
        }
    }

    let (range_offset, range_end) = range.unwrap_or((0, 0));

    Ok(Request {
        method,
        filename: resolve_target(&target),
        range_offset,
        range_end,
        range_requested: range.is_some(),
    })
}

fn is_blank_line(line: &[u8]) -> bool {
    line == b"\n" || line == b"\r\n"
}

/// Parses the value of a `Range` header into a half-open `(offset, end)`.
///
/// Only `bytes=<start>-[<end>]` is recognised. The end on the wire is
/// inclusive, so a nonzero end is bumped by one; a missing end is left at 0.
pub fn parse_range(value: &[u8]) -> Option<(u32, u32)> {
    let ranges = value.trim_ascii_start().strip_prefix(b"bytes=")?;

    let (start, rest) = split_number(ranges);
    let offset = start?;

    let end = rest
        .strip_prefix(b"-")
        .and_then(|rest| split_number(rest).0)
        .unwrap_or(0);

    Some((offset, if end != 0 { end.saturating_add(1) } else { 0 }))
}

/// Splits a leading run of ASCII digits off `bytes` and parses it.
fn split_number(bytes: &[u8]) -> (Option<u32>, &[u8]) {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let (number, rest) = bytes.split_at(digits);

    let parsed = std::str::from_utf8(number)
        .ok()
        .and_then(|s| s.parse::<u32>().ok());
    (parsed, rest)
}

/// Turns a request target into a server-relative path.
///
/// A leading `/` is dropped and an empty remainder means the root (`.`).
/// The query string is discarded before percent-decoding.
pub fn resolve_target(target: &[u8]) -> PathBuf {
    let rooted = target.strip_prefix(b"/");
    let path = rooted.unwrap_or(target);
    let path = match path.iter().position(|&b| b == b'?') {
        Some(query) => &path[..query],
        None => path,
    };

    if rooted.is_some() && path.is_empty() {
        return PathBuf::from(".");
    }

    PathBuf::from(OsString::from_vec(url_decode(path, MAX_LINE)))
}

/// Percent-decodes `src`, producing at most `max - 1` bytes.
///
/// `%XY` with two hex digits becomes the byte `0xXY`; a `%` not followed by
/// two hex digits is copied through unchanged. Decoding stops at a NUL.
pub fn url_decode(src: &[u8], max: usize) -> Vec<u8> {
    percent_decode(src)
        .take_while(|&b| b != 0)
        .take(max.saturating_sub(1))
        .collect()
}
