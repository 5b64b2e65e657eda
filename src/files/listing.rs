//! Generated HTML directory listings.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tokio::io::AsyncWrite;

use crate::error::ServeError;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

const PREAMBLE: &str = concat!(
    "<html><head><style>",
    "body{font-family: monospace; font-size: 13px;}",
    "td {padding: 1.5px 6px;}",
    "</style></head><body><table>\n",
);

const PARENT_ROW: &str = "<tr><td><a href='..'>[..]</a></td><td></td><td></td></tr>\n";

const CLOSING: &str = "</table></body></html>";

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Entry name, with a trailing `/` for directories.
    pub name: String,
    /// Modification time as `YYYY-MM-DD HH:MM`, local time.
    pub timestamp: String,
    /// Human-readable size, or `[DIR]`.
    pub size: String,
}

/// Renders a byte count with one decimal in the largest unit it reaches.
///
/// ```
/// # use tiny_static::files::listing::format_size;
/// assert_eq!(format_size(1023), "1023");
/// assert_eq!(format_size(1024), "1.0K");
/// ```
pub fn format_size(size: u64) -> String {
    if size < KIB {
        size.to_string()
    } else if size < MIB {
        format!("{:.1}K", size as f64 / KIB as f64)
    } else if size < GIB {
        format!("{:.1}M", size as f64 / MIB as f64)
    } else {
        format!("{:.1}G", size as f64 / GIB as f64)
    }
}

pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Collects up to `capacity` regular files and directories from `dir`.
///
/// `.` and `..` never appear. Entries that cannot be stat'ed and other file
/// types are skipped; enumeration stops once `capacity` entries are held.
/// The result is in directory order.
pub async fn collect_entries(dir: &Path, capacity: usize) -> std::io::Result<Vec<ListingEntry>> {
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while entries.len() < capacity {
        let entry = match read_dir.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "directory enumeration stopped");
                break;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == "." || name == ".." {
            continue;
        }

        let metadata = match tokio::fs::metadata(entry.path()).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!(entry = %name, error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !metadata.is_file() && !metadata.is_dir() {
            continue;
        }

        let timestamp = match metadata.modified() {
            Ok(modified) => format_timestamp(modified),
            Err(e) => {
                tracing::warn!(entry = %name, error = %e, "skipping entry without mtime");
                continue;
            }
        };

        let (name, size) = if metadata.is_dir() {
            (format!("{}/", name), "[DIR]".to_string())
        } else {
            (name, format_size(metadata.len()))
        };

        entries.push(ListingEntry {
            name,
            timestamp,
            size,
        });
    }

    Ok(entries)
}

/// Orders entries newest first. Ties keep their relative order.
pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Renders the HTML page for `entries`, already sorted.
///
/// The `..` row is left out for the root, `.`.
pub fn render_listing(display_name: &str, entries: &[ListingEntry]) -> String {
    let mut html = String::from(PREAMBLE);

    if display_name != "." {
        html.push_str(PARENT_ROW);
    }

    for entry in entries {
        html.push_str(&format!(
            "<tr><td><a href=\"{0}\">{0}</a></td><td>{1}</td><td>{2}</td></tr>\n",
            entry.name, entry.timestamp, entry.size
        ));
    }

    html.push_str(CLOSING);
    html
}

pub fn listing_response(display_name: &str, entries: &[ListingEntry]) -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .body(render_listing(display_name, entries).into_bytes())
        .build()
}

/// Answers a directory request with a `200 OK` listing of `dir`.
///
/// Entries are gathered fresh for this call and dropped when it returns.
/// Returns the number of rows listed.
pub async fn list_directory<W>(
    out: &mut W,
    dir: &Path,
    display_name: &str,
    capacity: usize,
) -> Result<usize, ServeError>
where
    W: AsyncWrite + Unpin,
{
    let mut entries = collect_entries(dir, capacity)
        .await
        .map_err(|source| ServeError::NotFound {
            path: dir.to_path_buf(),
            source,
        })?;
    sort_entries(&mut entries);

    ResponseWriter::new(&listing_response(display_name, &entries))
        .write_to_stream(out)
        .await
        .map_err(ServeError::Transfer)?;

    Ok(entries.len())
}
