use std::path::PathBuf;

/// A parsed request: which file to serve and which bytes of it.
///
/// `range_end` is exclusive; zero means "to the end of the file" until
/// [`Request::resolve_range`] replaces it with a concrete bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Method token from the request line. Read, never acted on.
    pub method: String,
    /// Server-relative, percent-decoded path.
    pub filename: PathBuf,
    /// First byte to send.
    pub range_offset: u32,
    /// One past the last byte to send, or 0 for end of file.
    pub range_end: u32,
    /// Whether a `Range` header was recognised.
    pub range_requested: bool,
}

/// Byte window of a file to send, `[offset, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub offset: u64,
    pub end: u64,
    pub total: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == self.end
    }
}

impl Request {
    /// Creates a request for the whole of `filename`.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            method: String::new(),
            filename: filename.into(),
            range_offset: 0,
            range_end: 0,
            range_requested: false,
        }
    }

    /// Creates a request for `[offset, end)` of `filename`, as a `Range`
    /// header would.
    pub fn with_range(filename: impl Into<PathBuf>, offset: u32, end: u32) -> Self {
        Self {
            range_offset: offset,
            range_end: end,
            range_requested: true,
            ..Self::new(filename)
        }
    }

    /// Whether the response should be `206 Partial`.
    pub fn is_partial(&self) -> bool {
        self.range_requested || self.range_offset > 0
    }

    /// Resolves the requested window against a file of `total` bytes.
    ///
    /// An unspecified end becomes `total` and an end past `total` is
    /// clamped. Returns `None` when a partial request starts at or beyond
    /// the resolved end.
    pub fn resolve_range(&self, total: u64) -> Option<ByteRange> {
        let end = match self.range_end {
            0 => total,
            end => u64::from(end).min(total),
        };
        let offset = u64::from(self.range_offset);

        if offset > end || (self.is_partial() && offset == end) {
            return None;
        }

        Some(ByteRange { offset, end, total })
    }
}
