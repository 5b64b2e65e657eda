use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

/// Size of the read-ahead buffer, roughly one MTU.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Maximum length of one request or header line, terminator included.
pub const MAX_LINE: usize = 1024;

/// Buffered line reader over a byte stream.
///
/// Refills its fixed buffer from the stream only once every buffered byte
/// has been handed out, so reading the header block never consumes more
/// than one buffer past the blank line.
pub struct LineReader<R> {
    inner: R,
    buf: [u8; READ_BUFFER_SIZE],
    pos: usize,
    unread: usize,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: [0; READ_BUFFER_SIZE],
            pos: 0,
            unread: 0,
        }
    }

    /// Number of bytes read from the stream but not yet returned.
    pub fn buffered(&self) -> usize {
        self.unread
    }

    /// Reads one line into `line`, clearing it first.
    ///
    /// Copies bytes until a `\n` has been copied or `max_len - 1` bytes have
    /// been taken. Returns `Ok(0)` on end of stream with nothing read; a
    /// partial line before end of stream is returned as is.
    pub async fn read_line(&mut self, line: &mut Vec<u8>, max_len: usize) -> io::Result<usize> {
        line.clear();

        while line.len() + 1 < max_len {
            match self.next_byte().await? {
                Some(b) => {
                    line.push(b);
                    if b == b'\n' {
                        break;
                    }
                }
                None => break,
            }
        }

        Ok(line.len())
    }

    async fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.unread == 0 && !self.fill().await? {
            return Ok(None);
        }

        let b = self.buf[self.pos];
        self.pos += 1;
        self.unread -= 1;
        Ok(Some(b))
    }

    /// Refills the empty buffer with one read. Returns false at end of stream.
    async fn fill(&mut self) -> io::Result<bool> {
        loop {
            match self.inner.read(&mut self.buf).await {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.pos = 0;
                    self.unread = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
