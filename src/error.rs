//! Per-request failure taxonomy.
//!
//! Every variant is handled inside the connection that produced it; none of
//! them terminates the server.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http::parser::ParseError;
use crate::http::response::StatusCode;

#[derive(Debug, Error)]
pub enum ServeError {
    /// The request stream could not be read.
    #[error("malformed request: {0}")]
    Parse(#[from] ParseError),

    /// The target path does not exist or cannot be opened.
    #[error("{} not found: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The target exists but is neither a regular file nor a directory.
    #[error("{} is not a regular file or directory", .path.display())]
    UnsupportedType { path: PathBuf },

    /// The requested range starts at or past the end of the file.
    #[error("range starting at {offset} not satisfiable for {size} bytes")]
    RangeNotSatisfiable { offset: u32, size: u64 },

    /// Streaming the body to the client failed after headers went out.
    #[error("transfer failed: {0}")]
    Transfer(#[source] io::Error),
}

impl ServeError {
    /// Status of the error response to send, if one can still be sent.
    ///
    /// A transfer failure happens after the status line is on the wire, so
    /// it has none.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServeError::Parse(_) | ServeError::UnsupportedType { .. } => {
                Some(StatusCode::BadRequest)
            }
            ServeError::NotFound { .. } => Some(StatusCode::NotFound),
            ServeError::RangeNotSatisfiable { .. } => Some(StatusCode::RangeNotSatisfiable),
            ServeError::Transfer(_) => None,
        }
    }
}
