use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::error::ServeError;
use crate::files::{list_directory, serve_static};
use crate::http::parser::parse_request;
use crate::http::reader::LineReader;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// One accepted client: parse a single request, answer it, close.
///
/// The connection owns the stream and shuts it down exactly once, after the
/// response or after a failed transfer.
pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    root: PathBuf,
    max_listing_entries: usize,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, config: &Config) -> Self {
        Self {
            stream,
            peer,
            root: config.root.clone(),
            max_listing_entries: config.max_listing_entries,
        }
    }

    /// Handles the request and closes the connection.
    ///
    /// Returns the status that was sent, or would have been if the client
    /// had stayed. Every failure is answered and logged here.
    pub async fn run(mut self) -> StatusCode {
        let outcome = self.process().await;

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(client = %self.peer, error = %e, "shutdown failed");
        }

        outcome
    }

    async fn process(&mut self) -> StatusCode {
        let parsed = {
            let mut reader = LineReader::new(&mut self.stream);
            parse_request(&mut reader).await
        };

        let request = match parsed {
            Ok(request) => request,
            Err(e) => {
                let error = ServeError::from(e);
                tracing::warn!(
                    status = StatusCode::BadRequest.as_u16(),
                    client = %self.peer.ip(),
                    port = self.peer.port(),
                    error = %error,
                    "rejected request"
                );
                self.respond_error(&error).await;
                return StatusCode::BadRequest;
            }
        };

        tracing::debug!(
            method = %request.method,
            filename = %request.filename.display(),
            offset = request.range_offset,
            end = request.range_end,
            "parsed request"
        );

        let status = match self.dispatch(&request).await {
            Ok(status) => status,
            Err(error) => {
                tracing::debug!(error = %error, "request failed");
                let status = error.status().unwrap_or(StatusCode::BadRequest);
                self.respond_error(&error).await;
                status
            }
        };

        tracing::info!(
            status = status.as_u16(),
            client = %self.peer.ip(),
            port = self.peer.port(),
            filename = %request.filename.display(),
            "request served"
        );

        status
    }

    /// Stats the target and hands it to file transfer or directory listing.
    ///
    /// Transfer failures are logged here; the head already went out, so the
    /// status reported is the one sent.
    async fn dispatch(&mut self, request: &Request) -> Result<StatusCode, ServeError> {
        let path = self.root.join(&request.filename);

        // Joining an empty name would yield the root itself.
        if request.filename.as_os_str().is_empty() {
            return Err(ServeError::NotFound {
                path,
                source: io::ErrorKind::NotFound.into(),
            });
        }

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|source| ServeError::NotFound {
                path: path.clone(),
                source,
            })?;

        if metadata.is_file() {
            let mut file = File::open(&path)
                .await
                .map_err(|source| ServeError::NotFound {
                    path: path.clone(),
                    source,
                })?;
            let total = file
                .metadata()
                .await
                .map_err(|source| ServeError::NotFound {
                    path: path.clone(),
                    source,
                })?
                .len();

            let range = request
                .resolve_range(total)
                .ok_or(ServeError::RangeNotSatisfiable {
                    offset: request.range_offset,
                    size: total,
                })?;

            let status = if request.is_partial() {
                StatusCode::PartialContent
            } else {
                StatusCode::Ok
            };

            if let Err(e) = serve_static(&mut self.stream, &mut file, request, range).await {
                tracing::error!(
                    filename = %request.filename.display(),
                    error = %e,
                    "file transfer aborted"
                );
            }

            Ok(status)
        } else if metadata.is_dir() {
            let display_name = request.filename.to_string_lossy();

            match list_directory(&mut self.stream, &path, &display_name, self.max_listing_entries)
                .await
            {
                Ok(_) => {}
                Err(ServeError::Transfer(e)) => {
                    tracing::error!(
                        filename = %request.filename.display(),
                        error = %e,
                        "directory listing aborted"
                    );
                }
                Err(e) => return Err(e),
            }

            Ok(StatusCode::Ok)
        } else {
            Err(ServeError::UnsupportedType { path })
        }
    }

    /// Sends the error response for `error`. A client that is already gone
    /// is logged, not reported.
    async fn respond_error(&mut self, error: &ServeError) {
        let Some(response) = error_response(error) else {
            return;
        };

        if let Err(e) = ResponseWriter::new(&response)
            .write_to_stream(&mut self.stream)
            .await
        {
            tracing::error!(
                client = %self.peer,
                status = response.status.as_u16(),
                error = %e,
                "failed to send error response"
            );
        }
    }
}

/// The error response for `error`, if one can still be sent.
pub fn error_response(error: &ServeError) -> Option<Response> {
    let response = match error {
        ServeError::Parse(_) => {
            Response::error(StatusCode::BadRequest, "Bad Request", "Bad request")
        }
        ServeError::NotFound { .. } => {
            Response::error(StatusCode::NotFound, "Not found", "File not found")
        }
        ServeError::UnsupportedType { .. } => {
            Response::error(StatusCode::BadRequest, "Error", "Error")
        }
        ServeError::RangeNotSatisfiable { size, .. } => {
            ResponseBuilder::new(StatusCode::RangeNotSatisfiable)
                .header("Content-Range", format!("bytes */{}", size))
                .body(b"Range not satisfiable".to_vec())
                .build()
        }
        ServeError::Transfer(_) => return None,
    };

    Some(response)
}
