//! HTTP protocol handling.
//!
//! One request per connection, no keep-alive.
//!
//! # Architecture
//!
//! - **`reader`**: fixed-buffer line reader over the client stream
//! - **`parser`**: request line, `Range` header and target path decoding
//! - **`request`**: the parsed request and byte-range resolution
//! - **`response`**: status codes and the response builder
//! - **`writer`**: serialises a response and writes it out
//! - **`mime`**: content type by file extension
//! - **`connection`**: per-connection dispatch to files, listings or errors
//!
//! # Request flow
//!
//! ```text
//!   accept ──▶ parse ──▶ stat target ──┬─ regular file ──▶ 200 / 206 + bytes
//!                │                     ├─ directory ─────▶ 200 + HTML listing
//!                │                     ├─ other type ────▶ 400
//!                │                     └─ missing ───────▶ 404
//!                └─ read error ──▶ 400
//!                                             then: log, shutdown, close
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
