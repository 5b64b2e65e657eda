//! tiny-static - a minimal HTTP/1.1 static file server
//!
//! Core library: request parsing, file transfer with byte ranges and
//! generated directory listings.

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod server;
