//! Response bodies backed by the filesystem.
//!
//! Regular files are streamed whole or by byte range; directories are
//! rendered as an HTML table of their entries.

pub mod listing;
pub mod transfer;

pub use listing::{ListingEntry, list_directory};
pub use transfer::serve_static;
