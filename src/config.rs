use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the server listens on.
pub const DEFAULT_PORT: u16 = 9999;

/// Second argument to `listen(2)`.
pub const LISTEN_BACKLOG: u32 = 1024;

/// Maximum number of rows in a generated directory listing.
pub const MAX_LISTING_ENTRIES: usize = 128;

/// Process-wide settings, fixed at compile time.
///
/// The binary always runs with [`Config::default`]; the fields are public so
/// tests can point a server at an ephemeral port and a scratch directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the listener binds to (loopback only).
    pub listen_addr: SocketAddr,
    /// Pending-connection queue length.
    pub backlog: u32,
    /// Directory request paths are resolved against.
    pub root: PathBuf,
    /// Cap on entries collected for one directory listing.
    pub max_listing_entries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            backlog: LISTEN_BACKLOG,
            root: PathBuf::from("."),
            max_listing_entries: MAX_LISTING_ENTRIES,
        }
    }
}
