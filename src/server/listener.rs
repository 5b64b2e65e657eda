use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Accepts connections one at a time.
///
/// Each connection is processed to completion before the next accept, so a
/// stalled client holds up everyone behind it.
pub struct Listener {
    inner: TcpListener,
    config: Config,
}

impl Listener {
    /// Binds `config.listen_addr` with `SO_REUSEADDR` and the configured
    /// backlog. Must be called from within a Tokio runtime.
    pub fn bind(config: Config) -> anyhow::Result<Self> {
        let addr = config.listen_addr;
        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };

        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {}", addr))?;
        let inner = socket
            .listen(config.backlog)
            .with_context(|| format!("failed to listen on {}", addr))?;

        Ok(Self { inner, config })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::error!("Accept failed: {}", e);
                    continue;
                }
            };

            let status = Connection::new(socket, peer, &self.config).run().await;
            tracing::debug!("Closed connection from {} ({})", peer, status.as_u16());
        }
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    Listener::bind(cfg.clone())?.run().await
}
