use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{info, warn};

use crate::config::Config;
use crate::server::handler::{self, DeviceContext};

/// Binds the reuse-enabled listening socket. Failure here is fatal: the
/// device cannot do anything without its port.
pub fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = cfg
        .listen_addr
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {addr}"))?;

    // One client at a time; a deeper backlog buys nothing here.
    let listener = socket.listen(1)?;
    info!("Listening on {}", cfg.listen_addr);
    Ok(listener)
}

/// The serve loop: accept one connection, handle it inline, pause, repeat.
///
/// Connections are never spawned onto separate tasks; exactly one is live at
/// a time. Per-connection failures are logged and the loop returns to accept,
/// since this runs unattended.
pub async fn run(
    listener: TcpListener,
    device: &mut DeviceContext,
    cfg: &Config,
) -> anyhow::Result<()> {
    loop {
        let (mut stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "accept failed");
                tokio::time::sleep(cfg.cycle_delay()).await;
                continue;
            }
        };

        info!(%peer, "client connected");
        if let Err(e) = handler::serve_one(&mut stream, device, cfg.head_timeout()).await {
            warn!(%peer, error = %e, "connection aborted");
        }

        tokio::time::sleep(cfg.cycle_delay()).await;
    }
}
