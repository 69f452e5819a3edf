use std::future::Future;
use std::net::SocketAddr;

use hsnp_core::error::{AdminError, Result};

use crate::http::{self, WebState};

/// Serves the admin pages and the demo metrics endpoint until `shutdown`
/// completes.
pub async fn run_web_server<F>(addr: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AdminError::Io(format!("failed to bind {addr}: {e}")))?;
    let local = listener
        .local_addr()
        .map_err(|e| AdminError::Io(format!("failed to read local addr: {e}")))?;
    tracing::info!(addr = %local, "admin web server listening");

    axum::serve(listener, http::router(WebState::new()))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AdminError::Internal(format!("HTTP server failed: {e}")))
}
