//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Resolves once Ctrl+C (or SIGTERM on unix) arrives.
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .map(|()| "ctrl_c")
            .map_err(ShutdownSignalError::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<_, ShutdownSignalError>("terminate")
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<&'static str, ShutdownSignalError>>();

    tokio::select! {
        result = ctrl_c => result,
        result = terminate => result,
    }
}

/// Stop accepting connections and let in-flight requests finish once a
/// shutdown signal is received.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(signal, "shutdown signal received, draining connections");

    handle.stop_graceful(None);

    Ok(())
}
