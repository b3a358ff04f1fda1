use tracing::{info, warn};

/// Resolves once the process receives Ctrl+C.
///
/// If the signal handler cannot be installed the future never resolves, so
/// the server keeps running instead of shutting down immediately.
pub async fn shutdown_signal(service: &'static str) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(service, event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => {
            warn!(service, event = "signal_handler_failed", error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}
