// Signal handling module
//
// Supported signals:
// - SIGINT:  Graceful shutdown (Ctrl+C)
// - SIGTERM: Graceful shutdown

use std::sync::Arc;

use crate::config::AppState;
use crate::logger;

/// Start the shutdown signal listener (Unix)
///
/// Handlers are registered before this returns, so a registration failure is
/// reported to the caller instead of being lost inside the task.
#[cfg(unix)]
pub fn start_signal_handler(state: Arc<AppState>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigint.recv() => logger::log_shutdown_signal("SIGINT (Ctrl+C)"),
            _ = sigterm.recv() => logger::log_shutdown_signal("SIGTERM"),
        }
        state.request_shutdown();
    });
    Ok(())
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(state: Arc<AppState>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_shutdown_signal("Ctrl+C");
            state.request_shutdown();
        }
    });
    Ok(())
}
