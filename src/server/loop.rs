// Server loop module
// Accepts connections until the shutdown notification fires

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::{handle_connection, ServerKind};
use crate::config::AppState;
use crate::logger;

/// Accept loop shared by both servers
///
/// Returns once [`AppState::request_shutdown`] has been called. Connections
/// still in flight keep running on their own tasks.
pub async fn run_server(listener: TcpListener, state: Arc<AppState>, kind: ServerKind) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&state), kind);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = state.shutdown.notified() => break,
        }
    }
}
