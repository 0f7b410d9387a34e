// Connection handling module
// Serves one accepted TCP connection with the handler for its server kind

use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::api;
use crate::config::AppState;
use crate::handler;
use crate::logger::{self, AccessLogEntry};

/// Which of the two dev servers a listener belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    /// Static files with CORS headers
    Static,
    /// JSON fixture API
    MockApi,
}

/// Handle a single connection in a spawned task.
///
/// HTTP/1.1 with keep-alive; requests on the connection are served one after
/// another until the client closes it.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    kind: ServerKind,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { Ok::<_, Infallible>(dispatch(req, peer_addr, &state, kind).await) }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Route one request to its handler and write the access log line
pub async fn dispatch<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: &AppState,
    kind: ServerKind,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    // Both servers are read-only; request bodies are never consumed
    let (parts, _) = req.into_parts();

    let response = match kind {
        ServerKind::Static => handler::handle_request(&parts, state).await,
        ServerKind::MockApi => api::handle_api_request(&parts, state).await,
    };

    if state.access_log_enabled() {
        let body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        let mut entry = AccessLogEntry::from_request(&peer_addr, &parts);
        entry.finish(response.status().as_u16(), body_bytes, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}
