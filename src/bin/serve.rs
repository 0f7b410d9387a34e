// Static CORS server for the scorecard front-end
//
// Usage:
//     cargo run --bin serve
//
// Then open: http://localhost:8000

use scorecard_devserver::config::{AppState, Config};
use scorecard_devserver::logger;
use scorecard_devserver::server::{self, ServerKind};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    let runtime = server::build_runtime(&cfg)?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.static_socket_addr()?;
    let listener = server::create_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;
    let local_addr = listener.local_addr()?;

    let state = Arc::new(AppState::new(&cfg));
    server::start_signal_handler(Arc::clone(&state))?;

    logger::log_config(&cfg);
    logger::log_static_server_start(&local_addr, &cfg);

    if cfg.static_server.open_browser
        && server::open_browser(&format!("http://localhost:{}", local_addr.port()))
    {
        logger::log_browser_opened();
    }

    server::run_server(listener, state, ServerKind::Static).await;
    logger::log_server_stopped();
    Ok(())
}
