// Mock fixture API for the science index
//
// Usage:
//     cargo run --bin mock-api
//
// Fixtures are read from `seeds/` on every request.

use scorecard_devserver::api;
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
    let addr = cfg.mock_api_socket_addr()?;
    let listener = server::create_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;
    let local_addr = listener.local_addr()?;

    if !cfg.mock_api.seeds_dir.is_dir() {
        logger::log_warning(&format!(
            "Fixture directory {} does not exist; every endpoint will fail",
            cfg.mock_api.seeds_dir.display()
        ));
    }

    let state = Arc::new(AppState::new(&cfg));
    server::start_signal_handler(Arc::clone(&state))?;

    logger::log_config(&cfg);
    logger::log_mock_api_start(&local_addr, &cfg, &api::endpoint_paths());

    server::run_server(listener, state, ServerKind::MockApi).await;
    logger::log_server_stopped();
    Ok(())
}
