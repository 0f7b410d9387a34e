// Server module entry
// Runtime construction, listeners, connection handling and shutdown

pub mod browser;
pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module takes another name
#[path = "loop.rs"]
pub mod server_loop;

pub use browser::open_browser;
pub use connection::ServerKind;
pub use listener::create_listener;
pub use server_loop::run_server;
pub use signal::start_signal_handler;

use crate::config::Config;

/// Build the Tokio runtime, sized by `runtime.workers` when set
pub fn build_runtime(config: &Config) -> std::io::Result<tokio::runtime::Runtime> {
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = config.runtime.workers {
        runtime_builder.worker_threads(workers);
    }

    runtime_builder.build()
}
