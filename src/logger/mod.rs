//! Logger module
//!
//! Provides logging utilities for both dev servers including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

fn write_info(message: &str) {
    println!("{message}");
}

fn write_error(message: &str) {
    eprintln!("{message}");
}

pub fn log_config(config: &Config) {
    match config.runtime.workers {
        Some(workers) => write_info(&format!("[CONFIG] Using {workers} worker threads")),
        None => write_info("[CONFIG] Using default worker threads (CPU cores)"),
    }
    if config.logging.access_log {
        write_info(&format!(
            "[CONFIG] Access log format: {}",
            config.logging.access_log_format
        ));
    }
}

/// Startup banner for the static server
pub fn log_static_server_start(addr: &SocketAddr, config: &Config) {
    let port = addr.port();
    write_info("🚀 Science Alignment Scorecard server running at:");
    write_info(&format!("   http://localhost:{port}"));
    write_info(&format!("   http://localhost:{port}/index.html"));
    write_info(&format!(
        "   serving {}",
        config.static_server.root.display()
    ));
    write_info("\n💡 This server resolves CORS issues for loading JSON data files.");
    write_info("📱 Press Ctrl+C to stop the server");
}

pub fn log_browser_opened() {
    write_info("🌐 Opened in your default browser");
}

/// Startup banner for the mock fixture API
pub fn log_mock_api_start(addr: &SocketAddr, config: &Config, endpoints: &[&str]) {
    write_info("======================================");
    write_info("Science Index Mock API running");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!(
        "Fixtures: {}",
        config.mock_api.seeds_dir.display()
    ));
    for path in endpoints {
        write_info(&format!("  - GET  http://{addr}{path}"));
    }
    write_info("Press Ctrl+C to stop the server");
    write_info("======================================\n");
}

pub fn log_server_stopped() {
    write_info("\n👋 Server stopped");
}

pub fn log_shutdown_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, shutting down..."));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}
