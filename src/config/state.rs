// Application state module
// Shared, read-only state handed to every connection task

use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,

    /// Fired once to stop the accept loop
    pub shutdown: Notify,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            shutdown: Notify::new(),
        }
    }

    pub fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    /// Ask the accept loop to stop; safe to call before the loop starts waiting
    pub fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }
}
