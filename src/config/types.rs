// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub static_server: StaticServerConfig,
    pub mock_api: MockApiConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

/// Static CORS server configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StaticServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as `/`
    pub root: PathBuf,
    /// Try to open the default browser once the listener is bound
    pub open_browser: bool,
    /// Files looked up (in order) when a directory is requested
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
}

/// Mock fixture API configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MockApiConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the JSON fixture files
    pub seeds_dir: PathBuf,
}

/// Tokio runtime configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: true,
            access_log_format: default_access_log_format(),
        }
    }
}
