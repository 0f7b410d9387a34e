// Configuration module entry point
// Loads the layered configuration and exposes the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::Path;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, MockApiConfig, RuntimeConfig, StaticServerConfig};

/// Base name of the optional configuration file (`devserver.toml`, `devserver.json`, ...)
pub const DEFAULT_CONFIG_NAME: &str = "devserver";

/// Prefix for environment overrides, e.g. `DEVSERVER_MOCK_API__PORT=9001`
pub const ENV_PREFIX: &str = "DEVSERVER";

/// Directory the package lives in; stands in for "next to the script"
const PACKAGE_DIR: &str = env!("CARGO_MANIFEST_DIR");

impl Config {
    /// Load configuration from the default file name
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_NAME)
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let package_dir = Path::new(PACKAGE_DIR);
        let seeds_dir = package_dir.join("seeds");

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("static_server.host", "127.0.0.1")?
            .set_default("static_server.port", 8000)?
            .set_default("static_server.root", package_dir.to_string_lossy().into_owned())?
            .set_default("static_server.open_browser", true)?
            .set_default("mock_api.host", "127.0.0.1")?
            .set_default("mock_api.port", 8001)?
            .set_default("mock_api.seeds_dir", seeds_dir.to_string_lossy().into_owned())?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn static_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.static_server.host, self.static_server.port)
            .parse()
            .map_err(|e| format!("Invalid static server address: {e}"))
    }

    pub fn mock_api_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.mock_api.host, self.mock_api.port)
            .parse()
            .map_err(|e| format!("Invalid mock API address: {e}"))
    }

    /// Configuration rooted at the given directories, used by tests and embedders
    pub fn for_dirs(root: &Path, seeds_dir: &Path) -> Self {
        Self {
            static_server: StaticServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                root: root.to_path_buf(),
                open_browser: false,
                index_files: vec!["index.html".to_string(), "index.htm".to_string()],
            },
            mock_api: MockApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                seeds_dir: seeds_dir.to_path_buf(),
            },
            runtime: RuntimeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
