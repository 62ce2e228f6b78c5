//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\album-browser\config.toml
//! - macOS: ~/Library/Application Support/album-browser/config.toml
//! - Linux: ~/.config/album-browser/config.toml
//!
//! Every key is optional. Missing keys take their defaults, and command-line
//! flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::controller::DEBOUNCE_INTERVAL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Search box and result grid settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before typed text is searched
    pub debounce_ms: u64,

    /// Query typed into the search box at startup (empty = none)
    pub initial_query: String,

    /// Cards per row in the result grid
    pub grid_columns: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_INTERVAL.as_millis() as u64,
            initial_query: "queen".to_string(),
            grid_columns: 4,
        }
    }
}

/// Catalog API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deezer.com".to_string(),
            timeout_secs: 10,
            user_agent: concat!("album-browser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Log file settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the daily log files
    pub directory: PathBuf,

    /// `EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(".logs"),
            filter: None,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-browser"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from `path`, or from the default location.
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Failures are kept as warnings to report once logging is up; this runs
/// before the subscriber exists.
pub fn load(path: Option<&Path>) -> (Config, Vec<String>) {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                return (
                    Config::default(),
                    vec!["Could not determine config directory, using defaults".to_string()],
                );
            }
        },
    };

    if !path.exists() {
        return (Config::default(), Vec::new());
    }

    match load_from(&path) {
        Ok(config) => (config, Vec::new()),
        Err(e) => (
            Config::default(),
            vec![format!("{}; using default configuration", e)],
        ),
    }
}

/// Read and parse one config file
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}

// ============================================================================
// Tests
// ============================================================================
