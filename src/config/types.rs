use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database server the console administers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "http://127.0.0.1:8529").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Database whose collections are listed.
    #[serde(default = "default_database")]
    pub database: String,
    /// Upper bound for the collection list fetch, in seconds (default: 10).
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u32,
}

/// Terminal console settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Location dispatched at startup; empty opens the collection list.
    #[serde(default)]
    pub start_path: String,
    /// Redraw/input poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; the terminal belongs to the console.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8529".to_string()
}

fn default_database() -> String {
    "_system".to_string()
}

fn default_fetch_timeout() -> u32 {
    10
}

fn default_tick_rate() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("arangoadmin").join("console.log")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            database: default_database(),
            fetch_timeout_seconds: default_fetch_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_path: String::new(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}
