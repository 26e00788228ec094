use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Terminal administration console for ArangoDB.
#[derive(Debug, Clone, Parser)]
#[command(name = "arangoadmin", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/arangoadmin/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Location to open at startup, e.g. "collection/users"
    #[arg(long, value_name = "LOCATION")]
    pub path: Option<String>,

    /// Override the server base URL
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Override the database name
    #[arg(long, value_name = "NAME")]
    pub database: Option<String>,
}

impl Cli {
    /// Load the config file this invocation points at.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Apply command-line overrides on top of the file configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.path {
            config.ui.start_path = path.clone();
        }
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }
        if let Some(database) = &self.database {
            config.server.database = database.clone();
        }
    }
}
