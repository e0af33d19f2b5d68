//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote API the dashboard reads from
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL, resource paths are appended (`{base_url}/teams/`)
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

/// Base URL of the API when running inside a GitHub Codespace
pub fn codespace_api_url(codespace_name: &str) -> String {
    format!("https://{}-8000.app.github.dev/api", codespace_name)
}

/// Demo API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Wrap collections in a `{count, next, previous, results}` envelope
    #[serde(default)]
    pub paginate: bool,

    /// Send team members as JSON text instead of an array
    #[serde(default)]
    pub encode_members_as_text: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            paginate: false,
            encode_members_as_text: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("/etc/octofit/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply overrides from a variable lookup
    ///
    /// `OCTOFIT_API_URL` wins over `CODESPACE_NAME`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("OCTOFIT_API_URL") {
            self.api.base_url = url;
        } else if let Some(name) = lookup("CODESPACE_NAME").filter(|n| !n.is_empty()) {
            self.api.base_url = codespace_api_url(&name);
        }

        if let Some(host) = lookup("OCTOFIT_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("OCTOFIT_SERVER_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid OCTOFIT_SERVER_PORT: {}", port),
            }
        }

        if let Some(level) = lookup("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Configuration
#
# Environment variables override these settings:
# - OCTOFIT_API_URL
# - CODESPACE_NAME (derives https://<name>-8000.app.github.dev/api)
# - OCTOFIT_SERVER_HOST
# - OCTOFIT_SERVER_PORT
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[api]
# Base URL of the OctoFit API (resource paths are appended)
base_url = "http://localhost:8000/api"

[server]
# Demo API host
host = "0.0.0.0"

# Demo API port
port = 8000

# Wrap collections in a paginated envelope
paginate = false

# Send team members as JSON text
encode_members_as_text = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
