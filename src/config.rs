//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config
//! directory (or wherever `KANBAN_CONFIG` points) and holds:
//! - The ticket endpoint
//! - The HTTP request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{KanbanError, Result};
use crate::source::http::parse_endpoint;
use crate::types::DEFAULT_ENDPOINT;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "KANBAN_CONFIG";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "KANBAN_ENDPOINT";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &["endpoint", "request_timeout"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ticket endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "kanban", "kanban")
}

/// Directory for log files, falling back to `.kanban` in the working directory
pub fn cache_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".kanban"))
}

/// Default location of the board's log file
pub fn default_log_path() -> PathBuf {
    cache_dir().join("kanban.log")
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }

        project_dirs()
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from(".kanban").join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            KanbanError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let mut config: Config = serde_yaml_ng::from_str(&content)?;
        if config.request_timeout == 0 {
            tracing::warn!(
                path = %path.display(),
                "request_timeout of 0 would fail every fetch, using {}s",
                default_request_timeout()
            );
            config.request_timeout = default_request_timeout();
        }
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                KanbanError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            KanbanError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Get the endpoint from the environment or the config file
    pub fn endpoint(&self) -> String {
        if let Ok(endpoint) = env::var(ENDPOINT_ENV)
            && !endpoint.is_empty()
        {
            return endpoint;
        }

        self.endpoint.clone()
    }

    /// Set the endpoint, rejecting anything that is not an http(s) URL
    pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
        parse_endpoint(endpoint)?;
        self.endpoint = endpoint.to_string();
        Ok(())
    }

    /// Get the request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Set the request timeout in seconds
    pub fn set_request_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(KanbanError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        self.request_timeout = seconds;
        Ok(())
    }

    /// Read a single key as a display string
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "endpoint" => Ok(self.endpoint()),
            "request_timeout" => Ok(self.request_timeout.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => self.set_endpoint(value),
            "request_timeout" => {
                let seconds = value.parse::<u64>().map_err(|_| {
                    KanbanError::Config(format!(
                        "request_timeout must be a whole number of seconds, got '{value}'"
                    ))
                })?;
                self.set_request_timeout(seconds)
            }
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> KanbanError {
    KanbanError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}
