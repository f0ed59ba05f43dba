//! Service configuration loaded from `config.toml`

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use crate::constants::diagnostics::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http_server: HttpServerConfig,
}

/// Settings for the embedded diagnostics HTTP server
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HttpServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from '{}'", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from '{}'", path.display()))?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it is missing.
    /// A present but malformed file is still a hard error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "Config file '{}' not found, using default configuration",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = Config::load_or_default("does-not-exist.toml").unwrap();

        assert!(config.http_server.enabled);
        assert_eq!(config.http_server.bind_address(), "0.0.0.0:8095");
    }

    #[test]
    fn test_parses_http_server_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[http_server]\nenabled = false\nhost = \"127.0.0.1\"\nport = 9100"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(!config.http_server.enabled);
        assert_eq!(config.http_server.bind_address(), "127.0.0.1:9100");
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http_server]\nport = 9200").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.http_server.enabled);
        assert_eq!(config.http_server.host, "0.0.0.0");
        assert_eq!(config.http_server.port, 9200);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http_server\nport = ").unwrap();

        assert!(Config::load_or_default(file.path()).is_err());
    }
}
