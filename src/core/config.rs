//! Configuration management for the MCP server.
//!
//! Everything is read from environment variables. `main` loads a `.env`
//! file into the environment first.
//! Server settings use the `MCP_` prefix; Sinch credentials and endpoints
//! use the `SINCH_` prefix and are loaded by [`SinchConfig`] and
//! [`SinchEndpoints`].

use super::transport::TransportConfig;
use crate::sinch::{SinchConfig, SinchEndpoints};

/// Default server name reported to clients.
pub const DEFAULT_SERVER_NAME: &str = "sinch-mcp-server";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Sinch projects and credentials.
    pub sinch: SinchConfig,

    /// Sinch API base URLs.
    pub endpoints: SinchEndpoints,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL`, defaulting to `info`.
    ///
    /// Available before the rest of the configuration so logging can be
    /// initialized first.
    pub fn from_env() -> Self {
        match std::env::var("MCP_LOG_LEVEL") {
            Ok(level) if !level.trim().is_empty() => Self {
                level: level.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            sinch: SinchConfig::default(),
            endpoints: SinchEndpoints::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the process environment only; the binary loads `.env` before
    /// calling this.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();
        config.transport = TransportConfig::from_env();
        config.sinch = SinchConfig::from_env();
        config.endpoints = SinchEndpoints::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "sinch-test");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "sinch-test");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_level_default_and_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        assert_eq!(LoggingConfig::from_env().level, "info");

        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", " debug ");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, DEFAULT_SERVER_NAME);
        assert!(!config.sinch.is_usable());
        assert_eq!(config.endpoints, SinchEndpoints::default());
    }
}
