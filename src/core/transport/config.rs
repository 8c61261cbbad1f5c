//! Transport selection.
//!
//! `MCP_TRANSPORT` picks the transport (`stdio`, `tcp` or `http`); anything
//! else falls back to the first compiled-in transport.

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
const DEFAULT_RPC_PATH: &str = "/mcp";

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout, as spawned by desktop clients.
    #[cfg(feature = "stdio")]
    Stdio,

    /// MCP sessions over raw TCP, one per connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,
    pub host: String,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,
    pub host: String,

    /// Path of the JSON-RPC endpoint.
    pub rpc_path: String,

    /// Allow any origin (browser-based clients).
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: DEFAULT_HOST.to_string(),
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load transport config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = lookup("MCP_TRANSPORT")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_default();

        match kind.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: parse_port(lookup("MCP_TCP_PORT"), DEFAULT_TCP_PORT),
                host: lookup("MCP_TCP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                port: parse_port(lookup("MCP_HTTP_PORT"), DEFAULT_HTTP_PORT),
                host: lookup("MCP_HTTP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                rpc_path: lookup("MCP_HTTP_PATH").unwrap_or_else(|| DEFAULT_RPC_PATH.to_string()),
                enable_cors: lookup("MCP_HTTP_CORS")
                    .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0"))
                    .unwrap_or(true),
            }),
            _ => Self::default(),
        }
    }

    /// Short description for the startup log line.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn parse_port(raw: Option<String>, default: u16) -> u16 {
    match raw {
        Some(value) => match value.trim().parse() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!("Ignoring invalid port '{}', using {}", value, default);
                default
            }
        },
        None => default,
    }
}
