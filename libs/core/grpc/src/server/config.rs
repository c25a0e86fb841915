//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse, env_parse_optional};
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 50051)
    pub port: u16,
    /// Enable Zstd compression (default: true)
    pub enable_compression: bool,
    /// Maximum message size for decoding (default: 8MB)
    pub max_decoding_message_size: usize,
    /// Maximum message size for encoding (default: 8MB)
    pub max_encoding_message_size: usize,
    /// Server-side deadline applied to every call (default: none)
    pub request_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            enable_compression: true,
            max_decoding_message_size: 8 * 1024 * 1024, // 8MB
            max_encoding_message_size: 8 * 1024 * 1024, // 8MB
            request_timeout: None,
        }
    }
}

impl ServerConfig {
    /// Create a new server config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host to bind to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port to listen on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enable or disable compression.
    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    /// Set maximum message size.
    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_decoding_message_size = size;
        self.max_encoding_message_size = size;
        self
    }

    /// Set the per-call deadline.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.addr_string().parse()
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Load configuration from environment variables.
///
/// Reads:
/// - `GRPC_HOST` (default: 0.0.0.0)
/// - `GRPC_PORT` (default: 50051)
/// - `GRPC_COMPRESSION` (default: true)
/// - `GRPC_MAX_MESSAGE_SIZE` (default: 8388608 / 8MB)
/// - `GRPC_REQUEST_TIMEOUT_MS` (default: unset)
impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", "8388608")?;
        let request_timeout =
            env_parse_optional::<u64>("GRPC_REQUEST_TIMEOUT_MS")?.map(Duration::from_millis);

        Ok(Self {
            host: env_or_default("GRPC_HOST", "0.0.0.0"),
            port: env_parse("GRPC_PORT", "50051")?,
            enable_compression: env_parse("GRPC_COMPRESSION", "true")?,
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
            request_timeout,
        })
    }
}
