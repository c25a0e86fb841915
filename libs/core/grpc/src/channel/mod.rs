pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Creates a gRPC channel with the default settings
///
/// ## Configuration Details
/// - HTTP/2 keep-alive: 30s interval, 10s timeout
/// - Connection timeout: 5s
/// - Request timeout: 30s
/// - TCP nodelay and keepalive enabled
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel;
/// use rpc::cinema::v1::hello_service_client::HelloServiceClient;
///
/// let channel = create_channel("http://127.0.0.1:50051").await?;
/// let client = HelloServiceClient::new(channel);
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_with_config(addr, ChannelConfig::default()).await
}

/// Creates a gRPC channel with custom configuration
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_with_config, ChannelConfig};
/// use std::time::Duration;
///
/// let config = ChannelConfig::default()
///     .with_connect_timeout(Duration::from_secs(10))
///     .with_request_timeout(Duration::from_secs(5));
///
/// let channel = create_channel_with_config("http://127.0.0.1:50051", config).await?;
/// ```
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr_string = addr.into();

  let endpoint = Endpoint::from_shared(addr_string.clone()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %addr_string, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  let endpoint = config.apply_to_endpoint(endpoint);

  tracing::debug!(target: "grpc_client", addr = %addr_string, "Creating gRPC channel");

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %addr_string,
      error = ?e,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed(e)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_invalid_uri() {
    let result = create_channel("not a valid uri").await;
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidUri(_)));
  }

  #[tokio::test]
  async fn test_connection_failed() {
    // Port 1 is never a gRPC server
    let config = ChannelConfig::new().with_connect_timeout(std::time::Duration::from_millis(200));
    let result = create_channel_with_config("http://127.0.0.1:1", config).await;
    assert!(matches!(result.unwrap_err(), GrpcError::ConnectionFailed(_)));
  }
}
