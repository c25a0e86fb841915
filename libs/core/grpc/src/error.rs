use std::time::Duration;
use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors that can occur during gRPC channel creation and server setup
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Failed to establish connection
  #[error("Connection failed: {0}")]
  ConnectionFailed(tonic::transport::Error),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri(_) | GrpcError::InvalidConfig(_) => {
        tonic::Status::invalid_argument(err.to_string())
      }
      GrpcError::ConnectionFailed(_) => tonic::Status::unavailable(err.to_string()),
    }
  }
}

/// Failures raised around a call, before or instead of the handler's own result
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
  /// A dependency the handler needs is not ready to serve
  #[error("Dependency unavailable: {0}")]
  DependencyUnavailable(String),

  /// The handler did not finish within the configured deadline
  #[error("Deadline of {0:?} exceeded")]
  DeadlineExceeded(Duration),
}

impl From<CallError> for tonic::Status {
  fn from(err: CallError) -> Self {
    match err {
      CallError::DependencyUnavailable(_) => tonic::Status::unavailable(err.to_string()),
      CallError::DeadlineExceeded(_) => tonic::Status::deadline_exceeded(err.to_string()),
    }
  }
}
