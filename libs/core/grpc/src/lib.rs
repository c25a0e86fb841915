//! # gRPC Support Library
//!
//! Channel creation for clients and the server-side plumbing shared by the
//! cinema binaries: environment-driven server configuration, health
//! reporting, graceful shutdown, per-call deadlines and the mapping of
//! call-level failures onto `tonic::Status`.
//!
//! ## Quick Start
//!
//! ### Client
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig};
//! use rpc::cinema::v1::movie_service_client::MovieServiceClient;
//! use std::time::Duration;
//!
//! let config = ChannelConfig::default().with_request_timeout(Duration::from_secs(5));
//! let channel = create_channel_with_config("http://127.0.0.1:50051", config).await?;
//! let client = MovieServiceClient::new(channel);
//! ```
//!
//! ### Server
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, shutdown_signal};
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = grpc_client::server::create_health_service();
//! GrpcServer::setup_health_multiple(&health_reporter, &[HELLO, MOVIES]).await;
//! ```

pub mod channel;
pub mod deadline;
pub mod error;
pub mod server;

// Re-export main types and functions for convenience
pub use channel::{ChannelConfig, create_channel, create_channel_with_config};
pub use deadline::{client_deadline, effective_deadline, with_deadline};
pub use error::{CallError, GrpcError, GrpcResult};
