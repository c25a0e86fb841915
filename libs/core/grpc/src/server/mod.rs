//! gRPC Server utilities
//!
//! Environment-driven [`ServerConfig`], health reporting and the shutdown
//! signal used with `serve_with_shutdown`.
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
//! use rpc::cinema::v1::movie_service_server::{MovieServiceServer, SERVICE_NAME};
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = create_health_service();
//!
//! GrpcServer::setup_health_multiple(&health_reporter, &[SERVICE_NAME]).await;
//! GrpcServer::log_startup_multiple(&config, &[SERVICE_NAME]);
//!
//! Server::builder()
//!     .add_service(health_service)
//!     .add_service(MovieServiceServer::new(my_impl))
//!     .serve_with_shutdown(config.socket_addr()?, shutdown_signal())
//!     .await?;
//! ```

mod builder;
mod config;
mod shutdown;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
pub use shutdown::shutdown_signal;
