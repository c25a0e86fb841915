//! Startup logging and health reporting for gRPC servers.

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Helper for the health and logging chores every server does at startup.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for multiple services.
    pub fn log_startup_multiple(config: &ServerConfig, service_names: &[&str]) {
        info!(
            addr = %config.addr_string(),
            services = ?service_names,
            compression = config.enable_compression,
            request_timeout_ms = config.request_timeout.map(|d| d.as_millis() as u64),
            "gRPC server starting"
        );
    }

    /// Mark every listed service, and the empty service name used by generic
    /// health checks, as serving.
    pub async fn setup_health_multiple(health_reporter: &HealthReporter, service_names: &[&str]) {
        Self::set_status(health_reporter, service_names, ServingStatus::Serving).await;
        info!(services = ?service_names, "Services marked as serving");
    }

    /// Mark every listed service, and the empty service name, as not serving.
    ///
    /// Called when shutdown begins so health checkers stop routing new calls here.
    pub async fn mark_not_serving(health_reporter: &HealthReporter, service_names: &[&str]) {
        Self::set_status(health_reporter, service_names, ServingStatus::NotServing).await;
        info!(services = ?service_names, "Services marked as not serving");
    }

    async fn set_status(
        health_reporter: &HealthReporter,
        service_names: &[&str],
        status: ServingStatus,
    ) {
        for service_name in service_names {
            health_reporter
                .set_service_status(*service_name, status)
                .await;
        }
        health_reporter.set_service_status("", status).await;
    }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;

#[cfg(test)]
mod tests {
    use super::*;
    use tonic_health::pb::HealthCheckRequest;
    use tonic_health::pb::health_check_response::ServingStatus as Wire;
    use tonic_health::pb::health_server::Health;
    use tonic_health::server::HealthService;

    async fn check(service: &impl Health, name: &str) -> i32 {
        service
            .check(tonic::Request::new(HealthCheckRequest {
                service: name.to_string(),
            }))
            .await
            .unwrap()
            .into_inner()
            .status
    }

    #[tokio::test]
    async fn test_setup_health_marks_services_serving() {
        let (reporter, _) = tonic_health::server::health_reporter();
        let health = HealthService::from_health_reporter(reporter.clone());

        GrpcServer::setup_health_multiple(&reporter, &["cinema.v1.MovieService"]).await;

        assert_eq!(
            check(&health, "cinema.v1.MovieService").await,
            Wire::Serving as i32
        );
        assert_eq!(check(&health, "").await, Wire::Serving as i32);
    }

    #[tokio::test]
    async fn test_mark_not_serving() {
        let (reporter, _) = tonic_health::server::health_reporter();
        let health = HealthService::from_health_reporter(reporter.clone());

        GrpcServer::setup_health_multiple(&reporter, &["cinema.v1.HelloService"]).await;
        GrpcServer::mark_not_serving(&reporter, &["cinema.v1.HelloService"]).await;

        assert_eq!(
            check(&health, "cinema.v1.HelloService").await,
            Wire::NotServing as i32
        );
    }
}
