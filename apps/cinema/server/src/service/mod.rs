//! gRPC service implementations
//!
//! Every handler runs its domain call through a [`CallGuard`], which rejects
//! calls while the store is not ready and bounds each call by the shorter of
//! the server deadline and the caller's `grpc-timeout`.

mod greeter;
mod movies;

pub use greeter::HelloServiceImpl;
pub use movies::MovieServiceImpl;

use database::common::ConnectionGate;
use grpc_client::{CallError, effective_deadline, with_deadline};
use std::future::Future;
use std::time::{Duration, Instant};
use tonic::{Response, Status};
use tracing::{debug, warn};

/// Admission and deadline handling shared by every handler
#[derive(Debug, Clone)]
pub struct CallGuard {
    gate: ConnectionGate,
    deadline: Option<Duration>,
}

impl CallGuard {
    pub fn new(gate: ConnectionGate, deadline: Option<Duration>) -> Self {
        Self { gate, deadline }
    }

    /// Run `call` if the store is ready, mapping its error into a `Status`.
    ///
    /// `client_deadline` is the caller's `grpc-timeout`, read from the request
    /// metadata before the message is taken out.
    pub async fn run<T, E, F>(
        &self,
        method: &'static str,
        client_deadline: Option<Duration>,
        call: F,
    ) -> Result<Response<T>, Status>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<Status>,
    {
        if let Err(e) = self.gate.ensure_ready() {
            warn!(method, error = %e, "Rejecting call");
            return Err(CallError::DependencyUnavailable(e.to_string()).into());
        }

        let deadline = effective_deadline(self.deadline, client_deadline);
        let started = Instant::now();
        let result: Result<T, Status> = with_deadline(deadline, call)
            .await
            .map_err(Status::from)?
            .map_err(Into::into);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => debug!(method, elapsed_ms, "Call completed"),
            Err(status) => warn!(
                method,
                elapsed_ms,
                code = ?status.code(),
                message = status.message(),
                "Call failed"
            ),
        }

        result.map(Response::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::common::ConnectionState;

    #[tokio::test]
    async fn test_rejects_until_ready() {
        let gate = ConnectionGate::new();
        let guard = CallGuard::new(gate.clone(), None);

        let status = guard
            .run("Ping", None, async { Ok::<_, Status>(()) })
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unavailable);

        gate.transition(ConnectionState::Connecting);
        gate.transition(ConnectionState::Ready);
        assert!(guard.run("Ping", None, async { Ok::<_, Status>(()) }).await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_gate_stays_unavailable() {
        let gate = ConnectionGate::new();
        gate.transition(ConnectionState::Connecting);
        gate.transition(ConnectionState::Failed);

        let status = CallGuard::new(gate, None)
            .run("Ping", None, async { Ok::<_, Status>(()) })
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert!(status.message().contains("failed"));
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let guard = CallGuard::new(ConnectionGate::ready(), Some(Duration::from_millis(10)));

        let status = guard
            .run("Slow", None, async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, Status>(())
            })
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::DeadlineExceeded);
    }

    #[tokio::test]
    async fn test_client_deadline_shorter_than_server() {
        let guard = CallGuard::new(ConnectionGate::ready(), Some(Duration::from_secs(30)));

        let started = Instant::now();
        let status = guard
            .run("Slow", Some(Duration::from_millis(60)), async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, Status>(())
            })
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::DeadlineExceeded);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_client_deadline_without_server_deadline() {
        let guard = CallGuard::new(ConnectionGate::ready(), None);

        let status = guard
            .run("Slow", Some(Duration::from_millis(40)), async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, Status>(())
            })
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::DeadlineExceeded);
    }

    #[tokio::test]
    async fn test_handler_error_is_converted() {
        let guard = CallGuard::new(ConnectionGate::ready(), None);

        let status = guard
            .run("Broken", None, async { Err::<(), _>(Status::internal("boom")) })
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
