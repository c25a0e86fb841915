//! Startup sequencing: nothing binds until the store is reachable and the
//! schema is in place.

use database::common::{ConnectionGate, ConnectionState, DatabaseResult, RetryConfig};
use database::postgres::{Connect, SchemaBootstrap, StoreHandle, connect_with_retry, run_bootstrap};
use tracing::{error, info, instrument};

/// Drives the connection gate through `Connecting` to `Ready` or `Failed`.
///
/// The sequencer is the gate's only writer; request handlers hold clones of
/// the same gate and only read it.
pub struct StartupSequencer<C, B> {
    connector: C,
    bootstrap: B,
    retry: RetryConfig,
    gate: ConnectionGate,
}

impl<C, B> StartupSequencer<C, B>
where
    C: Connect,
    B: SchemaBootstrap,
{
    pub fn new(connector: C, bootstrap: B, retry: RetryConfig, gate: ConnectionGate) -> Self {
        Self {
            connector,
            bootstrap,
            retry,
            gate,
        }
    }

    /// Connect with bounded retry, then bootstrap the schema.
    ///
    /// On success the gate is `Ready` and the returned handle is verified.
    /// Any failure leaves the gate `Failed`.
    #[instrument(skip(self), fields(target = %self.connector.target()))]
    pub async fn start(&self) -> DatabaseResult<StoreHandle> {
        self.gate.transition(ConnectionState::Connecting);

        let store = match connect_with_retry(&self.connector, &self.retry).await {
            Ok(store) => store,
            Err(e) => {
                error!(error = %e, "Store never became reachable");
                self.gate.transition(ConnectionState::Failed);
                return Err(e);
            }
        };

        if let Err(e) = run_bootstrap(&store, &self.bootstrap).await {
            error!(error = %e, "Schema bootstrap failed");
            self.gate.transition(ConnectionState::Failed);
            return Err(e);
        }

        self.gate.transition(ConnectionState::Ready);
        info!("Store ready");
        Ok(store)
    }
}
