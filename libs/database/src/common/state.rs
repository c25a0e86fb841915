//! Process-wide connection state shared between the startup path and request handlers.

use std::sync::Arc;
use strum::Display;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::error::{DatabaseError, DatabaseResult};

/// Lifecycle of the store connection.
///
/// `Disconnected → Connecting → Ready` on the happy path, `Connecting → Failed`
/// once retries are exhausted. `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Ready,
    Failed,
}

impl ConnectionState {
    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(self, next: ConnectionState) -> bool {
        use ConnectionState::*;

        matches!(
            (self, next),
            (Disconnected, Connecting)
                | (Connecting, Ready)
                | (Connecting, Failed)
                | (Ready, Ready)
                | (Failed, Failed)
        )
    }
}

/// Shared handle onto the connection state.
///
/// One writer (the startup sequencer) and any number of readers (request
/// handlers). Clones observe the same state.
#[derive(Debug, Clone)]
pub struct ConnectionGate {
    tx: Arc<watch::Sender<ConnectionState>>,
}

impl ConnectionGate {
    /// Create a gate in the `Disconnected` state
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionState::Disconnected);
        Self { tx: Arc::new(tx) }
    }

    /// Create a gate that is already `Ready`, for callers that were handed an
    /// established connection
    pub fn ready() -> Self {
        let (tx, _rx) = watch::channel(ConnectionState::Ready);
        Self { tx: Arc::new(tx) }
    }

    /// Current state
    pub fn state(&self) -> ConnectionState {
        *self.tx.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.state() == ConnectionState::Ready
    }

    /// Move to `next`. Illegal transitions are rejected and leave the state
    /// untouched; the return value tells whether the move happened.
    pub fn transition(&self, next: ConnectionState) -> bool {
        let mut applied = false;
        self.tx.send_if_modified(|current| {
            if current.can_transition_to(next) {
                let changed = *current != next;
                *current = next;
                applied = true;
                changed
            } else {
                false
            }
        });

        if applied {
            debug!(state = %next, "Connection state changed");
        } else {
            warn!(from = %self.state(), to = %next, "Rejected connection state transition");
        }
        applied
    }

    /// Fail fast unless the connection is `Ready`
    pub fn ensure_ready(&self) -> DatabaseResult<()> {
        match self.state() {
            ConnectionState::Ready => Ok(()),
            state => Err(DatabaseError::NotReady(state)),
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.tx.subscribe()
    }
}

impl Default for ConnectionGate {
    fn default() -> Self {
        Self::new()
    }
}
