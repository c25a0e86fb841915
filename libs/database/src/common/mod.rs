//! Common utilities shared across the database layer

pub mod error;
pub mod retry;
pub mod state;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{RetryConfig, RetryExhausted, retry_with_delay};
pub use state::{ConnectionGate, ConnectionState};
