//! Server-side per-call deadline.
//!
//! A call is bounded by the server's configured limit and by the caller's own
//! `grpc-timeout`, whichever is shorter. Dropping the timed-out future cancels
//! whatever it was awaiting, including an in-flight store query, which hands
//! its pooled connection back.

use std::future::Future;
use std::time::Duration;

use tonic::metadata::MetadataMap;

use crate::error::CallError;

pub const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// Taken off a caller's deadline before the handler timer is armed.
///
/// The transport runs its own `grpc-timeout` timer from the moment the request
/// arrives and answers `CANCELLED` when it fires; the handler timer has to
/// expire first for the caller to see `DEADLINE_EXCEEDED`.
pub const CLIENT_DEADLINE_HEADROOM: Duration = Duration::from_millis(20);

/// Parse a `grpc-timeout` header value: at most 8 digits followed by one of
/// `H`, `M`, `S`, `m`, `u`, `n`.
pub fn parse_grpc_timeout(value: &str) -> Option<Duration> {
  if value.len() < 2 {
    return None;
  }
  let (digits, unit) = value.split_at(value.len() - 1);
  if digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let amount: u64 = digits.parse().ok()?;

  match unit {
    "H" => Some(Duration::from_secs(amount * 60 * 60)),
    "M" => Some(Duration::from_secs(amount * 60)),
    "S" => Some(Duration::from_secs(amount)),
    "m" => Some(Duration::from_millis(amount)),
    "u" => Some(Duration::from_micros(amount)),
    "n" => Some(Duration::from_nanos(amount)),
    _ => None,
  }
}

/// The caller's deadline, if the request carries a well-formed `grpc-timeout`
pub fn client_deadline(metadata: &MetadataMap) -> Option<Duration> {
  let raw = metadata.get(GRPC_TIMEOUT_HEADER)?.to_str().ok()?;
  let parsed = parse_grpc_timeout(raw);
  if parsed.is_none() {
    tracing::debug!(value = raw, "Ignoring malformed grpc-timeout");
  }
  parsed
}

/// Deadline to arm for a call: the shorter of the server limit and the
/// caller's deadline minus [`CLIENT_DEADLINE_HEADROOM`].
pub fn effective_deadline(server: Option<Duration>, client: Option<Duration>) -> Option<Duration> {
  let client = client.map(|d| d.saturating_sub(CLIENT_DEADLINE_HEADROOM));
  match (server, client) {
    (Some(server), Some(client)) => Some(server.min(client)),
    (server, client) => server.or(client),
  }
}

/// Run `fut` to completion, or fail with [`CallError::DeadlineExceeded`] once
/// `deadline` has elapsed. `None` means no deadline.
pub async fn with_deadline<F, T>(deadline: Option<Duration>, fut: F) -> Result<T, CallError>
where
  F: Future<Output = T>,
{
  match deadline {
    Some(limit) => tokio::time::timeout(limit, fut).await.map_err(|_| {
      tracing::warn!(deadline_ms = limit.as_millis() as u64, "Call exceeded its deadline");
      CallError::DeadlineExceeded(limit)
    }),
    None => Ok(fut.await),
  }
}
