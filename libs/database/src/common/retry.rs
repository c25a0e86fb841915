use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

#[cfg(feature = "config")]
use core_config::{env_parse, ConfigError, FromEnv};

/// Bounded, fixed-delay retry policy used while waiting for a dependency.
///
/// `max_attempts` counts every attempt including the first one. The delay is
/// slept between attempts only, so the worst case wall time is
/// `(max_attempts - 1) * delay` plus the time spent in the attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts (values below 1 are treated as 1)
    pub max_attempts: u32,

    /// Fixed delay between attempts
    pub delay: Duration,
}

impl RetryConfig {
    /// Create a new retry configuration with defaults
    ///
    /// Defaults: 10 attempts, 2 seconds apart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Attempts actually performed by [`retry_with_delay`]
    pub fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(2),
        }
    }
}

/// Load RetryConfig from environment variables
///
/// - `DB_CONNECT_MAX_ATTEMPTS` (optional, default: 10)
/// - `DB_CONNECT_RETRY_DELAY_MS` (optional, default: 2000)
#[cfg(feature = "config")]
impl FromEnv for RetryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let max_attempts = env_parse("DB_CONNECT_MAX_ATTEMPTS", "10")?;
        let delay_ms: u64 = env_parse("DB_CONNECT_RETRY_DELAY_MS", "2000")?;

        Ok(Self {
            max_attempts,
            delay: Duration::from_millis(delay_ms),
        })
    }
}

/// Outcome of an exhausted retry loop: how many attempts ran and the last error.
#[derive(Debug)]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

/// Retry an async operation with a fixed delay between attempts.
///
/// Returns the first success, or [`RetryExhausted`] carrying the error of the
/// final attempt.
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_delay, RetryConfig};
///
/// let config = RetryConfig::new().with_max_attempts(5);
/// let db = retry_with_delay(|| database::postgres::connect(&url), &config).await?;
/// ```
pub async fn retry_with_delay<F, Fut, T, E>(
    mut operation: F,
    config: &RetryConfig,
) -> Result<T, RetryExhausted<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.effective_attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => {
                warn!(attempts = attempt, error = %e, "Giving up after final attempt");
                return Err(RetryExhausted {
                    attempts: attempt,
                    last_error: e,
                });
            }
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts,
                    error = %e,
                    "Dependency not ready, retrying in {}ms",
                    config.delay.as_millis()
                );
                tokio::time::sleep(config.delay).await;
            }
        }
    }
}
