use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Waits used to keep the aggregate request rate against the search API low.
///
/// Every delay the collector observes comes from this structure so that tests can
/// substitute a recording [`Sleeper`] without touching control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Pacing {
    /// Pause between two consecutive actors
    #[serde(with = "humantime_serde")]
    pub between_actors: Duration,

    /// Pause after each weekly window
    #[serde(with = "humantime_serde")]
    pub between_windows: Duration,

    /// Wait applied when the search index is still being built (HTTP 202)
    #[serde(with = "humantime_serde")]
    pub indexing_wait: Duration,

    /// First step of the exponential backoff used when a rate limit carries no reset time
    #[serde(with = "humantime_serde")]
    pub backoff_base: Duration,

    /// Extra time added on top of a server-provided reset time
    #[serde(with = "humantime_serde")]
    pub reset_buffer: Duration,

    /// Floor for any rate-limit wait
    #[serde(with = "humantime_serde")]
    pub min_rate_limit_wait: Duration,

    /// Total number of requests made for one query, including the first
    pub max_attempts: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            between_actors: Duration::from_secs(30),
            between_windows: Duration::from_secs(1),
            indexing_wait: Duration::from_secs(30),
            backoff_base: Duration::from_secs(30),
            reset_buffer: Duration::from_secs(10),
            min_rate_limit_wait: Duration::from_secs(30),
            max_attempts: 3,
        }
    }
}

impl Pacing {
    /// Backoff for a rate-limited attempt that carried no reset time.
    ///
    /// `attempt` is zero-based, giving `base`, `2 * base`, `4 * base`, ...
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Abstraction over waiting so that pacing can be observed in tests.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
