//! Rate-limited HTTP GET for the search API.
//!
//! The search API throttles aggressively and serves `202 Accepted` while its index is
//! catching up. [`Fetcher::get`] retries those responses a bounded number of times,
//! waiting between attempts, and hands everything else straight back to the caller.
//! Deciding what to do with a response is done by [`classify`], which is pure so the
//! retry policy can be tested without HTTP.

use crate::Result;
use crate::census::{Pacing, Sleeper};
use crate::progress::Progress;
use chrono::{DateTime, Utc};
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use ohno::IntoAppError;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const LOG_TARGET: &str = "   fetcher";
const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// A fully buffered HTTP response.
///
/// The body is read eagerly because classifying a 403 requires looking at its text.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl FetchedResponse {
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: String) -> Self {
        Self { status, headers, body }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).into_app_err_with(|| format!("parsing JSON response (HTTP {})", self.status))
    }

    /// Whether this is a 403 whose body reports an exhausted rate limit.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::FORBIDDEN && self.body.to_lowercase().contains("rate limit")
    }

    /// Server-provided rate limit reset time, if the header is present and well formed.
    #[must_use]
    pub fn rate_limit_reset(&self) -> Option<DateTime<Utc>> {
        let reset = self.headers.get(RATE_LIMIT_RESET_HEADER)?.to_str().ok()?.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp(reset, 0)
    }
}

/// Why a response warrants another attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryReason {
    /// HTTP 403 with a rate limit message
    RateLimited {
        /// Whether the wait was derived from a reset time rather than backoff
        reset_known: bool,
    },

    /// HTTP 202 while the search index is being built
    Indexing,
}

/// What to do with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Wait, then issue the request again (if attempts remain)
    Retryable { wait: Duration, reason: RetryReason },

    /// Hand the response to the caller as is
    Terminal,

    /// The query itself is invalid (HTTP 422); hand it back without retrying
    Rejected,
}

/// Decide how to handle `response`, received on zero-based `attempt`.
#[must_use]
pub fn classify(response: &FetchedResponse, attempt: u32, now: DateTime<Utc>, pacing: &Pacing) -> Outcome {
    if response.is_rate_limited() {
        return match response.rate_limit_reset() {
            Some(reset_at) => {
                let buffer = i64::try_from(pacing.reset_buffer.as_secs()).unwrap_or(i64::MAX);
                let seconds = reset_at.timestamp().saturating_sub(now.timestamp()).saturating_add(buffer);
                let wait = u64::try_from(seconds).map_or(Duration::ZERO, Duration::from_secs);

                Outcome::Retryable {
                    wait: wait.max(pacing.min_rate_limit_wait),
                    reason: RetryReason::RateLimited { reset_known: true },
                }
            }
            None => Outcome::Retryable {
                wait: pacing.backoff(attempt),
                reason: RetryReason::RateLimited { reset_known: false },
            },
        };
    }

    match response.status() {
        StatusCode::ACCEPTED => Outcome::Retryable {
            wait: pacing.indexing_wait,
            reason: RetryReason::Indexing,
        },
        StatusCode::UNPROCESSABLE_ENTITY => Outcome::Rejected,
        _ => Outcome::Terminal,
    }
}

/// Issues GET requests, retrying rate-limited and not-yet-indexed responses.
///
/// Each call is independent; nothing is remembered between calls.
pub struct Fetcher<S> {
    http: reqwest::Client,
    pacing: Pacing,
    sleeper: S,
    progress: Arc<dyn Progress>,
}

impl<S> Debug for Fetcher<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fetcher")
            .field("http", &self.http)
            .field("pacing", &self.pacing)
            .field("progress", &"<dyn Progress>")
            .finish_non_exhaustive()
    }
}

impl<S: Sleeper> Fetcher<S> {
    pub fn new(http: reqwest::Client, pacing: Pacing, sleeper: S, progress: Arc<dyn Progress>) -> Self {
        Self {
            http,
            pacing,
            sleeper,
            progress,
        }
    }

    /// GET `url` with `params`, retrying per [`classify`] up to `max_attempts` times.
    ///
    /// Returns the last response when attempts run out. Transport failures are
    /// returned as errors and are not retried.
    pub async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<FetchedResponse> {
        let max_attempts = self.pacing.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            let response = self.get_once(url, params).await?;

            match classify(&response, attempt, Utc::now(), &self.pacing) {
                Outcome::Terminal => return Ok(response),

                Outcome::Rejected => {
                    let query = params.iter().find(|(k, _)| *k == "q").map_or("unknown", |(_, v)| *v);
                    log::warn!(target: LOG_TARGET, "Validation error for query '{query}': {}", response.body());
                    self.progress.println(&format!("    Validation error for query: {query}"));
                    self.progress.println(&format!("    Response: {}", response.body()));
                    return Ok(response);
                }

                Outcome::Retryable { wait, reason } => {
                    let secs = wait.as_secs();
                    let notice = match reason {
                        RetryReason::RateLimited { reset_known: true } => {
                            format!("    Rate limit hit. Waiting {secs} seconds until reset...")
                        }
                        RetryReason::RateLimited { reset_known: false } => {
                            format!("    Rate limit hit (attempt {}). Waiting {secs} seconds...", attempt + 1)
                        }
                        RetryReason::Indexing => format!("    Search indexing in progress, waiting {secs} seconds..."),
                    };
                    log::debug!(target: LOG_TARGET, "{reason:?} on attempt {} for {url}, waiting {}ms", attempt + 1, wait.as_millis());
                    self.progress.println(&notice);
                    self.sleeper.sleep(wait).await;

                    attempt += 1;
                    if attempt >= max_attempts {
                        log::warn!(target: LOG_TARGET, "Giving up on {url} after {attempt} attempt(s)");
                        self.progress.println(&format!("    Max retries exceeded for {url}"));
                        return Ok(response);
                    }
                }
            }
        }
    }

    async fn get_once(&self, url: &str, params: &[(&str, &str)]) -> Result<FetchedResponse> {
        let resp = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .into_app_err_with(|| format!("sending request to '{url}'"))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await.into_app_err_with(|| format!("reading response body from '{url}'"))?;

        log::trace!(target: LOG_TARGET, "GET {url} -> {status}");
        Ok(FetchedResponse::new(status, headers, body))
    }
}
