//! Search API client
//!
//! Thin layer over [`Fetcher`] that knows the search endpoints, authenticates with a
//! bearer token, and reduces a response to its total count.

use super::fetcher::{FetchedResponse, Fetcher};
use super::query::ActivityQuery;
use crate::Result;
use crate::census::{Pacing, Sleeper};
use crate::progress::Progress;
use core::fmt::{Display, Formatter};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::sync::Arc;

const LOG_TARGET: &str = "    search";
const USER_AGENT: &str = concat!("agent-census/", env!("CARGO_PKG_VERSION"));
const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Default API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Fields of a search response we care about. Result rows are never read.
#[derive(Debug, Deserialize)]
struct SearchPayload {
    total_count: Option<u64>,
    message: Option<String>,
    errors: Option<serde_json::Value>,
}

/// The count extracted from a search response, or why none could be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The response carried a total count
    Count(u64),

    /// No count was available
    Failed {
        message: String,
        details: Option<serde_json::Value>,
    },
}

impl SearchResult {
    /// A failure with a message and no structured details.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            details: None,
        }
    }

    /// Reduce a response to a count or a failure.
    ///
    /// A payload with `total_count` is a success whatever the status; anything else
    /// (error payloads, non-JSON bodies) is a failure.
    #[must_use]
    pub fn from_response(response: &FetchedResponse) -> Self {
        match response.json::<SearchPayload>() {
            Ok(SearchPayload {
                total_count: Some(count), ..
            }) => Self::Count(count),
            Ok(SearchPayload { message, errors, .. }) => Self::Failed {
                message: message.unwrap_or_else(|| "Unknown error".to_string()),
                details: errors,
            },
            Err(_) => Self::failed(format!("Unexpected response (HTTP {})", response.status())),
        }
    }

    #[must_use]
    pub const fn count(&self) -> Option<u64> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Failed { .. } => None,
        }
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Failed { message, .. } => write!(f, "Error - {message}"),
        }
    }
}

/// Authenticated client for the search endpoints.
#[derive(Debug)]
pub struct SearchClient<S> {
    fetcher: Fetcher<S>,
    base_url: String,
}

impl<S: Sleeper> SearchClient<S> {
    /// Create a client authenticating with `token` against `base_url`.
    pub fn new(token: &str, base_url: &str, pacing: Pacing, sleeper: S, progress: Arc<dyn Progress>) -> Result<Self> {
        let mut auth_val = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));

        let http = reqwest::Client::builder().user_agent(USER_AGENT).default_headers(headers).build()?;

        Ok(Self {
            fetcher: Fetcher::new(http, pacing, sleeper, progress),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run `query` and extract its total count.
    ///
    /// Only transport failures are returned as errors; every HTTP-level problem is
    /// folded into [`SearchResult::Failed`].
    pub async fn count(&self, query: &ActivityQuery) -> Result<SearchResult> {
        let url = format!("{}/{}", self.base_url, query.surface().path());
        log::debug!(target: LOG_TARGET, "Searching {query}");

        let response = self.fetcher.get(&url, &query.params()).await?;
        let result = SearchResult::from_response(&response);

        if let SearchResult::Failed { message, .. } = &result {
            log::info!(target: LOG_TARGET, "No count for {query} (HTTP {}): {message}", response.status());
        }

        Ok(result)
    }
}
