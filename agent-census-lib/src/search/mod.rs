//! Search API access
//!
//! Queries are composed by [`ActivityQuery`], sent through a [`SearchClient`], and reduced
//! to a [`SearchResult`]. Requests pass through the rate-limited [`Fetcher`], which waits out
//! rate limits and index rebuilds before giving up.

mod client;
mod fetcher;
mod query;

pub use client::{DEFAULT_API_BASE_URL, SearchClient, SearchResult};
pub use fetcher::{FetchedResponse, Fetcher, Outcome, RetryReason, classify};
pub use query::{ActivityQuery, DateRange, Identity, SearchSurface, UnsupportedSurface};
