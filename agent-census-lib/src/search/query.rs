//! Search query construction
//!
//! Every query here is built for its total-count metadata only, so all of them are sent
//! with `per_page=1`. When an actor has neither a handle nor an email, each builder falls
//! back to a sentinel identifier that matches nothing, never to an unconstrained query.

use chrono::NaiveDate;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

/// Identifier used when an actor has no handle and no email.
const SENTINEL: &str = "nonexistent";

/// Search endpoints exposed under `/search/{surface}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SearchSurface {
    Commits,
    Issues,
    Repositories,
    Code,
}

impl SearchSurface {
    /// API path of the search endpoint, relative to the API base URL.
    #[must_use]
    pub fn path(self) -> String {
        format!("search/{self}")
    }
}

/// The identifiers a query can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Identity<'a> {
    handle: Option<&'a str>,
    email: Option<&'a str>,
}

impl<'a> Identity<'a> {
    /// Create an identity; empty or blank identifiers are treated as absent.
    #[must_use]
    pub fn new(handle: Option<&'a str>, email: Option<&'a str>) -> Self {
        let present = |s: &&str| !s.trim().is_empty();
        Self {
            handle: handle.filter(present),
            email: email.filter(present),
        }
    }

    #[must_use]
    pub const fn handle(&self) -> Option<&'a str> {
        self.handle
    }

    #[must_use]
    pub const fn email(&self) -> Option<&'a str> {
        self.email
    }

    /// Builds one clause per present identifier and joins them with `OR`.
    fn clauses(&self, handle_clause: impl Fn(&str) -> String, email_clause: impl Fn(&str) -> String, fallback: &str) -> String {
        let parts: Vec<String> = self
            .handle
            .map(&handle_clause)
            .into_iter()
            .chain(self.email.map(&email_clause))
            .collect();

        if parts.is_empty() {
            fallback.to_string()
        } else {
            parts.join(" OR ")
        }
    }
}

/// Inclusive calendar date range, rendered as `YYYY-MM-DD..YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}..{}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}

/// Raised when a generic activity query is requested for a surface that has no template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedSurface(pub SearchSurface);

impl Display for UnsupportedSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unsupported search type: {}", self.0)
    }
}

impl core::error::Error for UnsupportedSurface {}

/// A composed search string together with the endpoint it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityQuery {
    surface: SearchSurface,
    text: String,
}

impl ActivityQuery {
    /// Commits that credit the actor through a `Co-authored-by` trailer.
    #[must_use]
    pub fn coauthored_commits(identity: Identity<'_>, range: Option<DateRange>) -> Self {
        let mut text = identity.clauses(
            |handle| format!("co-authored-by:{handle}"),
            |email| format!("co-authored-by:{email}"),
            &format!("co-authored-by:{SENTINEL}"),
        );

        if let Some(range) = range {
            text.push_str(&format!(" committer-date:{range}"));
        }

        Self {
            surface: SearchSurface::Commits,
            text,
        }
    }

    /// Commits where the actor is the primary author.
    #[must_use]
    pub fn authored_commits(identity: Identity<'_>, range: Option<DateRange>) -> Self {
        let mut text = identity.clauses(
            |handle| format!("author:{handle}"),
            |email| format!("author-email:{email}"),
            &format!("author:{SENTINEL}"),
        );

        if let Some(range) = range {
            text.push_str(&format!(" committer-date:{range}"));
        }

        Self {
            surface: SearchSurface::Commits,
            text,
        }
    }

    /// Issues, repositories, or code mentioning the actor.
    ///
    /// Only issue searches honor `range` (as a `created:` filter). Commit searches have
    /// their own builders and are rejected here.
    pub fn mentions(surface: SearchSurface, identity: Identity<'_>, range: Option<DateRange>) -> Result<Self, UnsupportedSurface> {
        let text = match surface {
            SearchSurface::Issues => {
                let mut text = identity.clauses(
                    |handle| format!(r#"is:issue "{handle}" OR mentions:{handle} OR "co-authored-by {handle}""#),
                    |email| format!(r#"is:issue "{email}" OR "co-authored-by {email}""#),
                    &format!("is:issue {SENTINEL}"),
                );
                if let Some(range) = range {
                    text.push_str(&format!(" created:{range}"));
                }
                text
            }
            SearchSurface::Repositories => identity.clauses(
                |handle| format!("{handle} in:name,description,readme"),
                |email| format!("{email} in:name,description,readme"),
                &format!("{SENTINEL} in:name"),
            ),
            SearchSurface::Code => identity.clauses(
                |handle| format!(r#""co-authored-by {handle}" OR "{handle} code" OR "generated with {handle}""#),
                |email| format!(r#""co-authored-by {email}" OR "{email} code""#),
                &format!(r#""{SENTINEL}""#),
            ),
            SearchSurface::Commits => return Err(UnsupportedSurface(surface)),
        };

        Ok(Self { surface, text })
    }

    #[must_use]
    pub const fn surface(&self) -> SearchSurface {
        self.surface
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Query string parameters for the request.
    #[must_use]
    pub fn params(&self) -> [(&'static str, &str); 2] {
        [("q", self.text.as_str()), ("per_page", "1")]
    }
}

impl Display for ActivityQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} [{}]", self.text, self.surface)
    }
}
