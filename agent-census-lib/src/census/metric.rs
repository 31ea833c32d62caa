use crate::search::{ActivityQuery, DateRange, Identity, SearchSurface, UnsupportedSurface};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A named count collected once per actor over its whole history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityMetric {
    /// Commits crediting the actor as co-author
    CommitsCoauthored,

    /// Commits authored by the actor
    CommitsPrimaryAuthor,

    /// Issues and pull requests mentioning the actor
    IssuesMentioning,

    /// Repositories naming the actor in their name, description, or readme
    RepositoriesMentioning,

    /// Code files mentioning the actor
    CodeFilesMentioning,
}

impl ActivityMetric {
    /// Metrics collected when the configuration does not say otherwise.
    ///
    /// Issue and code mentions are left out: those searches match text far beyond
    /// the actor's own activity.
    pub const DEFAULT_ENABLED: [Self; 3] = [Self::CommitsCoauthored, Self::CommitsPrimaryAuthor, Self::RepositoriesMentioning];

    /// Build the query measuring this metric.
    pub fn query(self, identity: Identity<'_>, range: Option<DateRange>) -> Result<ActivityQuery, UnsupportedSurface> {
        match self {
            Self::CommitsCoauthored => Ok(ActivityQuery::coauthored_commits(identity, range)),
            Self::CommitsPrimaryAuthor => Ok(ActivityQuery::authored_commits(identity, range)),
            Self::IssuesMentioning => ActivityQuery::mentions(SearchSurface::Issues, identity, range),
            Self::RepositoriesMentioning => ActivityQuery::mentions(SearchSurface::Repositories, identity, range),
            Self::CodeFilesMentioning => ActivityQuery::mentions(SearchSurface::Code, identity, range),
        }
    }
}
