//! The persisted analysis record.

use super::{ActivityMetric, Actor, WeeklyWindow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whole-history counts keyed by metric. `None` marks a count that could not be obtained.
pub type OverallStats = BTreeMap<ActivityMetric, Option<u64>>;

/// Everything collected for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRecord {
    pub display_name: String,
    pub username: String,

    /// Always written, as `null` when the actor has no email
    pub email: Option<String>,

    /// Reports count only co-authored commits for this actor
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub coauthored_only: bool,

    pub overall_stats: OverallStats,
    pub weekly_growth: Vec<WeeklyWindow>,
}

impl ActorRecord {
    #[must_use]
    pub fn new(actor: &Actor, overall_stats: OverallStats, weekly_growth: Vec<WeeklyWindow>) -> Self {
        Self {
            display_name: actor.display_name.clone(),
            username: actor.username.clone(),
            email: actor.email.clone(),
            coauthored_only: actor.coauthored_only,
            overall_stats,
            weekly_growth,
        }
    }

    /// The collected value for `metric`, or `None` if it failed or was not collected.
    #[must_use]
    pub fn stat(&self, metric: ActivityMetric) -> Option<u64> {
        self.overall_stats.get(&metric).copied().flatten()
    }

    /// The primary-author count as reports should use it: zero for co-authored-only actors.
    #[must_use]
    pub fn reported_primary(&self, collected: Option<u64>) -> Option<u64> {
        if self.coauthored_only { Some(0) } else { collected }
    }
}

/// The output of one collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_date: DateTime<Utc>,
    pub users: Vec<ActorRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_nulls_are_written_explicitly() {
        let actor = Actor::new("Cursor", "cursoragent", NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
        let stats = OverallStats::from([
            (ActivityMetric::CommitsCoauthored, Some(10)),
            (ActivityMetric::CommitsPrimaryAuthor, None),
        ]);
        let record = ActorRecord::new(&actor, stats, Vec::new());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "display_name": "Cursor",
                "username": "cursoragent",
                "email": null,
                "overall_stats": {
                    "commits_coauthored": 10,
                    "commits_primary_author": null
                },
                "weekly_growth": []
            })
        );
    }

    #[test]
    fn test_stat_lookup() {
        let actor = Actor::new("Cursor", "cursoragent", NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
        let stats = OverallStats::from([
            (ActivityMetric::CommitsCoauthored, Some(10)),
            (ActivityMetric::CommitsPrimaryAuthor, None),
        ]);
        let record = ActorRecord::new(&actor, stats, Vec::new());

        assert_eq!(record.stat(ActivityMetric::CommitsCoauthored), Some(10));
        assert_eq!(record.stat(ActivityMetric::CommitsPrimaryAuthor), None);
        assert_eq!(record.stat(ActivityMetric::IssuesMentioning), None);
    }

    #[test]
    fn test_coauthored_only_round_trips() {
        let actor = Actor::new("Copilot", "Copilot", NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()).with_coauthored_only();
        let record = ActorRecord::new(&actor, OverallStats::new(), Vec::new());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["coauthored_only"], serde_json::Value::Bool(true));
        assert_eq!(serde_json::from_value::<ActorRecord>(value).unwrap(), record);

        assert_eq!(record.reported_primary(Some(5_000)), Some(0));
        assert_eq!(record.reported_primary(None), Some(0));
    }
}
