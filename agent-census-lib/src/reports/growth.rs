//! Cumulative weekly commit series.

use crate::census::ActorRecord;
use chrono::NaiveDate;

/// One point of an actor's cumulative series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativePoint {
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Co-authored plus primary-author commits for this week, missing counts as zero.
    /// Co-authored-only actors contribute no primary-author commits.
    pub weekly_total: u64,

    /// Running sum of `weekly_total` up to and including this week
    pub cumulative_total: u64,

    /// Whether every count that went into `weekly_total` was collected
    pub complete: bool,
}

/// Build the running commit total over an actor's weekly windows, in order.
#[must_use]
pub fn cumulative_series(actor: &ActorRecord) -> Vec<CumulativePoint> {
    let mut cumulative_total = 0u64;

    actor
        .weekly_growth
        .iter()
        .map(|window| {
            let coauthored = window.commits_coauthored;
            let primary = actor.reported_primary(window.commits_primary_author);
            let weekly_total = coauthored.unwrap_or(0).saturating_add(primary.unwrap_or(0));
            cumulative_total = cumulative_total.saturating_add(weekly_total);

            CumulativePoint {
                period: window.period.clone(),
                start_date: window.start_date,
                end_date: window.end_date,
                weekly_total,
                cumulative_total,
                complete: coauthored.is_some() && primary.is_some(),
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::census::{ActivityMetric, AnalysisRecord, OverallStats, WeeklyWindow};
    use chrono::{DateTime, Utc};

    fn window(period: &str, start: (u32, u32), end: (u32, u32), coauthored: Option<u64>, primary: Option<u64>) -> WeeklyWindow {
        WeeklyWindow {
            period: period.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, start.0, start.1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, end.0, end.1).unwrap(),
            commits_coauthored: coauthored,
            commits_primary_author: primary,
        }
    }

    /// A two-actor record shared by the report tests.
    pub(crate) fn sample_record() -> AnalysisRecord {
        AnalysisRecord {
            analysis_date: DateTime::<Utc>::from_timestamp(1_741_608_000, 0).unwrap(),
            users: vec![
                ActorRecord {
                    display_name: "Claude Code".to_string(),
                    username: "claude".to_string(),
                    email: None,
                    coauthored_only: false,
                    overall_stats: OverallStats::from([
                        (ActivityMetric::CommitsCoauthored, Some(12_345)),
                        (ActivityMetric::CommitsPrimaryAuthor, Some(678)),
                        (ActivityMetric::RepositoriesMentioning, Some(90)),
                    ]),
                    weekly_growth: vec![
                        window("Feb 24-02", (2, 24), (3, 2), Some(100), Some(5)),
                        window("Mar 03-09", (3, 3), (3, 9), Some(1_200), Some(10)),
                        window("Mar 10-10", (3, 10), (3, 10), Some(40), Some(0)),
                    ],
                },
                ActorRecord {
                    display_name: "Jules".to_string(),
                    username: "google-labs-jules[bot]".to_string(),
                    email: None,
                    coauthored_only: false,
                    overall_stats: OverallStats::from([
                        (ActivityMetric::CommitsCoauthored, None),
                        (ActivityMetric::CommitsPrimaryAuthor, Some(2_500)),
                        (ActivityMetric::RepositoriesMentioning, Some(3)),
                    ]),
                    weekly_growth: vec![
                        window("Feb 24-02", (2, 24), (3, 2), Some(1), Some(20)),
                        window("Mar 03-09", (3, 3), (3, 9), None, Some(30)),
                        window("Mar 10-10", (3, 10), (3, 10), Some(2), Some(4)),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_cumulative_series() {
        let record = sample_record();
        let totals: Vec<(u64, u64, bool)> = cumulative_series(&record.users[0])
            .iter()
            .map(|p| (p.weekly_total, p.cumulative_total, p.complete))
            .collect();
        assert_eq!(totals, [(105, 105, true), (1_210, 1_315, true), (40, 1_355, true)]);
    }

    #[test]
    fn test_missing_counts_are_zero_and_flagged() {
        let record = sample_record();
        let series = cumulative_series(&record.users[1]);

        assert_eq!(series[1].weekly_total, 30);
        assert_eq!(series[1].cumulative_total, 51);
        assert!(!series[1].complete);
        assert_eq!(series[2].cumulative_total, 57);
        assert!(series[2].complete);
    }

    #[test]
    fn test_coauthored_only_drops_primary_commits() {
        let mut record = sample_record();
        let copilot = &mut record.users[1];
        copilot.coauthored_only = true;
        copilot.weekly_growth = vec![
            window("Feb 24-02", (2, 24), (3, 2), Some(10), Some(5_000)),
            window("Mar 03-09", (3, 3), (3, 9), Some(7), None),
        ];

        let points: Vec<(u64, u64, bool)> = cumulative_series(copilot)
            .iter()
            .map(|p| (p.weekly_total, p.cumulative_total, p.complete))
            .collect();
        assert_eq!(points, [(10, 10, true), (7, 17, true)]);
    }

    #[test]
    fn test_no_windows_no_points() {
        let mut record = sample_record();
        record.users[0].weekly_growth.clear();
        assert!(cumulative_series(&record.users[0]).is_empty());
    }
}
