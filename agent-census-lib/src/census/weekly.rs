//! Seven-day windows from an actor's launch date up to today.

use crate::search::DateRange;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One week of the measurement period, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekSpan {
    /// Short human label such as `Feb 24-02` or `Mar 10-10`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.start.format("%b %d"), self.end.format("%d"))
    }

    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// Split `launch..=today` into consecutive seven-day spans.
///
/// The last span is truncated at `today`. A launch date after `today` yields no spans.
#[must_use]
pub fn weekly_spans(launch: NaiveDate, today: NaiveDate) -> Vec<WeekSpan> {
    let mut spans = Vec::new();
    let mut start = launch;

    while start <= today {
        let end = start.checked_add_days(Days::new(6)).map_or(today, |end| end.min(today));
        spans.push(WeekSpan { start, end });

        match start.checked_add_days(Days::new(7)) {
            Some(next) => start = next,
            None => break,
        }
    }

    spans
}

/// Commit counts for one week, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWindow {
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub commits_coauthored: Option<u64>,
    pub commits_primary_author: Option<u64>,
}

impl WeeklyWindow {
    #[must_use]
    pub fn new(span: &WeekSpan, commits_coauthored: Option<u64>, commits_primary_author: Option<u64>) -> Self {
        Self {
            period: span.label(),
            start_date: span.start,
            end_date: span.end,
            commits_coauthored,
            commits_primary_author,
        }
    }

    /// Both counts summed, if both are known.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        Some(self.commits_coauthored?.saturating_add(self.commits_primary_author?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_spans_truncate_at_today() {
        let spans = weekly_spans(date(2025, 2, 24), date(2025, 3, 10));

        assert_eq!(
            spans,
            [
                WeekSpan { start: date(2025, 2, 24), end: date(2025, 3, 2) },
                WeekSpan { start: date(2025, 3, 3), end: date(2025, 3, 9) },
                WeekSpan { start: date(2025, 3, 10), end: date(2025, 3, 10) },
            ]
        );
    }

    #[test]
    fn test_spans_are_contiguous_and_bounded() {
        let launch = date(2024, 12, 30);
        let today = date(2025, 6, 1);
        let spans = weekly_spans(launch, today);

        assert_eq!(spans.first().unwrap().start, launch);
        assert_eq!(spans.last().unwrap().end, today);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
        }
        for span in &spans {
            assert!(span.start <= span.end);
            assert!((span.end - span.start).num_days() <= 6);
        }
    }

    #[test]
    fn test_launch_today_yields_single_day() {
        let today = date(2025, 3, 10);
        assert_eq!(weekly_spans(today, today), [WeekSpan { start: today, end: today }]);
    }

    #[test]
    fn test_future_launch_yields_nothing() {
        assert!(weekly_spans(date(2025, 3, 11), date(2025, 3, 10)).is_empty());
    }

    #[test]
    fn test_labels() {
        let spans = weekly_spans(date(2025, 2, 24), date(2025, 3, 10));
        let labels: Vec<String> = spans.iter().map(WeekSpan::label).collect();
        assert_eq!(labels, ["Feb 24-02", "Mar 03-09", "Mar 10-10"]);
    }

    #[test]
    fn test_total_needs_both_counts() {
        let span = WeekSpan { start: date(2025, 3, 3), end: date(2025, 3, 9) };
        assert_eq!(WeeklyWindow::new(&span, Some(3), Some(4)).total(), Some(7));
        assert_eq!(WeeklyWindow::new(&span, None, Some(4)).total(), None);
    }
}
