use super::common::{format_count, format_optional_count};
use super::growth::cumulative_series;
use crate::Result;
use crate::census::{ActivityMetric, AnalysisRecord};
use core::fmt::Write;
use owo_colors::OwoColorize;

const INCOMPLETE_FOOTNOTE: &str = "* Total excludes counts that could not be collected";

fn actor_name(name: &str, use_colors: bool) -> String {
    if use_colors { name.bold().to_string() } else { name.to_string() }
}

fn marked_total(total: u64, complete: bool, use_colors: bool) -> String {
    let text = format_count(total);
    match (complete, use_colors) {
        (true, _) => text,
        (false, true) => format!("{text}*").yellow().to_string(),
        (false, false) => format!("{text}*"),
    }
}

/// Per-actor commit totals from the overall stats.
///
/// Missing counts are shown as `n/a` and treated as zero in the total, which is then
/// marked with `*`.
pub fn generate_summary<W: Write>(record: &AnalysisRecord, use_colors: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "=== Summary ===")?;

    let mut any_incomplete = false;
    for user in &record.users {
        let coauthored = user.stat(ActivityMetric::CommitsCoauthored);
        let primary = user.reported_primary(user.stat(ActivityMetric::CommitsPrimaryAuthor));
        let total = coauthored.unwrap_or(0).saturating_add(primary.unwrap_or(0));
        let complete = coauthored.is_some() && primary.is_some();
        any_incomplete |= !complete;

        let name = actor_name(&user.display_name, use_colors);
        let total = marked_total(total, complete, use_colors);
        if user.coauthored_only {
            writeln!(
                writer,
                "{name}: {} co-authored = {total} total commits (co-authored only)",
                format_optional_count(coauthored),
            )?;
        } else {
            writeln!(
                writer,
                "{name}: {} co-authored + {} primary = {total} total commits",
                format_optional_count(coauthored),
                format_optional_count(primary),
            )?;
        }
    }

    if any_incomplete {
        writeln!(writer)?;
        writeln!(writer, "{INCOMPLETE_FOOTNOTE}")?;
    }

    Ok(())
}

/// Where each actor's cumulative weekly series ends up.
pub fn generate_growth<W: Write>(record: &AnalysisRecord, use_colors: bool, writer: &mut W) -> Result<()> {
    writeln!(writer, "=== Weekly Growth ===")?;

    let mut any_incomplete = false;
    for user in &record.users {
        let name = actor_name(&user.display_name, use_colors);
        let series = cumulative_series(user);

        let Some(latest) = series.last() else {
            writeln!(writer, "{name}: no weekly data")?;
            continue;
        };

        let complete = series.iter().all(|p| p.complete);
        any_incomplete |= !complete;

        writeln!(
            writer,
            "{name}: {} week(s), {} cumulative commits, latest week {}: {}",
            series.len(),
            marked_total(latest.cumulative_total, complete, use_colors),
            latest.period,
            format_count(latest.weekly_total),
        )?;
    }

    if any_incomplete {
        writeln!(writer)?;
        writeln!(writer, "{INCOMPLETE_FOOTNOTE}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::growth::tests::sample_record;

    #[test]
    fn test_summary() {
        let mut output = String::new();
        generate_summary(&sample_record(), false, &mut output).unwrap();

        insta::assert_snapshot!(output, @r"
        === Summary ===
        Claude Code: 12,345 co-authored + 678 primary = 13,023 total commits
        Jules: n/a co-authored + 2,500 primary = 2,500* total commits

        * Total excludes counts that could not be collected
        ");
    }

    #[test]
    fn test_summary_complete_has_no_footnote() {
        let mut record = sample_record();
        record.users.truncate(1);

        let mut output = String::new();
        generate_summary(&record, false, &mut output).unwrap();

        assert!(!output.contains('*'));
    }

    #[test]
    fn test_summary_coauthored_only() {
        let mut record = sample_record();
        record.users.truncate(1);
        record.users[0].coauthored_only = true;

        let mut output = String::new();
        generate_summary(&record, false, &mut output).unwrap();

        insta::assert_snapshot!(output, @r"
        === Summary ===
        Claude Code: 12,345 co-authored = 12,345 total commits (co-authored only)
        ");
    }

    #[test]
    fn test_summary_empty_record() {
        let mut record = sample_record();
        record.users.clear();

        let mut output = String::new();
        generate_summary(&record, false, &mut output).unwrap();

        assert_eq!(output, "=== Summary ===\n");
    }

    #[test]
    fn test_growth() {
        let mut record = sample_record();
        record.users[0].weekly_growth.truncate(2);

        let mut output = String::new();
        generate_growth(&record, false, &mut output).unwrap();

        insta::assert_snapshot!(output, @r"
        === Weekly Growth ===
        Claude Code: 2 week(s), 1,315 cumulative commits, latest week Mar 03-09: 1,210
        Jules: 3 week(s), 57* cumulative commits, latest week Mar 10-10: 6

        * Total excludes counts that could not be collected
        ");
    }

    #[test]
    fn test_growth_without_windows() {
        let mut record = sample_record();
        record.users.truncate(1);
        record.users[0].weekly_growth.clear();

        let mut output = String::new();
        generate_growth(&record, false, &mut output).unwrap();

        assert_eq!(output, "=== Weekly Growth ===\nClaude Code: no weekly data\n");
    }

    #[test]
    fn test_colors_only_when_requested() {
        let mut plain = String::new();
        generate_summary(&sample_record(), false, &mut plain).unwrap();
        assert!(!plain.contains('\u{1b}'));

        let mut colored = String::new();
        generate_summary(&sample_record(), true, &mut colored).unwrap();
        assert!(colored.contains('\u{1b}'));
    }
}
