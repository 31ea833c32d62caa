use super::growth::cumulative_series;
use crate::Result;
use crate::census::AnalysisRecord;
use std::io::Write;

const HEADER: [&str; 7] = [
    "actor",
    "period",
    "start_date",
    "end_date",
    "weekly_total",
    "cumulative_total",
    "complete",
];

/// Write every actor's cumulative weekly series, one row per week.
pub fn generate<W: Write>(record: &AnalysisRecord, writer: W) -> Result<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;

    for user in &record.users {
        for point in cumulative_series(user) {
            csv.write_record([
                user.display_name.clone(),
                point.period,
                point.start_date.to_string(),
                point.end_date.to_string(),
                point.weekly_total.to_string(),
                point.cumulative_total.to_string(),
                point.complete.to_string(),
            ])?;
        }
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::growth::tests::sample_record;

    #[test]
    fn test_generate() {
        let mut output = Vec::new();
        generate(&sample_record(), &mut output).unwrap();

        insta::assert_snapshot!(String::from_utf8(output).unwrap(), @r"
        actor,period,start_date,end_date,weekly_total,cumulative_total,complete
        Claude Code,Feb 24-02,2025-02-24,2025-03-02,105,105,true
        Claude Code,Mar 03-09,2025-03-03,2025-03-09,1210,1315,true
        Claude Code,Mar 10-10,2025-03-10,2025-03-10,40,1355,true
        Jules,Feb 24-02,2025-02-24,2025-03-02,21,21,true
        Jules,Mar 03-09,2025-03-03,2025-03-09,30,51,false
        Jules,Mar 10-10,2025-03-10,2025-03-10,6,57,true
        ");
    }

    #[test]
    fn test_quotes_names_with_commas() {
        let mut record = sample_record();
        record.users.truncate(1);
        record.users[0].display_name = "Claude, Code".to_string();
        record.users[0].weekly_growth.truncate(1);

        let mut output = Vec::new();
        generate(&record, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\n\"Claude, Code\",Feb 24-02,"), "{text}");
    }

    #[test]
    fn test_header_only_for_empty_record() {
        let mut record = sample_record();
        record.users.clear();

        let mut output = Vec::new();
        generate(&record, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", HEADER.join(",")));
    }
}
