use crate::Result;
use crate::census::AnalysisRecord;
use camino::{Utf8Path, Utf8PathBuf};
use core::fmt::Write;
use ohno::IntoAppError;
use std::fs;

/// Render `record` as pretty-printed JSON with two-space indentation.
pub fn generate<W: Write>(record: &AnalysisRecord, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(record)?)?;
    Ok(())
}

/// Write `record` to `path`, creating parent directories and replacing any existing file.
///
/// The record is staged next to `path` and renamed into place, so readers never see a
/// partially written file.
pub fn write_record(record: &AnalysisRecord, path: &Utf8Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        fs::create_dir_all(parent).into_app_err_with(|| format!("creating output directory '{parent}'"))?;
    }

    let mut text = String::new();
    generate(record, &mut text)?;
    text.push('\n');

    let staging = Utf8PathBuf::from(format!("{path}.tmp"));
    fs::write(&staging, text).into_app_err_with(|| format!("writing analysis record to '{staging}'"))?;
    fs::rename(&staging, path)
        .inspect_err(|_| {
            let _ = fs::remove_file(&staging);
        })
        .into_app_err_with(|| format!("moving analysis record into place at '{path}'"))?;

    Ok(())
}

/// Load a record previously written by [`write_record`].
pub fn read_record(path: &Utf8Path) -> Result<AnalysisRecord> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading analysis record '{path}'"))?;
    serde_json::from_str(&text).into_app_err_with(|| format!("parsing analysis record '{path}'"))
}
