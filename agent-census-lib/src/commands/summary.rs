use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::reports;
use camino::Utf8PathBuf;
use clap::Parser;
use core::fmt::Write as _;
use ohno::IntoAppError;
use std::fs::File;
use std::io::{BufWriter, Write};

const LOG_TARGET: &str = "   summary";

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Analysis record to read (default is the configured `output`)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Path to configuration file (default is `census.toml` in the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Also write the cumulative weekly commit series to a CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Print totals and weekly growth from a persisted analysis record.
pub fn summarize<H: Host>(host: &mut H, args: &SummaryArgs) -> Result<()> {
    init_logging(args.log_level);

    let input = match &args.input {
        Some(path) => path.clone(),
        None => Config::load(args.config.as_ref())?.output,
    };

    log::info!(target: LOG_TARGET, "Reading analysis record '{input}'");
    let record = reports::json::read_record(&input)?;
    let use_colors = args.color.use_colors();

    let mut text = String::new();
    writeln!(text, "Analysis date: {}", record.analysis_date.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(text)?;
    reports::console::generate_summary(&record, use_colors, &mut text)?;
    writeln!(text)?;
    reports::console::generate_growth(&record, use_colors, &mut text)?;
    write!(host.output(), "{text}")?;

    if let Some(csv_path) = &args.csv {
        let file = File::create(csv_path).into_app_err_with(|| format!("creating CSV file '{csv_path}'"))?;
        reports::csv::generate(&record, BufWriter::new(file))?;
        writeln!(host.output(), "Wrote cumulative weekly series to {csv_path}")?;
    }

    Ok(())
}
