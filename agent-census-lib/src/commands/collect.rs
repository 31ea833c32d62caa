use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::census::{Aggregator, Census, TokioSleeper};
use crate::search::SearchClient;
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Parser;
use ohno::app_err;
use std::io::Write;
use std::sync::Arc;

const LOG_TARGET: &str = "   collect";

#[derive(Parser, Debug)]
pub struct CollectArgs {
    /// Path to configuration file (default is `census.toml` in the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Where to write the analysis record, overriding the configured `output`
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Query the search API for every configured actor and write the analysis record.
pub async fn collect<H: Host>(host: &mut H, args: &CollectArgs) -> Result<()> {
    init_logging(args.log_level);

    let Config {
        output,
        api_base_url,
        enabled_metrics,
        pacing,
        actors,
    } = Config::load(args.config.as_ref())?;

    let token = args
        .github_token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| app_err!("a GitHub token is required: pass --github-token or set GITHUB_TOKEN"))?;

    let output = args.output.clone().unwrap_or(output);
    log::info!(target: LOG_TARGET, "Collecting {} actor(s) from {api_base_url} into '{output}'", actors.len());

    let progress = host.progress();
    let client = SearchClient::new(token, &api_base_url, pacing, TokioSleeper, Arc::clone(&progress))?;
    let aggregator = Aggregator::new(client, enabled_metrics, pacing, TokioSleeper, Arc::clone(&progress));
    let census = Census::new(aggregator, actors, progress);

    match census.run(Utc::now(), &output).await {
        Ok(_) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "Collection aborted, no analysis record was written: {e}");
            Err(e)
        }
    }
}
