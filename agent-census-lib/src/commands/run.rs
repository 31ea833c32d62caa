//! Command dispatch logic for agent-census

use super::{CollectArgs, InitArgs, SummaryArgs, collect, init_config, summarize};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "agent-census", version, author, long_about = None)]
#[command(about = "Estimate how much public GitHub activity is attributable to AI coding assistants")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: CensusSubcommand,
}

#[derive(Subcommand, Debug)]
enum CensusSubcommand {
    /// Query the search API for every configured actor and write the analysis record
    Collect(CollectArgs),
    /// Print totals and weekly growth from a written analysis record
    Summary(SummaryArgs),
    /// Generate a default configuration file
    Init(InitArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        CensusSubcommand::Collect(collect_args) => collect(host, collect_args).await,
        CensusSubcommand::Summary(summary_args) => summarize(host, summary_args),
        CensusSubcommand::Init(init_args) => init_config(host, init_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_collect() {
        let cli = Cli::try_parse_from(["agent-census", "collect", "--github-token", "t", "-o", "out.json", "--log-level", "debug"]).unwrap();
        let CensusSubcommand::Collect(args) = cli.command else {
            panic!("expected collect");
        };
        assert_eq!(args.github_token.as_deref(), Some("t"));
        assert_eq!(args.output.as_deref().map(|p| p.as_str()), Some("out.json"));
    }

    #[test]
    fn test_parse_summary_defaults() {
        let cli = Cli::try_parse_from(["agent-census", "summary"]).unwrap();
        let CensusSubcommand::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.input, None);
        assert_eq!(args.csv, None);
        assert_eq!(args.color, crate::commands::ColorMode::Auto);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["agent-census", "crawl"]).is_err());
    }
}
