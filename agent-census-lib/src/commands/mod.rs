//! Command-line interface and orchestration for agent-census
//!
//! ## Commands
//!
//! - **collect**: Load the configuration, query the search API for every actor, write the
//!   analysis record, and print a summary
//! - **summary**: Read a previously written record, print per-actor totals and weekly
//!   growth, and optionally export the cumulative weekly series as CSV
//! - **init**: Generate a default configuration file
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate handler. All output goes through a [`Host`] so that commands can be
//! exercised in tests.

mod collect;
mod common;
mod config;
mod host;
mod init;
mod run;
mod summary;

pub use collect::{CollectArgs, collect};
pub use common::{ColorMode, LogLevel};
pub use config::{Config, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TOML};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use summary::{SummaryArgs, summarize};
