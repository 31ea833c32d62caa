//! Estimate how much public GitHub activity is attributable to AI coding assistants.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use agent_census_lib::progress::{ConsoleProgress, Progress};
use agent_census_lib::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};
use std::sync::Arc;

/// Default host writing to the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn progress(&self) -> Arc<dyn Progress> {
        Arc::new(ConsoleProgress)
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
