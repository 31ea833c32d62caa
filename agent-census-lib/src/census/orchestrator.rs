//! A full collection run over every configured actor.

use super::{Actor, Aggregator, AnalysisRecord, Sleeper};
use crate::Result;
use crate::progress::Progress;
use crate::reports;
use camino::Utf8Path;
use chrono::{DateTime, Utc};
use core::fmt::{Debug, Formatter};
use std::sync::Arc;

const LOG_TARGET: &str = "    census";

/// Drives the aggregator over the configured actors, in order.
pub struct Census<S> {
    aggregator: Aggregator<S>,
    actors: Vec<Actor>,
    progress: Arc<dyn Progress>,
}

impl<S> Debug for Census<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Census")
            .field("aggregator", &self.aggregator)
            .field("actors", &self.actors)
            .finish_non_exhaustive()
    }
}

impl<S: Sleeper> Census<S> {
    pub fn new(aggregator: Aggregator<S>, actors: Vec<Actor>, progress: Arc<dyn Progress>) -> Self {
        Self {
            aggregator,
            actors,
            progress,
        }
    }

    /// Collect every actor as of `now` without persisting anything.
    pub async fn collect(&self, now: DateTime<Utc>) -> Result<AnalysisRecord> {
        let today = now.date_naive();
        let mut users = Vec::with_capacity(self.actors.len());

        for (index, actor) in self.actors.iter().enumerate() {
            log::info!(target: LOG_TARGET, "Analyzing '{}' ({} of {})", actor.display_name, index + 1, self.actors.len());
            self.progress.println("");
            self.progress.println(&format!("--- Analyzing {} ---", actor.display_name));

            users.push(self.aggregator.collect_actor(actor, today).await?);
            self.progress.println(&format!("Completed analysis for {}", actor.display_name));

            if index + 1 < self.actors.len() {
                let pause = self.aggregator.pacing().between_actors;
                self.progress.println(&format!("Waiting {} seconds to avoid rate limits...", pause.as_secs()));
                self.aggregator.wait(pause).await;
            }
        }

        Ok(AnalysisRecord { analysis_date: now, users })
    }

    /// Collect, write the record to `output`, and print the summary.
    ///
    /// Nothing is written when collection fails.
    pub async fn run(&self, now: DateTime<Utc>, output: &Utf8Path) -> Result<AnalysisRecord> {
        self.progress.println("=== AI Assistant Activity Analysis ===");

        let record = self.collect(now).await?;
        reports::json::write_record(&record, output)?;

        log::info!(target: LOG_TARGET, "Wrote {} actor record(s) to '{output}'", record.users.len());
        self.progress.println("");
        self.progress.println(&format!("Analysis complete! Data saved to {output}"));

        let mut summary = String::new();
        reports::console::generate_summary(&record, false, &mut summary)?;
        for line in summary.lines() {
            self.progress.println(line);
        }

        Ok(record)
    }
}
