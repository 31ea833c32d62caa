//! Per-actor collection: whole-history metrics and the weekly commit breakdown.

use super::{ActivityMetric, Actor, ActorRecord, OverallStats, Pacing, Sleeper, WeeklyWindow, weekly_spans};
use crate::Result;
use crate::progress::Progress;
use crate::reports::common::format_count;
use crate::search::{ActivityQuery, SearchClient, SearchResult};
use chrono::NaiveDate;
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use std::sync::Arc;

const LOG_TARGET: &str = "aggregator";

/// Runs an actor's queries one after another and assembles its record.
pub struct Aggregator<S> {
    client: SearchClient<S>,
    enabled: Vec<ActivityMetric>,
    pacing: Pacing,
    sleeper: S,
    progress: Arc<dyn Progress>,
}

impl<S> Debug for Aggregator<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aggregator")
            .field("enabled", &self.enabled)
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

impl<S: Sleeper> Aggregator<S> {
    pub fn new(client: SearchClient<S>, enabled: Vec<ActivityMetric>, pacing: Pacing, sleeper: S, progress: Arc<dyn Progress>) -> Self {
        Self {
            client,
            enabled,
            pacing,
            sleeper,
            progress,
        }
    }

    #[must_use]
    pub const fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Wait through the configured sleeper.
    pub async fn wait(&self, duration: Duration) {
        self.sleeper.sleep(duration).await;
    }

    /// Collect the overall stats and weekly growth of `actor` up to `today`.
    pub async fn collect_actor(&self, actor: &Actor, today: NaiveDate) -> Result<ActorRecord> {
        let overall_stats = self.overall_stats(actor).await?;
        let weekly_growth = self.weekly_growth(actor, today).await?;
        Ok(ActorRecord::new(actor, overall_stats, weekly_growth))
    }

    /// Run every enabled metric once over the actor's whole history.
    ///
    /// A metric that cannot be counted is recorded as `None`; only transport
    /// failures abort.
    pub async fn overall_stats(&self, actor: &Actor) -> Result<OverallStats> {
        self.progress.println(&format!("Collecting data for {}...", actor.display_name));

        let identity = actor.identity();
        let mut stats = OverallStats::new();

        for &metric in &self.enabled {
            let result = match metric.query(identity, None) {
                Ok(query) => self.client.count(&query).await?,
                Err(e) => SearchResult::failed(e.to_string()),
            };

            match &result {
                SearchResult::Count(count) => {
                    self.progress.println(&format!("  {metric}: {}", format_count(*count)));
                }
                SearchResult::Failed { message, details } => {
                    log::warn!(target: LOG_TARGET, "{metric} unavailable for '{}': {message}", actor.display_name);
                    self.progress.println(&format!("  {metric}: Error - {message}"));
                    if let Some(details) = details {
                        self.progress.println(&format!("    Details: {details}"));
                    }
                }
            }

            let _ = stats.insert(metric, result.count());
        }

        Ok(stats)
    }

    /// Count co-authored and primary-author commits for each week since launch.
    pub async fn weekly_growth(&self, actor: &Actor, today: NaiveDate) -> Result<Vec<WeeklyWindow>> {
        self.progress.println(&format!("Collecting weekly growth data for {}...", actor.display_name));
        self.progress.println("  Weekly commits breakdown:");

        let identity = actor.identity();
        let spans = weekly_spans(actor.launch_date, today);
        let mut windows = Vec::with_capacity(spans.len());

        for span in &spans {
            let range = Some(span.range());
            let coauthored = self.client.count(&ActivityQuery::coauthored_commits(identity, range)).await?;
            let primary = self.client.count(&ActivityQuery::authored_commits(identity, range)).await?;

            let window = WeeklyWindow::new(span, coauthored.count(), primary.count());
            match (window.commits_coauthored, window.commits_primary_author, window.total()) {
                (Some(c), Some(p), Some(t)) => {
                    self.progress.println(&format!(
                        "    {}: {} co-auth + {} primary = {} total",
                        window.period,
                        format_count(c),
                        format_count(p),
                        format_count(t)
                    ));
                }
                _ => {
                    log::warn!(
                        target: LOG_TARGET,
                        "Incomplete week {} for '{}': co-authored {coauthored}, primary {primary}",
                        window.period,
                        actor.display_name
                    );
                    self.progress.println(&format!("    {}: Error", window.period));
                }
            }

            windows.push(window);
            self.sleeper.sleep(self.pacing.between_windows).await;
        }

        Ok(windows)
    }
}
