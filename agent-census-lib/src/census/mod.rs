//! Collection of per-actor activity
//!
//! An [`Aggregator`] turns one [`Actor`] into an [`ActorRecord`]: whole-history counts for
//! each enabled [`ActivityMetric`] plus a commit breakdown per [`WeeklyWindow`]. The
//! [`Census`] runs the aggregator over every configured actor and persists the resulting
//! [`AnalysisRecord`]. All waiting goes through a [`Sleeper`] using the delays in [`Pacing`].

mod actor;
mod aggregator;
mod metric;
mod orchestrator;
mod pacing;
mod record;
mod weekly;

pub use actor::Actor;
pub use aggregator::Aggregator;
pub use metric::ActivityMetric;
pub use orchestrator::Census;
pub use pacing::{Pacing, Sleeper, TokioSleeper};
pub use record::{ActorRecord, AnalysisRecord, OverallStats};
pub use weekly::{WeekSpan, WeeklyWindow, weekly_spans};
