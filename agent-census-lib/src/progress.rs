/// A sink for the human-readable progress lines printed during a census run.
///
/// Progress lines are the primary user-visible channel while collecting: per-metric
/// counts, per-week breakdowns, waits, and query failures all flow through here,
/// independently of the diagnostic log level.
pub trait Progress: Send + Sync {
    /// Emit one line of progress output.
    fn println(&self, line: &str);
}

/// Writes progress lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Progress for ConsoleProgress {
    fn println(&self, line: &str) {
        println!("{line}");
    }
}

/// Discards all progress output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn println(&self, _line: &str) {}
}
