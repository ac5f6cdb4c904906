//! Per-run metrics for the stabilizer.

/// Counters and timing collected while a [`Stabilizer`](crate::Stabilizer)
/// runs.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StabilizeMetrics {
    /// Rounds that changed at least one cell.
    pub rounds: u64,
    /// Step applications, including the final one that changed nothing.
    pub steps: u64,
    /// Cumulative number of cell state changes across all rounds.
    pub cells_changed: u64,
    /// Wall-clock time spent in step applications.
    pub total_us: u64,
    /// Wall-clock time of the most recent step.
    pub last_step_us: u64,
}
