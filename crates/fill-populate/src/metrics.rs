//! Metrics collected while filling the store.

use std::time::Duration;

/// Metrics from one fill phase (users or messages).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseMetrics {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent inserting data.
    pub insert_duration: Duration,
}

impl PhaseMetrics {
    /// Generation plus insert time.
    pub fn total_duration(&self) -> Duration {
        self.generation_duration + self.insert_duration
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        let secs = self.total_duration().as_secs_f64();
        if secs > 0.0 {
            self.rows_inserted as f64 / secs
        } else {
            0.0
        }
    }
}

/// Outcome of a complete fill run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillReport {
    pub users: PhaseMetrics,
    /// Max user id observed after the user phase.
    pub user_max_id: i64,
    pub messages: PhaseMetrics,
}
