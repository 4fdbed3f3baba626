//! Progress reporting for row generation.

use tracing::info;

/// Number of progress events emitted over a full phase.
const PROGRESS_STEPS: u64 = 10;

/// Logs generation progress at every 10% of the expected total.
pub struct ProgressLog {
    label: &'static str,
    total: u64,
    done: u64,
    next_step: u64,
}

impl ProgressLog {
    pub fn new(label: &'static str, total: u64) -> Self {
        Self {
            label,
            total,
            done: 0,
            next_step: 1,
        }
    }

    /// Record one generated row.
    pub fn tick(&mut self) {
        self.done += 1;

        while self.next_step <= PROGRESS_STEPS
            && self.done * PROGRESS_STEPS >= self.total * self.next_step
        {
            info!(
                "{}: {}/{} ({}%)",
                self.label,
                self.done,
                self.total,
                self.next_step * 100 / PROGRESS_STEPS
            );
            self.next_step += 1;
        }
    }

    pub fn done(&self) -> u64 {
        self.done
    }

    /// Percentage already reported.
    pub fn reported_percent(&self) -> u64 {
        (self.next_step - 1) * 100 / PROGRESS_STEPS
    }
}
