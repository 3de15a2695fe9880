use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::domain::ports::MazeMetrics;

/// In-process counters for maze creation outcomes.
#[derive(Debug, Clone, Default)]
pub struct CountingMetrics {
    successes: Arc<AtomicU64>,
    failures: Arc<AtomicU64>,
}

impl CountingMetrics {
    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

impl MazeMetrics for CountingMetrics {
    async fn record_maze_creation_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            successes = self.successes(),
            failures = self.failures(),
            "maze creation succeeded"
        );
    }

    async fn record_maze_creation_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            successes = self.successes(),
            failures = self.failures(),
            "maze creation failed"
        );
    }
}
