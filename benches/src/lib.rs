//! Benchmark utilities for lapse.

use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, Utc};
use lapse_lib::{BoundedOperationTracker, Operation, TimeRange};

/// Result of one contention run.
#[derive(Debug, Clone)]
pub struct ContentionResult {
    /// Number of submitting threads.
    pub threads: usize,
    /// Operations accepted in total.
    pub operations: usize,
    /// Wall time for all threads to finish.
    pub duration: Duration,
}

impl ContentionResult {
    /// Accepted operations per second.
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.operations as f64 / secs
        } else {
            0.0
        }
    }
}

/// Fixed reference instant so fixtures are reproducible.
pub fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
}

/// Builds `count` finished operations with durations cycling through 1..=100ms.
pub fn finished_ops(count: usize) -> Vec<Operation> {
    let start = epoch();
    (0..count)
        .map(|i| {
            let millis = (i % 100) as i64 + 1;
            Operation::with_runtime(
                format!("op{i}"),
                TimeRange::new(start, start + TimeDelta::milliseconds(millis)),
            )
        })
        .collect()
}

/// Accepts `per_thread` operations from each of `threads` threads into one tracker.
pub fn run_contention(threads: usize, per_thread: usize, capacity: usize) -> ContentionResult {
    let total = threads * per_thread;
    let tracker = match BoundedOperationTracker::new("contention", capacity.max(1), total) {
        Ok(tracker) => tracker,
        Err(err) => panic!("invalid benchmark configuration: {err}"),
    };
    let batches: Vec<Vec<Operation>> = (0..threads).map(|_| finished_ops(per_thread)).collect();

    let started = Instant::now();
    thread::scope(|scope| {
        for batch in batches {
            let tracker = &tracker;
            scope.spawn(move || {
                for op in batch {
                    let _ = tracker.accept(op);
                }
            });
        }
    });

    ContentionResult {
        threads,
        operations: tracker.completed(),
        duration: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_ops() {
        let ops = finished_ops(150);
        assert_eq!(ops.len(), 150);
        assert!(ops.iter().all(|op| !op.is_running()));
        assert_eq!(ops[99].duration(), TimeDelta::milliseconds(100));
        assert_eq!(ops[100].duration(), TimeDelta::milliseconds(1));
    }

    #[test]
    fn test_run_contention_accepts_everything() {
        let result = run_contention(4, 250, 64);
        assert_eq!(result.threads, 4);
        assert_eq!(result.operations, 1_000);
    }
}
