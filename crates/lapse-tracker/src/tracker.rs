//! Bounded, thread-safe operation tracking.
//!
//! A [`BoundedOperationTracker`] follows a batch of `total_expected`
//! operations. Finished operations are fed in through
//! [`accept`](BoundedOperationTracker::accept) from any number of threads and
//! land in a FIFO window of at most `capacity` entries; the window's average
//! duration drives the remaining-time projection.
//!
//! All state sits behind one [`RwLock`]: `accept` takes it exclusively, the
//! statistics queries share it, so monitors can poll while workers submit.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, TimeDelta, Utc};
use lapse_ops::OperationSet;
use lapse_types::{Operation, Result, TrackerError};
use tracing::{debug, trace};

use crate::{TrackerConfig, TrackerSnapshot, TrackerState};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// Window and counters, always mutated together.
#[derive(Debug)]
struct Window {
    operations: OperationSet,
    completed: usize,
    remaining: usize,
}

impl Window {
    fn estimated_time_remaining(&self) -> Option<TimeDelta> {
        let average = self.operations.average()?;
        scale(average, self.remaining)
    }
}

/// `delta * factor`, computed in whole nanoseconds so large counts don't
/// lose precision. `None` only when the product leaves the [`TimeDelta`] range.
fn scale(delta: TimeDelta, factor: usize) -> Option<TimeDelta> {
    let nanos =
        i128::from(delta.num_seconds()) * NANOS_PER_SEC + i128::from(delta.subsec_nanos());
    let total = nanos.checked_mul(i128::try_from(factor).ok()?)?;
    let secs = i64::try_from(total / NANOS_PER_SEC).ok()?;
    let subsec = i64::try_from(total % NANOS_PER_SEC).ok()?;
    TimeDelta::try_seconds(secs)?.checked_add(&TimeDelta::nanoseconds(subsec))
}

/// Fixed-capacity tracker of finished operations from a batch of known size.
///
/// Cloning yields another handle to the same tracker.
///
/// # Invariants
///
/// - `completed + remaining == total_expected`
/// - the window never holds more than `capacity` operations
/// - running operations are never accepted
/// - nothing is accepted once `remaining` reaches zero
#[derive(Debug, Clone)]
pub struct BoundedOperationTracker {
    name: Arc<str>,
    capacity: usize,
    total_expected: usize,
    window: Arc<RwLock<Window>>,
}

impl BoundedOperationTracker {
    /// Creates a tracker retaining up to `capacity` of `total_expected` operations.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ZeroCapacity`] if `capacity` is zero.
    pub fn new(name: impl Into<String>, capacity: usize, total_expected: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TrackerError::ZeroCapacity);
        }
        let name: String = name.into();
        debug!(tracker = %name, capacity, total_expected, "created operation tracker");

        Ok(Self {
            name: name.into(),
            capacity,
            total_expected,
            window: Arc::new(RwLock::new(Window {
                operations: OperationSet::with_capacity(capacity),
                completed: 0,
                remaining: total_expected,
            })),
        })
    }

    /// Creates a tracker from a [`TrackerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ZeroCapacity`] if the configured capacity is zero.
    pub fn from_config(config: TrackerConfig) -> Result<Self> {
        Self::new(config.name, config.capacity, config.total_expected)
    }

    // The window is only written after every check has passed, so a panic
    // while holding the lock cannot leave it half-updated.
    fn read(&self) -> RwLockReadGuard<'_, Window> {
        self.window.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Window> {
        self.window.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a finished operation.
    ///
    /// When the window is full the oldest operation is evicted.
    ///
    /// # Errors
    ///
    /// - [`TrackerError::OperationStillRunning`] if `op` lacks a start or end.
    /// - [`TrackerError::CapacityExhausted`] if all expected operations were
    ///   already accepted.
    ///
    /// The tracker is unchanged on error.
    pub fn accept(&self, op: Operation) -> Result<()> {
        if op.is_running() {
            return Err(TrackerError::OperationStillRunning { name: op.name });
        }

        let mut window = self.write();
        if window.remaining == 0 {
            return Err(TrackerError::CapacityExhausted {
                total: self.total_expected,
            });
        }

        window.operations.push(op);
        if window.operations.len() > self.capacity {
            if let Some(evicted) = window.operations.pop_front() {
                trace!(tracker = %self.name, evicted = %evicted.name, "evicted oldest operation");
            }
        }
        window.completed += 1;
        window.remaining -= 1;

        if window.remaining == 0 {
            debug!(tracker = %self.name, total = self.total_expected, "all operations complete");
        }
        Ok(())
    }

    /// Projected time for the remaining operations: the window's average
    /// duration times the remaining count.
    ///
    /// Returns `None` when the window is empty (no data to project from) or
    /// the product overflows [`TimeDelta`].
    #[must_use]
    pub fn estimated_time_remaining(&self) -> Option<TimeDelta> {
        self.read().estimated_time_remaining()
    }

    /// Now plus [`estimated_time_remaining`](Self::estimated_time_remaining).
    #[must_use]
    pub fn estimated_completion_time(&self) -> Option<DateTime<Utc>> {
        let remaining = self.estimated_time_remaining()?;
        Utc::now().checked_add_signed(remaining)
    }

    /// Fraction of the batch **still remaining**, `remaining / total_expected`.
    ///
    /// Despite the name this is not the completed fraction: it starts at 1.0
    /// and falls to 0.0 as operations are accepted. The computation is kept
    /// for compatibility with existing consumers; use
    /// [`completed_fraction`](Self::completed_fraction) for the fraction done.
    ///
    /// Returns 0.0 when `total_expected` is zero.
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        fraction(self.read().remaining, self.total_expected, 0.0)
    }

    /// Fraction of the batch accepted so far, `completed / total_expected`.
    ///
    /// Returns 1.0 when `total_expected` is zero.
    #[must_use]
    pub fn completed_fraction(&self) -> f64 {
        fraction(self.read().completed, self.total_expected, 1.0)
    }

    /// Tracker label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum number of retained operations.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of operations the batch will produce.
    #[must_use]
    pub const fn total_expected(&self) -> usize {
        self.total_expected
    }

    /// Operations accepted so far.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.read().completed
    }

    /// Operations not yet accepted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.read().remaining
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        TrackerState::from_remaining(self.read().remaining)
    }

    /// Returns true once every expected operation has been accepted.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state() == TrackerState::Exhausted
    }

    /// Copy of the retained window, oldest first.
    #[must_use]
    pub fn operations(&self) -> OperationSet {
        self.read().operations.clone()
    }

    /// Reads counters, window statistics and projections under one lock.
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        let window = self.read();
        let taken_at = Utc::now();
        let estimated_time_remaining = window.estimated_time_remaining();

        TrackerSnapshot {
            name: self.name.to_string(),
            capacity: self.capacity,
            total_expected: self.total_expected,
            completed: window.completed,
            remaining: window.remaining,
            state: TrackerState::from_remaining(window.remaining),
            window: window.operations.stats(),
            estimated_time_remaining,
            estimated_completion_time: estimated_time_remaining
                .and_then(|remaining| taken_at.checked_add_signed(remaining)),
            percent_complete: fraction(window.remaining, self.total_expected, 0.0),
            taken_at,
        }
    }
}

/// `part / total`, or `empty` when `total` is zero.
fn fraction(part: usize, total: usize, empty: f64) -> f64 {
    if total == 0 {
        empty
    } else {
        part as f64 / total as f64
    }
}
