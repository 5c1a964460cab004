//! Point-in-time views of a tracker.

use chrono::{DateTime, TimeDelta, Utc};
use lapse_ops::OperationStats;
use serde::{Deserialize, Serialize};

/// Lifecycle of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerState {
    /// Operations are still expected.
    Active,
    /// Every expected operation has been accepted. Terminal.
    Exhausted,
}

impl TrackerState {
    /// Returns the state as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Exhausted => "exhausted",
        }
    }

    pub(crate) const fn from_remaining(remaining: usize) -> Self {
        if remaining == 0 {
            Self::Exhausted
        } else {
            Self::Active
        }
    }
}

impl std::fmt::Display for TrackerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counters, window statistics and projections read under a single lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// Tracker label.
    pub name: String,
    /// Window capacity.
    pub capacity: usize,
    /// Operations the batch will produce.
    pub total_expected: usize,
    /// Operations accepted so far.
    pub completed: usize,
    /// Operations not yet accepted.
    pub remaining: usize,
    /// Lifecycle state.
    pub state: TrackerState,
    /// Statistics over the retained window, `None` when it is empty.
    pub window: Option<OperationStats>,
    /// Projected time until the last operation finishes.
    #[serde(with = "lapse_types::serde_delta::option")]
    pub estimated_time_remaining: Option<TimeDelta>,
    /// Projected instant the last operation finishes.
    pub estimated_completion_time: Option<DateTime<Utc>>,
    /// Same value as [`BoundedOperationTracker::percent_complete`](crate::BoundedOperationTracker::percent_complete).
    pub percent_complete: f64,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
}
