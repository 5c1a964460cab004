//! Named units of timed work.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::TimeRange;

/// A named unit of work and the time range it ran over.
///
/// Names are labels only and need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Label for the operation.
    pub name: String,
    /// When the operation started and ended.
    pub runtime: TimeRange,
}

impl Operation {
    /// Creates an operation that has neither started nor ended.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime: TimeRange::unbounded(),
        }
    }

    /// Creates an operation with an explicit runtime.
    #[must_use]
    pub fn with_runtime(name: impl Into<String>, runtime: TimeRange) -> Self {
        Self {
            name: name.into(),
            runtime,
        }
    }

    /// Creates and starts an operation in one step.
    #[must_use]
    pub fn started(name: impl Into<String>) -> Self {
        let mut op = Self::new(name);
        op.start();
        op
    }

    /// Stamps the current instant as the start, replacing any earlier start.
    pub fn start(&mut self) {
        self.runtime.start = Some(Utc::now());
    }

    /// Stamps the current instant as the end, replacing any earlier end.
    pub fn end(&mut self) {
        self.runtime.end = Some(Utc::now());
    }

    /// Returns true while the start or end is still unset.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.runtime.is_unbounded()
    }

    /// Signed duration of the runtime.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.runtime.duration()
    }

    /// Start instant, if stamped.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.runtime.start
    }

    /// End instant, if stamped.
    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.runtime.end
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_operation_is_running() {
        let op = Operation::new("load");

        assert_eq!(op.name, "load");
        assert!(op.is_running());
        assert_eq!(op.runtime, TimeRange::unbounded());
    }

    #[test]
    fn test_start_then_end() {
        let mut op = Operation::new("load");
        op.start();
        assert!(op.is_running());

        op.end();
        assert!(!op.is_running());
        assert!(op.duration() >= TimeDelta::zero());
        assert!(op.started_at() <= op.ended_at());
    }

    #[test]
    fn test_end_without_start_is_running() {
        let mut op = Operation::new("orphan");
        op.end();

        assert!(op.is_running());
    }

    #[test]
    fn test_restart_overwrites_start() {
        let past = DateTime::from_timestamp(1_000, 0).unwrap();
        let mut op = Operation::with_runtime("retry", TimeRange::starting_at(past));

        op.start();

        assert!(op.started_at().is_some_and(|start| start > past));
    }

    #[test]
    fn test_started_helper() {
        let op = Operation::started("fetch");
        assert!(op.started_at().is_some());
        assert!(op.ended_at().is_none());
    }
}
