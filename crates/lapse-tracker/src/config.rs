//! Tracker configuration.

use serde::{Deserialize, Serialize};

/// Settings for a [`BoundedOperationTracker`](crate::BoundedOperationTracker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Label used in logs and snapshots.
    pub name: String,
    /// Maximum number of finished operations kept for statistics.
    pub capacity: usize,
    /// Number of operations the batch will produce.
    pub total_expected: usize,
}

impl TrackerConfig {
    /// Default window capacity.
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a configuration with the default capacity.
    #[must_use]
    pub fn new(name: impl Into<String>, total_expected: usize) -> Self {
        Self {
            name: name.into(),
            capacity: Self::DEFAULT_CAPACITY,
            total_expected,
        }
    }

    /// Sets the window capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new("tracker", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = TrackerConfig::new("ingest", 1_000).with_capacity(25);

        assert_eq!(config.name, "ingest");
        assert_eq!(config.capacity, 25);
        assert_eq!(config.total_expected, 1_000);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"total_expected": 5}"#).unwrap();

        assert_eq!(config.name, "tracker");
        assert_eq!(config.capacity, TrackerConfig::DEFAULT_CAPACITY);
        assert_eq!(config.total_expected, 5);
    }
}
