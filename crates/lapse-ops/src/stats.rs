//! Summary statistics over an operation set.

use chrono::TimeDelta;
use lapse_types::TimeRange;
use serde::{Deserialize, Serialize};

/// Count, mean, extremes and overall span of a set of operations.
///
/// Durations serialize as fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStats {
    /// Number of operations summarized.
    pub count: usize,
    /// Mean signed duration.
    #[serde(with = "lapse_types::serde_delta")]
    pub average: TimeDelta,
    /// Smallest signed duration.
    #[serde(with = "lapse_types::serde_delta")]
    pub shortest: TimeDelta,
    /// Largest signed duration.
    #[serde(with = "lapse_types::serde_delta")]
    pub longest: TimeDelta,
    /// Earliest start to latest end.
    pub span: TimeRange,
}

impl std::fmt::Display for OperationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, avg {}ms, min {}ms, max {}ms",
            self.count,
            self.average.num_milliseconds(),
            self.shortest.num_milliseconds(),
            self.longest.num_milliseconds(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let stats = OperationStats {
            count: 3,
            average: TimeDelta::milliseconds(12),
            shortest: TimeDelta::milliseconds(2),
            longest: TimeDelta::milliseconds(30),
            span: TimeRange::unbounded(),
        };

        assert_eq!(stats.to_string(), "3 ops, avg 12ms, min 2ms, max 30ms");
    }

    #[test]
    fn test_json_durations_in_seconds() {
        let stats = OperationStats {
            count: 1,
            average: TimeDelta::milliseconds(500),
            shortest: TimeDelta::milliseconds(500),
            longest: TimeDelta::milliseconds(500),
            span: TimeRange::unbounded(),
        };
        let json = serde_json::to_value(stats).unwrap();

        assert_eq!(json["average"], 0.5);
        assert_eq!(json["span"]["start"], serde_json::Value::Null);
    }
}
