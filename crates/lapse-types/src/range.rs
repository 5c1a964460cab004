//! Time ranges between two instants.

use std::cmp::Ordering;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Ordering of a range's start relative to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Start is after end.
    Descending,
    /// Start and end are the same instant.
    Equal,
    /// Start is before end.
    Ascending,
}

impl Direction {
    /// Returns the direction as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Descending => "descending",
            Self::Equal => "equal",
            Self::Ascending => "ascending",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An interval between two instants.
///
/// Either endpoint may be unset (`None`). An unset endpoint compares before
/// every set instant and behaves as [`DateTime::<Utc>::MIN_UTC`] in duration
/// arithmetic, so every method is total.
///
/// The endpoints are never reordered: a range whose start is after its end is
/// [`Direction::Descending`] and keeps its raw bounds for containment checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start instant, `None` when not yet stamped.
    pub start: Option<DateTime<Utc>>,
    /// End instant, `None` when not yet stamped.
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// Creates a range with both endpoints set.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a range with neither endpoint set.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Creates a range with only the start set.
    #[must_use]
    pub const fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Returns true when either endpoint is unset.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// Returns whether the range is ascending, descending or empty.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self.start.cmp(&self.end) {
            Ordering::Less => Direction::Ascending,
            Ordering::Equal => Direction::Equal,
            Ordering::Greater => Direction::Descending,
        }
    }

    /// Returns true if `instant` lies within the range, endpoints included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.contains_exclusive(instant)
            || self.start == Some(instant)
            || self.end == Some(instant)
    }

    /// Returns true if `instant` lies strictly after start and strictly before end.
    ///
    /// Never true for a descending range.
    #[must_use]
    pub fn contains_exclusive(&self, instant: DateTime<Utc>) -> bool {
        let instant = Some(instant);
        instant > self.start && instant < self.end
    }

    /// Returns `end - start`, negative when the range is descending.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        endpoint(self.end) - endpoint(self.start)
    }

    /// Returns the absolute distance between start and end.
    #[must_use]
    pub fn duration_magnitude(&self) -> Duration {
        let magnitude = match self.direction() {
            Direction::Ascending => endpoint(self.end) - endpoint(self.start),
            Direction::Descending => endpoint(self.start) - endpoint(self.end),
            Direction::Equal => return Duration::ZERO,
        };
        magnitude.to_std().unwrap_or(Duration::ZERO)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, "{start} to {end}"),
            (Some(start), None) => write!(f, "{start} to -"),
            (None, Some(end)) => write!(f, "- to {end}"),
            (None, None) => write!(f, "- to -"),
        }
    }
}

/// Resolves an optional endpoint to an instant for arithmetic.
const fn endpoint(instant: Option<DateTime<Utc>>) -> DateTime<Utc> {
    match instant {
        Some(instant) => instant,
        None => DateTime::<Utc>::MIN_UTC,
    }
}
