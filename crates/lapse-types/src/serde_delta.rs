//! Serde adapters for [`TimeDelta`] values.
//!
//! `chrono` does not implement serde for [`TimeDelta`], so durations are
//! written as signed fractional seconds:
//!
//! ```
//! use chrono::TimeDelta;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Sample {
//!     #[serde(with = "lapse_types::serde_delta")]
//!     elapsed: TimeDelta,
//! }
//! ```

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serializer, de};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

fn to_secs(delta: &TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / NANOS_PER_SEC
}

fn from_secs<E: de::Error>(secs: f64) -> Result<TimeDelta, E> {
    let nanos = (secs * NANOS_PER_SEC).round();
    // `i64::MAX as f64` rounds up to 2^63, hence the exclusive upper bound.
    if !nanos.is_finite() || nanos < i64::MIN as f64 || nanos >= i64::MAX as f64 {
        return Err(E::custom(format_args!(
            "duration of {secs} seconds is out of range"
        )));
    }
    Ok(TimeDelta::nanoseconds(nanos as i64))
}

/// Serializes a [`TimeDelta`] as fractional seconds.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize<S: Serializer>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(to_secs(delta))
}

/// Deserializes a [`TimeDelta`] from fractional seconds.
///
/// # Errors
///
/// Returns the deserializer's error, or a custom error if the value is not
/// finite or does not fit in an `i64` count of nanoseconds.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
    from_secs(f64::deserialize(deserializer)?)
}

/// Adapter for `Option<TimeDelta>`, written as seconds or `null`.
pub mod option {
    use super::{from_secs, to_secs};
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional [`TimeDelta`].
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn serialize<S: Serializer>(
        delta: &Option<TimeDelta>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match delta {
            Some(delta) => serializer.serialize_some(&to_secs(delta)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional [`TimeDelta`].
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error, or a custom error for a non-finite
    /// or out-of-range value.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeDelta>, D::Error> {
        Option::<f64>::deserialize(deserializer)?
            .map(from_secs)
            .transpose()
    }
}
