//! Error types for lapse.

use thiserror::Error;

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors returned by the bounded operation tracker.
///
/// Every variant leaves the tracker untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The submitted operation is missing its start or end.
    #[error("cannot accept running operation '{name}'")]
    OperationStillRunning {
        /// Name of the rejected operation.
        name: String,
    },

    /// Every expected operation has already been accepted.
    #[error("cannot accept another operation, all {total} operations complete")]
    CapacityExhausted {
        /// Total number of operations the tracker expected.
        total: usize,
    },

    /// The tracker was configured to retain no operations.
    #[error("tracker capacity must be greater than zero")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TrackerError::OperationStillRunning {
            name: "upload".to_string(),
        };
        assert_eq!(err.to_string(), "cannot accept running operation 'upload'");

        let err = TrackerError::CapacityExhausted { total: 10 };
        assert!(err.to_string().contains("all 10 operations complete"));
    }
}
