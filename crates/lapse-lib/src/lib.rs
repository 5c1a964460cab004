//! Operation timing, aggregation and ETA projection.
//!
//! This is a facade crate that re-exports functionality from the lapse
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use lapse_lib::prelude::*;
//! use std::thread;
//!
//! let tracker = BoundedOperationTracker::new("resize", 8, 32)?;
//!
//! thread::scope(|scope| {
//!     for worker in 0..4 {
//!         let tracker = &tracker;
//!         scope.spawn(move || {
//!             for i in 0..8 {
//!                 let mut op = Operation::new(format!("w{worker}-{i}"));
//!                 op.start();
//!                 op.end();
//!                 tracker.accept(op).unwrap();
//!             }
//!         });
//!     }
//! });
//!
//! assert!(tracker.is_exhausted());
//! assert_eq!(tracker.operations().len(), 8);
//! # Ok::<(), TrackerError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lapse/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use lapse_types::*;

// Re-export operation collections
pub use lapse_ops::{OperationSet, OperationStats};

// Re-export the bounded tracker
#[cfg(feature = "tracker")]
pub use lapse_tracker::{BoundedOperationTracker, TrackerConfig, TrackerSnapshot, TrackerState};

// Re-export duration logging
#[cfg(feature = "log")]
pub use lapse_log::{
    DurationGuard, LogSink, TracingSink, WriterSink, format_delta, format_duration,
    log_duration, log_operation,
};

/// Prelude module for convenient imports.
///
/// ```
/// use lapse_lib::prelude::*;
/// ```
pub mod prelude {
    pub use lapse_types::{Direction, Operation, Result, TimeRange, TrackerError};

    pub use lapse_ops::{OperationSet, OperationStats};

    #[cfg(feature = "tracker")]
    pub use lapse_tracker::{BoundedOperationTracker, TrackerConfig, TrackerSnapshot, TrackerState};

    #[cfg(feature = "log")]
    pub use lapse_log::{DurationGuard, LogSink, TracingSink, WriterSink, log_duration};
}
