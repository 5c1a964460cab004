//! Bounded operation tracking for the lapse timing library.
//!
//! This crate provides a concurrent tracker for batches of repeated work:
//!
//! - [`BoundedOperationTracker`] - Sliding window of finished operations with ETA
//! - [`TrackerConfig`] - Name, window capacity and expected total
//! - [`TrackerState`] - Whether the tracker still accepts operations
//! - [`TrackerSnapshot`] - Consistent view of counters, window stats and ETA

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lapse/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod snapshot;
mod tracker;

pub use config::TrackerConfig;
pub use snapshot::{TrackerSnapshot, TrackerState};
pub use tracker::BoundedOperationTracker;
