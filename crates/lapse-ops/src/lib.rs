//! Operation collections for the lapse timing library.
//!
//! - [`OperationSet`] - Insertion-ordered operations with aggregate queries
//! - [`OperationStats`] - Summary of a set's durations and span

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lapse/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod set;
mod stats;

pub use set::OperationSet;
pub use stats::OperationStats;
