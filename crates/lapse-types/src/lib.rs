//! Core types for the lapse timing library.
//!
//! This crate provides the value types shared by the other lapse crates:
//!
//! - [`TimeRange`] - Interval between two optional instants
//! - [`Direction`] - Whether a range ascends, descends or is empty
//! - [`Operation`] - A named unit of work with its runtime
//! - [`TrackerError`] - Errors returned when feeding a tracker
//! - [`serde_delta`] - Serde adapters for `chrono::TimeDelta`

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lapse/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod operation;
mod range;
pub mod serde_delta;

pub use error::{Result, TrackerError};
pub use operation::Operation;
pub use range::{Direction, TimeRange};
