//! Elapsed-time logging for the lapse timing library.
//!
//! - [`log_duration`] - Log the time since an instant to the given sinks
//! - [`log_operation`] - Log a finished operation's duration
//! - [`DurationGuard`] - Log the lifetime of a scope when dropped
//! - [`LogSink`] - Destination for log lines, with [`TracingSink`] and [`WriterSink`]
//! - [`format_duration`] - Human-readable durations

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/lapse/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod duration;
mod format;
mod sink;

pub use duration::{DurationGuard, log_duration, log_operation};
pub use format::{format_delta, format_duration};
pub use sink::{LogSink, TracingSink, WriterSink};
