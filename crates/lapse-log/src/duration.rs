//! Elapsed-time logging.

use std::time::Instant;

use lapse_types::Operation;

use crate::{LogSink, TracingSink, format_delta, format_duration};

/// Writes `line` to every sink, or to [`TracingSink`] when none are given.
fn emit(line: &str, sinks: &[&dyn LogSink]) {
    if sinks.is_empty() {
        TracingSink.log(line);
        return;
    }
    for sink in sinks {
        sink.log(line);
    }
}

/// Logs `"<message>: <elapsed>"` where elapsed is the time since `start`.
///
/// With an empty `sinks` slice the line is sent to [`TracingSink`].
pub fn log_duration(message: &str, start: Instant, sinks: &[&dyn LogSink]) {
    let line = format!("{message}: {}", format_duration(start.elapsed()));
    emit(&line, sinks);
}

/// Logs `"<name>: <duration>"` for an operation.
///
/// Running operations are logged as `"<name>: running"`.
pub fn log_operation(op: &Operation, sinks: &[&dyn LogSink]) {
    let line = if op.is_running() {
        format!("{}: running", op.name)
    } else {
        format!("{}: {}", op.name, format_delta(op.duration()))
    };
    emit(&line, sinks);
}

/// Logs how long it lived when dropped.
///
/// ```
/// use lapse_log::{DurationGuard, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// {
///     let _timer = DurationGuard::new("rebuild index", &[&sink]);
///     // work
/// }
/// let text = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(text.starts_with("rebuild index: "));
/// ```
#[must_use = "the duration is logged when the guard is dropped"]
pub struct DurationGuard<'a> {
    message: String,
    start: Instant,
    sinks: Vec<&'a dyn LogSink>,
}

impl<'a> DurationGuard<'a> {
    /// Starts timing now.
    pub fn new(message: impl Into<String>, sinks: &[&'a dyn LogSink]) -> Self {
        Self {
            message: message.into(),
            start: Instant::now(),
            sinks: sinks.to_vec(),
        }
    }

    /// Instant the guard was created.
    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }
}

impl std::fmt::Debug for DurationGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurationGuard")
            .field("message", &self.message)
            .field("start", &self.start)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Drop for DurationGuard<'_> {
    fn drop(&mut self) {
        log_duration(&self.message, self.start, &self.sinks);
    }
}
