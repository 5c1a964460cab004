//! Destinations for log lines.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// A destination for formatted log lines.
///
/// Sinks are shared across threads, so implementations synchronize internally.
pub trait LogSink: Send + Sync {
    /// Writes one line. The line has no trailing newline.
    fn log(&self, line: &str);
}

/// Forwards lines to `tracing` as `INFO` events under the `lapse` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!(target: "lapse", "{line}");
    }
}

/// Writes lines to any [`Write`] implementation, one per line.
#[derive(Debug)]
pub struct WriterSink<W> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Creates a sink writing bare lines.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_prefix(writer, "")
    }

    /// Creates a sink that writes `prefix` before every line.
    #[must_use]
    pub fn with_prefix(writer: W, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn log(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(writer, "{}{line}", self.prefix).and_then(|()| writer.flush()) {
            tracing::warn!(error = %err, "failed to write log line");
        }
    }
}
