//! Log sink trait and implementations
//!
//! A `LogSink` is the output capability of the recorder: it transports one
//! serialized line to a named stream at a given level. Swapping sinks
//! changes the destination (tracing targets, in-memory capture, a custom
//! shipper) without touching recording logic.

use crate::correlation;
use crate::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Named streams the recorder routes records to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStream {
    /// Security events, written at warn level
    Security,
    /// Performance metrics, written at info level
    Performance,
    /// Application events and recorder diagnostics
    General,
}

impl LogStream {
    /// Stable stream name, also used as the tracing target
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStream::Security => "security",
            LogStream::Performance => "performance",
            LogStream::General => "general",
        }
    }
}

impl fmt::Display for LogStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level a line is written at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core trait for log transports
///
/// Implementations must be cheap and non-blocking from the caller's
/// perspective; the recorder assumes buffering happens at the sink level.
pub trait LogSink: Send + Sync {
    /// Write one serialized line to a stream at the given level
    fn write(&self, stream: LogStream, level: LogLevel, line: &str) -> Result<()>;

    /// Sink name (e.g., "tracing", "memory")
    fn name(&self) -> &str;
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn write(&self, stream: LogStream, level: LogLevel, line: &str) -> Result<()> {
        (**self).write(stream, level, line)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Sink that emits through the `tracing` ecosystem
///
/// Each stream maps to a constant tracing target of the same name, so
/// subscribers can filter per stream (`security=warn,performance=info`).
/// The ambient correlation id, when one is set, is attached as a field on
/// the emitted event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, stream: LogStream, level: LogLevel, line: &str) -> Result<()> {
        let correlation_id = correlation::get(correlation::CORRELATION_ID);
        let correlation_id = correlation_id.as_deref();

        // Target must be a literal in the tracing macros, hence the spread.
        match stream {
            LogStream::Security => match level {
                LogLevel::Info => tracing::info!(target: "security", correlation_id, "{line}"),
                LogLevel::Warn => tracing::warn!(target: "security", correlation_id, "{line}"),
                LogLevel::Error => tracing::error!(target: "security", correlation_id, "{line}"),
            },
            LogStream::Performance => match level {
                LogLevel::Info => tracing::info!(target: "performance", correlation_id, "{line}"),
                LogLevel::Warn => tracing::warn!(target: "performance", correlation_id, "{line}"),
                LogLevel::Error => tracing::error!(target: "performance", correlation_id, "{line}"),
            },
            LogStream::General => match level {
                LogLevel::Info => tracing::info!(target: "general", correlation_id, "{line}"),
                LogLevel::Warn => tracing::warn!(target: "general", correlation_id, "{line}"),
                LogLevel::Error => tracing::error!(target: "general", correlation_id, "{line}"),
            },
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

/// One captured line
#[derive(Debug, Clone)]
pub struct SinkEntry {
    pub stream: LogStream,
    pub level: LogLevel,
    pub line: String,
}

/// In-memory sink for development and testing
///
/// Stores every written line in a `Vec` behind an `RwLock` with accessors
/// for inspecting what the recorder produced.
#[derive(Default)]
pub struct MemorySink {
    entries: RwLock<Vec<SinkEntry>>,
}

impl MemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured entries, oldest first
    pub fn entries(&self) -> Result<Vec<SinkEntry>> {
        let entries = self.entries.read().map_err(|e| {
            MonitorError::Config(format!("Memory sink lock poisoned: {}", e))
        })?;
        Ok(entries.clone())
    }

    /// Snapshot of entries captured on one stream
    pub fn entries_for(&self, stream: LogStream) -> Result<Vec<SinkEntry>> {
        let entries = self.entries.read().map_err(|e| {
            MonitorError::Config(format!("Memory sink lock poisoned: {}", e))
        })?;
        Ok(entries.iter().filter(|e| e.stream == stream).cloned().collect())
    }

    /// Number of captured entries
    pub fn count(&self) -> Result<usize> {
        let entries = self.entries.read().map_err(|e| {
            MonitorError::Config(format!("Memory sink lock poisoned: {}", e))
        })?;
        Ok(entries.len())
    }

    /// Discard all captured entries
    pub fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().map_err(|e| {
            MonitorError::Config(format!("Memory sink lock poisoned: {}", e))
        })?;
        entries.clear();
        Ok(())
    }
}

impl LogSink for MemorySink {
    fn write(&self, stream: LogStream, level: LogLevel, line: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|e| {
            MonitorError::Config(format!("Memory sink lock poisoned: {}", e))
        })?;
        entries.push(SinkEntry {
            stream,
            level,
            line: line.to_string(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_names() {
        assert_eq!(LogStream::Security.as_str(), "security");
        assert_eq!(LogStream::Performance.as_str(), "performance");
        assert_eq!(LogStream::General.as_str(), "general");
        assert_eq!(LogStream::Security.to_string(), "security");
    }

    #[test]
    fn test_memory_sink_capture_and_filter() {
        let sink = MemorySink::new();

        sink.write(LogStream::Security, LogLevel::Warn, "sec-1").unwrap();
        sink.write(LogStream::Performance, LogLevel::Info, "perf-1").unwrap();
        sink.write(LogStream::Security, LogLevel::Warn, "sec-2").unwrap();

        assert_eq!(sink.count().unwrap(), 3);

        let security = sink.entries_for(LogStream::Security).unwrap();
        assert_eq!(security.len(), 2);
        assert_eq!(security[0].line, "sec-1");
        assert_eq!(security[1].line, "sec-2");
        assert_eq!(security[0].level, LogLevel::Warn);

        assert_eq!(sink.entries_for(LogStream::General).unwrap().len(), 0);
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.write(LogStream::General, LogLevel::Info, "app").unwrap();
        assert_eq!(sink.count().unwrap(), 1);

        sink.clear().unwrap();
        assert_eq!(sink.count().unwrap(), 0);
        assert!(sink.entries().unwrap().is_empty());
    }

    #[test]
    fn test_arc_sink_delegates() {
        let sink = Arc::new(MemorySink::new());
        let as_trait: &dyn LogSink = &sink;

        as_trait
            .write(LogStream::General, LogLevel::Error, "via arc")
            .unwrap();

        assert_eq!(sink.count().unwrap(), 1);
        assert_eq!(as_trait.name(), "memory");
    }

    #[test]
    fn test_tracing_sink_writes_without_subscriber() {
        // No subscriber installed: events are discarded but the write
        // must still succeed.
        let sink = TracingSink;
        for stream in [LogStream::Security, LogStream::Performance, LogStream::General] {
            for level in [LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
                sink.write(stream, level, "{\"k\":1}").unwrap();
            }
        }
        assert_eq!(sink.name(), "tracing");
    }
}
