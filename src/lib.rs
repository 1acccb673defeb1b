//! # opsmon
//!
//! Structured recording of security, performance, and application events
//! with pluggable sinks and alerting.
//!
//! ## Overview
//!
//! `opsmon` provides an `EventRecorder`: a synchronous, best-effort facade
//! that service code calls to record discrete operational events. Each
//! record is stamped with a timestamp and source tag, serialized to one
//! JSON line, and routed to a named log stream. Critical security events
//! and slow operations additionally trigger an injectable alert handler.
//! Recording never fails its caller: every internal error is contained
//! and reported on the general stream.
//!
//! ## Quick Start
//!
//! ```rust
//! use opsmon::{EventRecorder, LogStream, MemoryAlertHandler, MemorySink, MonitorConfig};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let alerts = Arc::new(MemoryAlertHandler::default());
//! let recorder = EventRecorder::new(MonitorConfig::default(), sink.clone(), alerts.clone());
//!
//! recorder.record_security_event("UNAUTHORIZED_ACCESS", "user-7", "token replay");
//!
//! assert_eq!(sink.entries_for(LogStream::Security).unwrap().len(), 1);
//! assert_eq!(alerts.security_alerts().unwrap().len(), 1);
//! ```
//!
//! Production deployments use `EventRecorder::with_defaults`, which routes
//! each stream to a `tracing` target of the same name.
//!
//! ## Architecture
//!
//! - **LogSink** trait: output capability (`TracingSink` for production,
//!   `MemorySink` for tests)
//! - **AlertHandler** trait: escalation capability (`LogAlertHandler` by
//!   default; wire paging or a message bus by implementing it)
//! - **EventRecorder**: the facade with the three record operations and
//!   the timed-operation helper
//! - **correlation**: per-call ambient fields, released by an RAII scope

pub mod alert;
pub mod config;
pub mod correlation;
pub mod error;
pub mod recorder;
pub mod sink;
pub mod types;

// Re-export core types
pub use alert::{AlertHandler, LogAlertHandler, MemoryAlertHandler};
pub use config::{
    MonitorConfig, DEFAULT_CRITICAL_EVENT_TYPES, DEFAULT_SLOW_OPERATION_THRESHOLD_MS,
    DEFAULT_SOURCE,
};
pub use error::{MonitorError, Result};
pub use recorder::{EventRecorder, OperationTimer};
pub use sink::{LogLevel, LogSink, LogStream, MemorySink, SinkEntry, TracingSink};
pub use types::{app_events, security_events};
pub use types::{ApplicationEvent, PerformanceMetric, SecurityEvent, Severity};
