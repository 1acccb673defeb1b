//! The event recorder, an operational logging facade
//!
//! `EventRecorder` accepts security events, performance metrics, and
//! application events, serializes each to one structured JSON line, routes
//! it to a named stream on the configured sink, and triggers the alert
//! handler when an event is critical or an operation is slow. Recording is
//! best-effort by contract: no failure inside the recorder ever reaches
//! the caller.

use crate::alert::{AlertHandler, LogAlertHandler};
use crate::config::MonitorConfig;
use crate::correlation::CorrelationScope;
use crate::error::MonitorError;
use crate::sink::{LogLevel, LogSink, LogStream, TracingSink};
use crate::types::{ApplicationEvent, PerformanceMetric, SecurityEvent};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Operational logging facade with pluggable sink and alerting
///
/// Construction is explicit: the config, sink, and alert handler are
/// passed in, never pulled from process globals. All record operations
/// are synchronous, infallible from the caller's perspective, and safe
/// to call from any thread.
pub struct EventRecorder {
    config: MonitorConfig,
    sink: Arc<dyn LogSink>,
    alerts: Box<dyn AlertHandler>,
}

impl EventRecorder {
    /// Create a recorder from explicit parts
    pub fn new(
        config: MonitorConfig,
        sink: impl LogSink + 'static,
        alerts: impl AlertHandler + 'static,
    ) -> Self {
        Self {
            config,
            sink: Arc::new(sink),
            alerts: Box::new(alerts),
        }
    }

    /// Recorder wired with the production defaults
    ///
    /// Emits through `TracingSink` and escalates alerts as higher-severity
    /// lines on the same sink.
    pub fn with_defaults(config: MonitorConfig) -> Self {
        let sink: Arc<dyn LogSink> = Arc::new(TracingSink);
        Self {
            config,
            sink: sink.clone(),
            alerts: Box::new(LogAlertHandler::new(sink)),
        }
    }

    /// The recorder's configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The sink records are written to
    pub fn sink(&self) -> &dyn LogSink {
        self.sink.as_ref()
    }

    /// Record a security event on the security stream at warn level
    ///
    /// The event is stamped with the current instant, fixed `High`
    /// severity, and the configured source. If `event_type` is in the
    /// critical set, the alert handler is invoked once with the full
    /// event. Never fails; internal errors are contained.
    pub fn record_security_event(&self, event_type: &str, user_id: &str, details: &str) {
        let event = SecurityEvent::new(event_type, user_id, details, &self.config.source);
        let _scope = CorrelationScope::enter([("eventType", event_type), ("userId", user_id)]);

        match serde_json::to_string(&event) {
            Ok(line) => {
                self.write_contained(LogStream::Security, LogLevel::Warn, &line);

                if self.config.is_critical(event_type) {
                    if let Err(e) = self.alerts.security_alert(&event) {
                        self.contain("Security alert delivery", &e);
                    }
                }
            }
            Err(e) => self.contain("Security event serialization", &e.into()),
        }
    }

    /// Record a performance metric on the performance stream at info level
    ///
    /// If `duration_ms` exceeds the configured threshold, the alert
    /// handler is invoked once with the full metric. Never fails.
    pub fn record_performance_metric(&self, operation: &str, duration_ms: u64, success: bool) {
        let metric = PerformanceMetric::new(operation, duration_ms, success, &self.config.source);
        let _scope = CorrelationScope::enter([
            ("operation", operation.to_string()),
            ("durationMs", duration_ms.to_string()),
        ]);

        match serde_json::to_string(&metric) {
            Ok(line) => {
                self.write_contained(LogStream::Performance, LogLevel::Info, &line);

                if self.config.is_slow(duration_ms) {
                    if let Err(e) = self.alerts.performance_alert(&metric) {
                        self.contain("Performance alert delivery", &e);
                    }
                }
            }
            Err(e) => self.contain("Performance metric serialization", &e.into()),
        }
    }

    /// Record an application event on the general stream at info level
    ///
    /// No alerting and no correlation scope; the payload map is carried
    /// verbatim. Never fails.
    pub fn record_application_event(
        &self,
        event_type: &str,
        data: HashMap<String, serde_json::Value>,
    ) {
        let event = ApplicationEvent::new(event_type, data, &self.config.source);

        match serde_json::to_string(&event) {
            Ok(line) => self.write_contained(LogStream::General, LogLevel::Info, &line),
            Err(e) => self.contain("Application event serialization", &e.into()),
        }
    }

    /// Begin timing an operation
    ///
    /// Finish the returned timer to record one performance metric with
    /// the measured wall-clock duration.
    pub fn start_operation(&self, operation: impl Into<String>) -> OperationTimer<'_> {
        OperationTimer {
            recorder: self,
            operation: operation.into(),
            started: Instant::now(),
        }
    }

    fn write_contained(&self, stream: LogStream, level: LogLevel, line: &str) {
        if let Err(e) = self.sink.write(stream, level, line) {
            self.contain(&format!("{} stream write", stream), &e);
        }
    }

    /// Report an internal failure on the general stream, then swallow it.
    fn contain(&self, action: &str, err: &MonitorError) {
        tracing::error!(action, error = %err, "Recording failure contained");

        let report = format!("{}: {}", action, err);
        // Nothing left to try if the general stream is down as well.
        let _ = self
            .sink
            .write(LogStream::General, LogLevel::Error, &report);
    }
}

/// Wall-clock timer for one operation
///
/// Captures a start instant on creation. `finish` measures the elapsed
/// milliseconds and records one performance metric through the owning
/// recorder; consuming `self` makes recording twice unrepresentable.
#[must_use = "finish the timer to record the metric"]
pub struct OperationTimer<'a> {
    recorder: &'a EventRecorder,
    operation: String,
    started: Instant,
}

impl OperationTimer<'_> {
    /// The operation being timed
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Milliseconds elapsed since the timer started
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Record the metric with the measured duration and the given outcome
    pub fn finish(self, success: bool) {
        let elapsed = self.elapsed_ms();
        self.recorder
            .record_performance_metric(&self.operation, elapsed, success);
    }
}
