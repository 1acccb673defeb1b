//! Alert capability for critical and slow events
//!
//! The recorder triggers alerts through `AlertHandler`; implementations
//! decide the delivery channel. The default escalates to a log sink, and
//! deployments wire paging or a message bus by implementing the trait.

use crate::error::{MonitorError, Result};
use crate::sink::{LogLevel, LogSink, LogStream};
use crate::types::{PerformanceMetric, SecurityEvent};
use std::sync::{Arc, RwLock};

/// Trait for alert delivery channels
///
/// Called by the recorder with the full event or metric payload when a
/// security event is in the critical set or an operation exceeds the
/// slow threshold. Handler failures never propagate past the recorder.
pub trait AlertHandler: Send + Sync {
    /// Deliver an alert for a critical security event
    fn security_alert(&self, event: &SecurityEvent) -> Result<()>;

    /// Deliver an alert for a slow operation
    fn performance_alert(&self, metric: &PerformanceMetric) -> Result<()>;
}

impl<T: AlertHandler + ?Sized> AlertHandler for Arc<T> {
    fn security_alert(&self, event: &SecurityEvent) -> Result<()> {
        (**self).security_alert(event)
    }

    fn performance_alert(&self, metric: &PerformanceMetric) -> Result<()> {
        (**self).performance_alert(metric)
    }
}

/// Alert handler that escalates through a log sink
///
/// Security alerts land on the general stream at error level, performance
/// alerts at warn level, each prefixed so aggregation rules can match them.
pub struct LogAlertHandler {
    sink: Arc<dyn LogSink>,
}

impl LogAlertHandler {
    /// Create a handler escalating through the given sink
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }
}

impl AlertHandler for LogAlertHandler {
    fn security_alert(&self, event: &SecurityEvent) -> Result<()> {
        let payload = serde_json::to_string(event)?;
        self.sink.write(
            LogStream::General,
            LogLevel::Error,
            &format!("CRITICAL SECURITY ALERT: {}", payload),
        )
    }

    fn performance_alert(&self, metric: &PerformanceMetric) -> Result<()> {
        let payload = serde_json::to_string(metric)?;
        self.sink.write(
            LogStream::General,
            LogLevel::Warn,
            &format!("PERFORMANCE ALERT: {}", payload),
        )
    }
}

/// In-memory alert handler for development and testing
///
/// Stores received payloads with a configurable cap; oldest alerts are
/// drained once the cap is exceeded.
pub struct MemoryAlertHandler {
    security: RwLock<Vec<SecurityEvent>>,
    performance: RwLock<Vec<PerformanceMetric>>,
    max_alerts: usize,
}

impl MemoryAlertHandler {
    /// Create a handler retaining at most `max_alerts` per kind
    pub fn new(max_alerts: usize) -> Self {
        Self {
            security: RwLock::new(Vec::new()),
            performance: RwLock::new(Vec::new()),
            max_alerts,
        }
    }

    /// Security alerts received so far, oldest first
    pub fn security_alerts(&self) -> Result<Vec<SecurityEvent>> {
        let alerts = self.security.read().map_err(|e| {
            MonitorError::Alert(format!("Alert store lock poisoned: {}", e))
        })?;
        Ok(alerts.clone())
    }

    /// Performance alerts received so far, oldest first
    pub fn performance_alerts(&self) -> Result<Vec<PerformanceMetric>> {
        let alerts = self.performance.read().map_err(|e| {
            MonitorError::Alert(format!("Alert store lock poisoned: {}", e))
        })?;
        Ok(alerts.clone())
    }

    /// Total number of retained alerts
    pub fn count(&self) -> Result<usize> {
        Ok(self.security_alerts()?.len() + self.performance_alerts()?.len())
    }
}

impl Default for MemoryAlertHandler {
    fn default() -> Self {
        Self::new(10_000)
    }
}

fn push_capped<T>(store: &RwLock<Vec<T>>, item: T, max: usize) -> Result<()> {
    let mut items = store.write().map_err(|e| {
        MonitorError::Alert(format!("Alert store lock poisoned: {}", e))
    })?;
    items.push(item);

    if max > 0 && items.len() > max {
        let drain_count = items.len() - max;
        items.drain(..drain_count);
    }

    Ok(())
}

impl AlertHandler for MemoryAlertHandler {
    fn security_alert(&self, event: &SecurityEvent) -> Result<()> {
        push_capped(&self.security, event.clone(), self.max_alerts)
    }

    fn performance_alert(&self, metric: &PerformanceMetric) -> Result<()> {
        push_capped(&self.performance, metric.clone(), self.max_alerts)
    }
}
