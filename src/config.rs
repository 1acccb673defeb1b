//! Recorder configuration
//!
//! Every knob is an explicit construction-time value; the recorder keeps
//! no process-global state. `MonitorConfig::default()` matches the
//! deployed service defaults.

use std::collections::HashSet;

/// Default source tag stamped on every record
pub const DEFAULT_SOURCE: &str = "cloud-native-app";

/// Default slow-operation threshold in milliseconds
pub const DEFAULT_SLOW_OPERATION_THRESHOLD_MS: u64 = 5_000;

/// Event tags that trigger a security alert by default
pub const DEFAULT_CRITICAL_EVENT_TYPES: [&str; 4] = [
    "UNAUTHORIZED_ACCESS",
    "SQL_INJECTION_ATTEMPT",
    "XSS_ATTEMPT",
    "BRUTE_FORCE_ATTACK",
];

/// Configuration for an `EventRecorder`
///
/// The critical set and threshold are fixed once the recorder is built;
/// classification never changes mid-flight.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Source tag stamped on every record
    pub source: String,

    /// Security event tags that trigger the alert handler
    ///
    /// Membership is a case-sensitive exact match.
    pub critical_event_types: HashSet<String>,

    /// Duration above which an operation triggers a performance alert
    ///
    /// Strictly greater-than: a metric at exactly the threshold does not
    /// alert.
    pub slow_operation_threshold_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            critical_event_types: DEFAULT_CRITICAL_EVENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            slow_operation_threshold_ms: DEFAULT_SLOW_OPERATION_THRESHOLD_MS,
        }
    }
}

impl MonitorConfig {
    /// Create a config with the service defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Replace the critical event set
    pub fn with_critical_event_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.critical_event_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the slow-operation threshold
    pub fn with_slow_operation_threshold_ms(mut self, threshold_ms: u64) -> Self {
        self.slow_operation_threshold_ms = threshold_ms;
        self
    }

    /// Whether an event tag is in the critical set
    pub fn is_critical(&self, event_type: &str) -> bool {
        self.critical_event_types.contains(event_type)
    }

    /// Whether a duration exceeds the slow-operation threshold
    pub fn is_slow(&self, duration_ms: u64) -> bool {
        duration_ms > self.slow_operation_threshold_ms
    }
}
