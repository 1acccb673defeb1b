//! Operational record types for the opsmon recorder
//!
//! All types use camelCase JSON serialization for wire compatibility
//! with downstream log consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Severity classification for security events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A security-relevant event
///
/// Built once per recording call and dropped after serialization.
/// Severity is fixed at `High`: every record on the security stream is
/// treated as high-severity by downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEvent {
    /// Instant the event was recorded (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Event tag (e.g., "UNAUTHORIZED_ACCESS", "DATA_ENCRYPTED")
    pub event_type: String,

    /// Principal the event concerns ("system" for service-initiated actions)
    pub user_id: String,

    /// Free-text detail, may be empty
    pub details: String,

    /// Always `High` for security events
    pub severity: Severity,

    /// Service that produced the record
    pub source: String,
}

impl SecurityEvent {
    /// Create a security event stamped with the current instant
    pub fn new(
        event_type: impl Into<String>,
        user_id: impl Into<String>,
        details: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            event_type: event_type.into(),
            user_id: user_id.into(),
            details: details.into(),
            severity: Severity::High,
            source: source.into(),
        }
    }
}

/// A timing sample for one operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    /// Instant the metric was recorded (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Operation identifier (e.g., "encrypt_data", "list_accounts")
    pub operation: String,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,

    /// Whether the operation completed successfully
    pub success: bool,

    /// Service that produced the record
    pub source: String,
}

impl PerformanceMetric {
    /// Create a performance metric stamped with the current instant
    pub fn new(
        operation: impl Into<String>,
        duration_ms: u64,
        success: bool,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: operation.into(),
            duration_ms,
            success,
            source: source.into(),
        }
    }
}

/// A generic application event with free-form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationEvent {
    /// Instant the event was recorded (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Event tag (e.g., "AZURE_RESOURCES_LISTED")
    pub event_type: String,

    /// Arbitrary key-value payload
    pub data: HashMap<String, serde_json::Value>,

    /// Service that produced the record
    pub source: String,
}

impl ApplicationEvent {
    /// Create an application event stamped with the current instant
    pub fn new(
        event_type: impl Into<String>,
        data: HashMap<String, serde_json::Value>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            event_type: event_type.into(),
            data,
            source: source.into(),
        }
    }

    /// Add a payload entry
    pub fn with_entry(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// Security event tags used by the service layer
///
/// Shared constants so callers and tests agree on one spelling. Membership
/// in the critical set is a case-sensitive exact match on these values.
pub mod security_events {
    pub const UNAUTHORIZED_ACCESS: &str = "UNAUTHORIZED_ACCESS";
    pub const SQL_INJECTION_ATTEMPT: &str = "SQL_INJECTION_ATTEMPT";
    pub const XSS_ATTEMPT: &str = "XSS_ATTEMPT";
    pub const BRUTE_FORCE_ATTACK: &str = "BRUTE_FORCE_ATTACK";

    pub const DATA_ENCRYPTED: &str = "DATA_ENCRYPTED";
    pub const ENCRYPTION_FAILED: &str = "ENCRYPTION_FAILED";
    pub const DATA_DECRYPTED: &str = "DATA_DECRYPTED";
    pub const DECRYPTION_FAILED: &str = "DECRYPTION_FAILED";
    pub const WAF_CREATED: &str = "WAF_CREATED";
    pub const WAF_CREATION_FAILED: &str = "WAF_CREATION_FAILED";
}

/// Application event tags used by the service layer
pub mod app_events {
    pub const AZURE_RESOURCES_LISTED: &str = "AZURE_RESOURCES_LISTED";
    pub const AWS_ACCOUNTS_LISTED: &str = "AWS_ACCOUNTS_LISTED";
}
