//! TracingSink integration tests
//!
//! Installs a fmt subscriber with a capturing writer and verifies that
//! streams route to same-named targets at the documented levels, and that
//! the per-call correlation id is attached to emitted events.

use opsmon::{EventRecorder, MonitorConfig};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn test_streams_route_to_named_targets() {
    let out = capture(|| {
        let recorder = EventRecorder::with_defaults(MonitorConfig::default());
        recorder.record_security_event("DATA_ENCRYPTED", "system", "ok");
        recorder.record_performance_metric("encrypt_data", 120, true);
    });

    let security_line = out
        .lines()
        .find(|l| l.contains("security"))
        .expect("security stream line");
    assert!(security_line.contains("WARN"));
    assert!(security_line.contains("\"eventType\":\"DATA_ENCRYPTED\""));
    assert!(security_line.contains("correlation_id"));
    assert!(security_line.contains("corr-"));

    let perf_line = out
        .lines()
        .find(|l| l.contains("performance"))
        .expect("performance stream line");
    assert!(perf_line.contains("INFO"));
    assert!(perf_line.contains("\"durationMs\":120"));
}

#[test]
fn test_critical_event_escalates_on_general_target() {
    let out = capture(|| {
        let recorder = EventRecorder::with_defaults(MonitorConfig::default());
        recorder.record_security_event("UNAUTHORIZED_ACCESS", "user-7", "token replay");
    });

    let alert_line = out
        .lines()
        .find(|l| l.contains("CRITICAL SECURITY ALERT"))
        .expect("escalated alert line");
    assert!(alert_line.contains("ERROR"));
    assert!(alert_line.contains("general"));
    assert!(alert_line.contains("\"userId\":\"user-7\""));
}

#[test]
fn test_slow_operation_escalates_on_general_target() {
    let out = capture(|| {
        let recorder = EventRecorder::with_defaults(MonitorConfig::default());
        recorder.record_performance_metric("list_accounts", 6_000, false);
    });

    let alert_line = out
        .lines()
        .find(|l| l.contains("PERFORMANCE ALERT"))
        .expect("escalated alert line");
    assert!(alert_line.contains("WARN"));
    assert!(alert_line.contains("\"success\":false"));
}
