//! Performance benchmarks for opsmon
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use opsmon::{EventRecorder, MonitorConfig, PerformanceMetric, SecurityEvent};

fn bench_record_creation(c: &mut Criterion) {
    c.bench_function("SecurityEvent::new", |b| {
        b.iter(|| {
            SecurityEvent::new(
                "UNAUTHORIZED_ACCESS",
                "user-7",
                "token replay detected",
                "bench",
            )
        });
    });

    c.bench_function("PerformanceMetric::new", |b| {
        b.iter(|| PerformanceMetric::new("encrypt_data", 120, true, "bench"));
    });
}

fn bench_record_serialization(c: &mut Criterion) {
    let event = SecurityEvent::new(
        "SQL_INJECTION_ATTEMPT",
        "unknown",
        "query=1' UNION SELECT * FROM users--",
        "bench",
    );

    c.bench_function("SecurityEvent serialize", |b| {
        b.iter(|| serde_json::to_string(&event).unwrap());
    });

    let json = serde_json::to_string(&event).unwrap();
    c.bench_function("SecurityEvent deserialize", |b| {
        b.iter(|| serde_json::from_str::<SecurityEvent>(&json).unwrap());
    });
}

fn bench_end_to_end_record(c: &mut Criterion) {
    // No subscriber installed: TracingSink discards events, so this
    // measures the recorder path itself.
    let recorder = EventRecorder::with_defaults(MonitorConfig::default());

    c.bench_function("record_security_event", |b| {
        b.iter(|| recorder.record_security_event("DATA_ENCRYPTED", "system", "ok"));
    });

    c.bench_function("record_security_event critical", |b| {
        b.iter(|| recorder.record_security_event("UNAUTHORIZED_ACCESS", "user-7", "replay"));
    });

    c.bench_function("record_performance_metric", |b| {
        b.iter(|| recorder.record_performance_metric("encrypt_data", 120, true));
    });
}

criterion_group!(
    benches,
    bench_record_creation,
    bench_record_serialization,
    bench_end_to_end_record
);
criterion_main!(benches);
