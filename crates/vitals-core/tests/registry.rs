//! MetricsRegistry counting, classification, and concurrency tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use vitals_core::metrics::{is_success, MetricsRegistry};

#[test]
fn empty_registry_uses_defaults() {
    let reg = MetricsRegistry::new();
    let s = reg.snapshot();
    assert_eq!(s.total, 0);
    assert_eq!(s.successful, 0);
    assert_eq!(s.failed, 0);
    assert_eq!(s.success_rate, 100.0);
    assert_eq!(s.average_response_time_ms, 0.0);
}

#[test]
fn totals_track_every_call() {
    let reg = MetricsRegistry::new();
    let statuses = [200, 201, 302, 399, 400, 404, 500, 503, 100, 0, 199, u16::MAX];
    for (i, status) in statuses.iter().enumerate() {
        reg.record(Duration::from_millis(i as u64), *status);
        let s = reg.snapshot();
        assert_eq!(s.total, i as u64 + 1);
        assert_eq!(s.successful + s.failed, s.total);
    }
    let s = reg.snapshot();
    assert_eq!(s.successful, 4);
    assert_eq!(s.failed, 8);
}

#[test]
fn success_range_is_200_to_399() {
    assert!(!is_success(199));
    assert!(is_success(200));
    assert!(is_success(399));
    assert!(!is_success(400));
    assert!(!is_success(500));

    let reg = MetricsRegistry::new();
    for status in 200..400 {
        reg.record(Duration::ZERO, status);
    }
    let s = reg.snapshot();
    assert_eq!(s.successful, 200);
    assert_eq!(s.failed, 0);

    reg.record(Duration::ZERO, 400);
    assert_eq!(reg.snapshot().failed, 1);
}

#[test]
fn derived_values() {
    let reg = MetricsRegistry::new();
    reg.record(Duration::from_millis(100), 200);
    reg.record(Duration::from_millis(300), 200);
    reg.record(Duration::from_millis(200), 500);
    reg.record(Duration::from_millis(400), 404);

    let s = reg.snapshot();
    assert_eq!(s.total, 4);
    assert!((s.total_duration_secs - 1.0).abs() < 1e-9);
    assert!((s.average_response_time_ms - 250.0).abs() < 1e-9);
    assert!((s.success_rate - 50.0).abs() < 1e-9);
}

#[test]
fn concurrent_records_are_not_lost() {
    const CALLERS: usize = 1000;
    let reg = Arc::new(MetricsRegistry::new());

    thread::scope(|scope| {
        for i in 0..CALLERS {
            let reg = Arc::clone(&reg);
            scope.spawn(move || {
                let status = if i % 4 == 0 { 500 } else { 200 };
                reg.record(Duration::from_micros(10), status);
            });
        }
    });

    let s = reg.snapshot();
    assert_eq!(s.total, CALLERS as u64);
    assert_eq!(s.failed, (CALLERS / 4) as u64);
    assert_eq!(s.successful + s.failed, s.total);
}

#[test]
fn readers_never_see_torn_counts() {
    let reg = Arc::new(MetricsRegistry::new());

    thread::scope(|scope| {
        for w in 0..8 {
            let reg = Arc::clone(&reg);
            scope.spawn(move || {
                for i in 0..500 {
                    reg.record(Duration::from_micros(1), if (w + i) % 3 == 0 { 503 } else { 204 });
                }
            });
        }
        for _ in 0..4 {
            let reg = Arc::clone(&reg);
            scope.spawn(move || {
                for _ in 0..500 {
                    let s = reg.snapshot();
                    assert_eq!(s.successful + s.failed, s.total);
                }
            });
        }
    });

    assert_eq!(reg.snapshot().total, 4000);
}

#[test]
fn uptime_is_monotonic() {
    let reg = MetricsRegistry::new();
    let mut last = reg.uptime();
    for _ in 0..100 {
        let now = reg.uptime();
        assert!(now >= last);
        last = now;
    }
    thread::sleep(Duration::from_millis(5));
    assert!(reg.uptime_secs() >= 0.005);
    assert!(reg.started_at() <= chrono::Utc::now());
}
