//! Process-wide request counter registry.
//!
//! `record` and `snapshot` take the same `Mutex`; the critical section is a
//! handful of integer/float operations and never awaits.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status codes in `[200, 400)` count as successful.
pub fn is_success(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Raw counters. Only `MetricsRegistry` mutates these.
#[derive(Debug, Clone, Default)]
pub struct RequestMetrics {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub total_duration_secs: f64,
}

impl RequestMetrics {
    fn apply(&mut self, duration: Duration, status: u16) {
        self.total += 1;
        self.total_duration_secs += duration.as_secs_f64();
        if is_success(status) {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Mean latency in milliseconds, `0.0` before the first request.
    pub fn average_response_time_ms(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.total_duration_secs / self.total as f64 * 1000.0
    }

    /// Share of successful requests in percent, `100.0` before the first request.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.successful as f64 / self.total as f64 * 100.0
    }
}

/// Consistent copy of the counters plus derived values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub total_duration_secs: f64,
    pub average_response_time_ms: f64,
    pub success_rate: f64,
}

impl From<&RequestMetrics> for MetricsSnapshot {
    fn from(m: &RequestMetrics) -> Self {
        Self {
            total: m.total,
            successful: m.successful,
            failed: m.failed,
            total_duration_secs: m.total_duration_secs,
            average_response_time_ms: m.average_response_time_ms(),
            success_rate: m.success_rate(),
        }
    }
}

/// Thread-safe owner of the process request counters.
#[derive(Debug)]
pub struct MetricsRegistry {
    counters: Mutex<RequestMetrics>,
    started: Instant,
    started_at: DateTime<Utc>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(RequestMetrics::default()),
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Record one finished request.
    ///
    /// Preconditions (not validated): `duration` is the real elapsed time of
    /// the request and `status` is the HTTP status it produced. Any status
    /// outside `[200, 400)` is counted as failed.
    pub fn record(&self, duration: Duration, status: u16) {
        self.lock().apply(duration, status);
    }

    /// Copy of the counters taken under the mutation lock.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::from(&*self.lock())
    }

    /// Monotonic time since construction.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn uptime_secs(&self) -> f64 {
        self.uptime().as_secs_f64()
    }

    /// Wall-clock construction time.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // Counters are updated without panicking paths, so a poisoned guard
    // still holds a consistent value.
    fn lock(&self) -> MutexGuard<'_, RequestMetrics> {
        self.counters.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("metrics lock poisoned, recovering counters");
            poisoned.into_inner()
        })
    }
}
