//! Health record returned by the detailed health endpoint.
//!
//! A `HealthSnapshot` is a plain value: built fresh per query from copies of
//! registry counters, a resource sample, and static environment facts. The
//! serialized field names are part of the external contract.

pub mod uptime;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::metrics::MetricsSnapshot;

pub use uptime::format_uptime;

/// Overall service status.
///
/// Only `Healthy` exists: status is not derived from failure rate or resource
/// pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Request statistics section (`requests.*`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestStats {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub success_rate: f64,
    pub average_response_time_ms: f64,
}

impl From<&MetricsSnapshot> for RequestStats {
    fn from(s: &MetricsSnapshot) -> Self {
        Self {
            total: s.total,
            successful: s.successful,
            failed: s.failed,
            success_rate: round2(s.success_rate),
            average_response_time_ms: round2(s.average_response_time_ms),
        }
    }
}

/// Process resource section (`process.*`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessStats {
    pub cpu_percent: f64,
    pub memory_mb: f64,
    /// `false` when the host exposes no process introspection.
    #[serde(rename = "psutil_available")]
    pub available: bool,
}

impl ProcessStats {
    /// Fallback reported when sampling is not possible.
    pub const UNAVAILABLE: ProcessStats = ProcessStats {
        cpu_percent: 0.0,
        memory_mb: 0.0,
        available: false,
    };

    pub fn sampled(cpu_percent: f64, memory_mb: f64) -> Self {
        Self {
            cpu_percent: round2(cpu_percent),
            memory_mb: round2(memory_mb),
            available: true,
        }
    }
}

/// Static platform facts (`environment.*`), captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentInfo {
    pub service_name: String,
    pub service_version: String,
    pub platform: String,
    pub platform_version: String,
    pub architecture: String,
}

/// Point-in-time health record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSnapshot {
    pub timestamp: DateTime<Utc>,
    pub status: HealthStatus,
    pub uptime_seconds: f64,
    pub uptime_formatted: String,
    pub requests: RequestStats,
    pub process: ProcessStats,
    pub environment: EnvironmentInfo,
}

impl HealthSnapshot {
    /// Assemble a snapshot from already-collected parts.
    pub fn assemble(
        timestamp: DateTime<Utc>,
        uptime_secs: f64,
        metrics: &MetricsSnapshot,
        process: ProcessStats,
        environment: EnvironmentInfo,
    ) -> Self {
        Self {
            timestamp,
            status: HealthStatus::Healthy,
            uptime_seconds: round2(uptime_secs),
            uptime_formatted: format_uptime(uptime_secs.max(0.0) as u64),
            requests: RequestStats::from(metrics),
            process,
            environment,
        }
    }
}

/// Round to two decimals for reporting.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
