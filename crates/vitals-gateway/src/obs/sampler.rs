//! Process CPU / memory sampling.
//!
//! `ProcessResourceSampler::sample` never fails. Hosts without process
//! introspection yield `ProcessStats::UNAVAILABLE` (`psutil_available: false`).

use std::sync::Arc;
use std::time::Duration;

use sysinfo::System;
use vitals_core::health::ProcessStats;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Raw reading from a probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessUsage {
    /// Instantaneous CPU utilization; may exceed 100 on multi-core hosts.
    pub cpu_percent: f64,
    /// Resident set size.
    pub rss_bytes: u64,
}

/// Source of process resource readings.
///
/// `probe` blocks for about `window` and returns `None` when introspection is
/// not possible on this host.
pub trait ResourceProbe: Send + Sync + 'static {
    fn probe(&self, window: Duration) -> Option<ProcessUsage>;
}

/// Default probe backed by `sysinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoProbe;

impl ResourceProbe for SysinfoProbe {
    fn probe(&self, window: Duration) -> Option<ProcessUsage> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return None;
        }
        let pid = sysinfo::get_current_pid().ok()?;

        // CPU usage is a delta between two refreshes.
        let mut sys = System::new();
        if !sys.refresh_process(pid) {
            return None;
        }
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        if !sys.refresh_process(pid) {
            return None;
        }

        let process = sys.process(pid)?;
        Some(ProcessUsage {
            cpu_percent: f64::from(process.cpu_usage()),
            rss_bytes: process.memory(),
        })
    }
}

#[derive(Clone)]
pub struct ProcessResourceSampler {
    probe: Arc<dyn ResourceProbe>,
    window: Duration,
}

impl ProcessResourceSampler {
    /// Sampler using `sysinfo` with the given CPU window.
    pub fn new(window: Duration) -> Self {
        Self::with_probe(Arc::new(SysinfoProbe), window)
    }

    pub fn with_probe(probe: Arc<dyn ResourceProbe>, window: Duration) -> Self {
        Self { probe, window }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Sample the current process. The blocking probe runs off the async
    /// worker threads.
    pub async fn sample(&self) -> ProcessStats {
        let probe = Arc::clone(&self.probe);
        let window = self.window;

        match tokio::task::spawn_blocking(move || probe.probe(window)).await {
            Ok(Some(usage)) => {
                ProcessStats::sampled(usage.cpu_percent, usage.rss_bytes as f64 / BYTES_PER_MB)
            }
            Ok(None) => {
                tracing::debug!("process introspection unavailable");
                ProcessStats::UNAVAILABLE
            }
            Err(e) => {
                tracing::warn!(error = %e, "resource probe task failed");
                ProcessStats::UNAVAILABLE
            }
        }
    }
}
