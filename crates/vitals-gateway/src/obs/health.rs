//! Health snapshot assembly.

use std::sync::Arc;

use chrono::Utc;
use sysinfo::System;
use vitals_core::health::{EnvironmentInfo, HealthSnapshot};
use vitals_core::MetricsRegistry;

use super::sampler::ProcessResourceSampler;

/// Static platform facts, captured once at startup.
pub fn capture_environment(service_name: &str) -> EnvironmentInfo {
    EnvironmentInfo {
        service_name: service_name.to_string(),
        service_version: env!("CARGO_PKG_VERSION").to_string(),
        platform: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
        platform_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
        architecture: std::env::consts::ARCH.to_string(),
    }
}

/// Builds a fresh `HealthSnapshot` per call. Reads the registry, never mutates it.
#[derive(Clone)]
pub struct HealthSnapshotBuilder {
    registry: Arc<MetricsRegistry>,
    sampler: ProcessResourceSampler,
    environment: EnvironmentInfo,
}

impl HealthSnapshotBuilder {
    pub fn new(
        registry: Arc<MetricsRegistry>,
        sampler: ProcessResourceSampler,
        environment: EnvironmentInfo,
    ) -> Self {
        Self {
            registry,
            sampler,
            environment,
        }
    }

    pub fn environment(&self) -> &EnvironmentInfo {
        &self.environment
    }

    pub async fn build(&self) -> HealthSnapshot {
        // Sample first: the CPU window is the slow part, counters are read after.
        let process = self.sampler.sample().await;
        let metrics = self.registry.snapshot();

        HealthSnapshot::assemble(
            Utc::now(),
            self.registry.uptime_secs(),
            &metrics,
            process,
            self.environment.clone(),
        )
    }
}
