//! Shared application state for the vitals gateway.
//!
//! The metrics registry is created here, once per process, and handed to the
//! instrumentor and the health builder. Nothing looks it up globally.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use vitals_core::MetricsRegistry;

use crate::config::GatewayConfig;
use crate::obs::{capture_environment, HealthSnapshotBuilder, ProcessResourceSampler, RequestInstrumentor};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Arc<MetricsRegistry>,
    instrumentor: RequestInstrumentor,
    health: HealthSnapshotBuilder,
    draining: AtomicBool,
}

impl AppState {
    /// Build state with the `sysinfo`-backed sampler.
    pub fn new(cfg: GatewayConfig) -> Self {
        let window = Duration::from_millis(cfg.health.cpu_sample_window_ms);
        Self::with_sampler(cfg, ProcessResourceSampler::new(window))
    }

    pub fn with_sampler(cfg: GatewayConfig, sampler: ProcessResourceSampler) -> Self {
        let registry = Arc::new(MetricsRegistry::new());
        let instrumentor = RequestInstrumentor::new(Arc::clone(&registry));
        let environment = capture_environment(&cfg.health.service_name);
        let health = HealthSnapshotBuilder::new(Arc::clone(&registry), sampler, environment);

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                instrumentor,
                health,
                draining: AtomicBool::new(false),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn instrumentor(&self) -> &RequestInstrumentor {
        &self.inner.instrumentor
    }

    pub fn health(&self) -> &HealthSnapshotBuilder {
        &self.inner.health
    }

    /// Mark draining state (graceful shutdown started).
    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }
}
