//! Observability: request instrumentation, process sampling, health snapshots.
//!
//! Counters themselves live in `vitals_core::metrics`; this module wires them
//! into the axum pipeline and the health endpoint.

pub mod health;
pub mod instrument;
pub mod sampler;

pub use health::{capture_environment, HealthSnapshotBuilder};
pub use instrument::{track_requests, RequestInstrumentor, StatusSource};
pub use sampler::{ProcessResourceSampler, ProcessUsage, ResourceProbe, SysinfoProbe};
