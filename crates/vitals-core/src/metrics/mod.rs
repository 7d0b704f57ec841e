//! Request metrics.
//!
//! One registry per process, constructed at startup and shared by `Arc`.
//! Counters live behind a single lock so readers never observe a request that
//! is counted in `total` but not yet in `successful`/`failed`.

pub mod registry;

pub use registry::{is_success, MetricsRegistry, MetricsSnapshot, RequestMetrics};
