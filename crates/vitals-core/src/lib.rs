//! vitals core: transport-agnostic request metrics, health records, and errors.
//!
//! This crate owns the counter registry every request reports into and the
//! immutable health record built from it. It carries no transport or runtime
//! dependencies so the gateway, tests, and other hosts can share it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Recording a request must never bring the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod health;
pub mod metrics;

/// Shared result type.
pub use error::{Result, VitalsError};
pub use health::{format_uptime, HealthSnapshot};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
