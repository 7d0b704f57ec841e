//! vitals gateway library entry.
//!
//! This crate wires the request instrumentor, process sampler, and health
//! endpoints into an axum service. It is consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod shutdown;
