//! Request instrumentation stage.
//!
//! `RequestInstrumentor::instrument` takes the rest of the pipeline as an
//! explicit continuation. Every call ends in exactly one `MetricsRegistry::record`:
//! - `Ok(resp)`: the response status.
//! - `Err(e)`: 500, then `e` is returned untouched.
//! - dropped mid-flight (cancel, timeout, panic unwind): 500 from the guard.
//!
//! The registry lock is only taken inside `record`, after the continuation has
//! finished, so slow requests never serialize each other.

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use vitals_core::MetricsRegistry;

use crate::app_state::AppState;

/// Status recorded for failed, cancelled, or panicked requests.
pub const FAILURE_STATUS: u16 = 500;

/// Anything that carries an HTTP status code.
pub trait StatusSource {
    fn status_code(&self) -> u16;
}

impl StatusSource for u16 {
    fn status_code(&self) -> u16 {
        *self
    }
}

impl StatusSource for StatusCode {
    fn status_code(&self) -> u16 {
        self.as_u16()
    }
}

impl<B> StatusSource for axum::http::Response<B> {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

/// Times a pipeline stage and reports its outcome into the registry.
#[derive(Clone)]
pub struct RequestInstrumentor {
    registry: Arc<MetricsRegistry>,
}

impl RequestInstrumentor {
    pub fn new(registry: Arc<MetricsRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<MetricsRegistry> {
        &self.registry
    }

    /// Run `next` and record its latency and outcome.
    ///
    /// The result of `next` is returned as-is; errors are observed, never
    /// translated.
    pub async fn instrument<F, Fut, T, E>(&self, next: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        T: StatusSource,
    {
        let guard = RecordGuard::start(&self.registry);
        match next().await {
            Ok(resp) => {
                guard.finish(resp.status_code());
                Ok(resp)
            }
            Err(e) => {
                guard.finish(FAILURE_STATUS);
                Err(e)
            }
        }
    }
}

/// Records exactly once: via `finish`, or as a failure on drop.
struct RecordGuard<'a> {
    registry: &'a MetricsRegistry,
    started: Instant,
    recorded: bool,
}

impl<'a> RecordGuard<'a> {
    fn start(registry: &'a MetricsRegistry) -> Self {
        Self {
            registry,
            started: Instant::now(),
            recorded: false,
        }
    }

    fn finish(mut self, status: u16) {
        self.recorded = true;
        self.registry.record(self.started.elapsed(), status);
    }
}

impl Drop for RecordGuard<'_> {
    fn drop(&mut self) {
        if self.recorded {
            return;
        }
        let elapsed = self.started.elapsed();
        tracing::debug!(
            elapsed_ms = elapsed.as_millis() as u64,
            "request dropped before completion, counted as failure"
        );
        self.registry.record(elapsed, FAILURE_STATUS);
    }
}

/// axum adapter: `middleware::from_fn_with_state(state, track_requests)`.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let res = state
        .instrumentor()
        .instrument(|| async move { Ok::<_, Infallible>(next.run(req).await) })
        .await;
    let response = match res {
        Ok(r) => r,
        Err(never) => match never {},
    };

    tracing::debug!(%method, %path, status = response.status().as_u16(), "request completed");
    response
}
