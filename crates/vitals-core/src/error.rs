//! Shared error type across vitals crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type used by core and gateway.
///
/// Metrics recording and health sampling never produce errors; this type only
/// covers startup (config, bind) failures.
#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VitalsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VitalsError::BadRequest(_) => ClientCode::BadRequest,
            VitalsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            VitalsError::Internal(_) => ClientCode::Internal,
        }
    }
}
