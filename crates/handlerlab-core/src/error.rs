//! Shared error type across handlerlab crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed body.
    BadRequest,
    /// HTTP method not supported on this route.
    MethodNotAllowed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LabError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Embedded seed data could not be loaded. Fatal at startup.
    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
    /// Embedded config could not be loaded. Fatal at startup.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl LabError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            LabError::BadRequest(_) => ClientCode::BadRequest,
            LabError::MethodNotAllowed => ClientCode::MethodNotAllowed,
            LabError::InvalidSeed(_) | LabError::InvalidConfig(_) | LabError::Internal(_) => {
                ClientCode::Internal
            }
        }
    }
}
