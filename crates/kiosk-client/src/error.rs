//! Service-layer errors: everything that can go wrong between the kiosk
//! and the backend.
//!
//! Each call is a single attempt. Retry policy lives with the user, not
//! here: a failed catalog load is retried by navigating again, a failed
//! print by pressing PRINT again.

use thiserror::Error;

/// A failed call to the catalog or print service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },

    /// The server answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("could not decode {endpoint} response: {reason}")]
    Decode { endpoint: String, reason: String },

    /// The print service accepted the request but reported failure.
    #[error("receipt rejected: {0}")]
    Rejected(String),
}

impl ServiceError {
    pub(crate) fn transport(endpoint: &str, err: reqwest::Error) -> Self {
        ServiceError::Transport {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(endpoint: &str, reason: impl Into<String>) -> Self {
        ServiceError::Decode {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;
