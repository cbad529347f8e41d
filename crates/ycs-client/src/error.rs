//! Error types for status API requests.

use std::fmt;

/// API call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetServices,
    GetIncidents,
    GetIncident(u64),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetServices => f.write_str("get services status"),
            Self::GetIncidents => f.write_str("get incidents"),
            Self::GetIncident(id) => write!(f, "get incident {id}"),
        }
    }
}

/// Error from a status API call, tagged with the operation attempted.
#[derive(Debug, thiserror::Error)]
#[error("can't {operation}: {source}")]
pub struct ClientError {
    /// What the caller asked for.
    pub operation: Operation,
    /// Underlying failure.
    pub source: RequestError,
}

impl ClientError {
    pub(crate) fn new(operation: Operation, source: RequestError) -> Self {
        Self { operation, source }
    }

    /// HTTP status code, if the server answered with a non-success status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self.source {
            RequestError::Status(status) => Some(status),
            _ => None,
        }
    }
}

/// Failure of a single HTTP exchange.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Request could not be sent or no response arrived (connection, timeout).
    #[error("can't send request to API: {0}")]
    Transport(#[source] ureq::Error),

    /// Server answered with a status above 299.
    #[error("API returned non-ok status code {0}")]
    Status(u16),

    /// Response body could not be read.
    #[error("can't read API response: {0}")]
    Body(#[source] ureq::Error),

    /// Response body is not the expected JSON.
    #[error("can't decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}
