//! Error types for Semaphore client operations

use compact_str::CompactString;
use reqwest::{header::HeaderMap, StatusCode};
use thiserror::Error;

use crate::domain::BranchHistory;

/// Structured error types for Semaphore client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response arrived with a status other than 200; the body is discarded
    /// but the response headers stay inspectable
    #[error("got a {status} status code on fetch of {path}")]
    Status {
        status: StatusCode,
        path: CompactString,
        headers: Box<HeaderMap>,
    },

    /// Response body did not parse as the expected JSON shape
    #[error("failed to decode response from {endpoint}")]
    Decode {
        endpoint: CompactString,
        #[source]
        source: serde_json::Error,
    },

    /// Pagination response header did not parse; the body-decoded history
    /// is attached so callers can still inspect the branch and builds
    #[error("failed to decode pagination header from {endpoint}")]
    PaginationDecode {
        endpoint: CompactString,
        partial: Box<BranchHistory>,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a status error from a rejected response
    pub fn status(
        status: StatusCode,
        path: impl Into<CompactString>,
        headers: HeaderMap,
    ) -> Self {
        Self::Status {
            status,
            path: path.into(),
            headers: Box::new(headers),
        }
    }

    /// Create a body decode error with endpoint context
    pub fn decode(endpoint: impl Into<CompactString>, source: serde_json::Error) -> Self {
        Self::Decode { endpoint: endpoint.into(), source }
    }

    /// Create a pagination decode error carrying the partial history
    pub fn pagination_decode(
        endpoint: impl Into<CompactString>,
        partial: BranchHistory,
        source: serde_json::Error,
    ) -> Self {
        Self::PaginationDecode {
            endpoint: endpoint.into(),
            partial: Box::new(partial),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True when no response was received at all
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// Status code of the response, when one was received and rejected
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Headers of a rejected response, so pagination metadata stays
    /// readable on error paths
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            ClientError::Status { headers, .. } => Some(headers),
            _ => None,
        }
    }

    /// Partially decoded history attached to a pagination decode failure
    pub fn partial_history(&self) -> Option<&BranchHistory> {
        match self {
            ClientError::PaginationDecode { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
