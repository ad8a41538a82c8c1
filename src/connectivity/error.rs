//! API request error types.

use reqwest::StatusCode;
use thiserror::Error;

use super::status::{ConnectionStatus, TransportFailure, classify_http_status, classify_transport};

/// Errors returned by [`ApiClient::call`](super::ApiClient::call).
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never produced a response (timeout, refused, DNS, ...).
    #[error("{message}")]
    Transport {
        status: ConnectionStatus,
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a 5xx status.
    #[error("server error: {0}")]
    Server(StatusCode),
}

impl ApiError {
    pub(crate) fn transport(source: reqwest::Error) -> Self {
        let (status, message) = classify_transport(TransportFailure::from_error(&source));
        Self::Transport {
            status,
            message,
            source,
        }
    }

    /// Connection status this error maps to.
    pub fn status(&self) -> ConnectionStatus {
        match self {
            ApiError::Transport { status, .. } => *status,
            ApiError::Server(code) => classify_http_status(*code).0,
        }
    }
}
