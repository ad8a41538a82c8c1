//! Connection status classification.

use chrono::{DateTime, Local};
use reqwest::StatusCode;

/// Backend reachability as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Connected,
    NoInternet,
    ServerDown,
    SlowConnection,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::NoInternet => "No internet connection",
            ConnectionStatus::ServerDown => "Server is currently down",
            ConnectionStatus::SlowConnection => "Connection timeout - slow network",
        }
    }
}

/// Kind of transport-level failure, detached from `reqwest::Error` so the
/// mapping can be exercised without a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    /// Refused, DNS, TLS, reset, ...
    Other,
}

impl TransportFailure {
    pub fn from_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportFailure::Timeout
        } else {
            TransportFailure::Other
        }
    }
}

/// Map a transport failure to a status and message.
pub fn classify_transport(failure: TransportFailure) -> (ConnectionStatus, String) {
    let status = match failure {
        TransportFailure::Timeout => ConnectionStatus::SlowConnection,
        TransportFailure::Other => ConnectionStatus::NoInternet,
    };
    (status, status.default_message().to_string())
}

/// Map an HTTP response status to a connection status and message.
pub fn classify_http_status(code: StatusCode) -> (ConnectionStatus, String) {
    if code.is_server_error() {
        let status = ConnectionStatus::ServerDown;
        (status, status.default_message().to_string())
    } else if code.is_client_error() {
        (ConnectionStatus::ServerDown, format!("Server error: {}", code.as_u16()))
    } else {
        let status = ConnectionStatus::Connected;
        (status, status.default_message().to_string())
    }
}

/// Outcome of a single health check.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionCheck {
    pub status: ConnectionStatus,
    pub message: String,
    pub checked_at: DateTime<Local>,
}

impl ConnectionCheck {
    pub fn new(status: ConnectionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            checked_at: Local::now(),
        }
    }

    pub(crate) fn from_parts((status, message): (ConnectionStatus, String)) -> Self {
        Self::new(status, message)
    }

    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }
}
