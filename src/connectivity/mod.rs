//! Backend reachability: health check, request helper, and background monitor.
//!
//! Failures never propagate as hard errors from the health check; they are
//! folded into a [`ConnectionStatus`] the UI can display.

mod check;
mod error;
mod monitor;
mod status;


pub use check::{ApiClient, check_connection};
pub use error::ApiError;
pub use monitor::{MonitorHandle, spawn_monitor};
pub use status::{ConnectionCheck, ConnectionStatus, TransportFailure, classify_http_status, classify_transport};
