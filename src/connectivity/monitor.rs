//! Periodic health polling on the tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

use super::check::ApiClient;
use super::status::{ConnectionCheck, ConnectionStatus};
use crate::config::ApiConfig;
use crate::error::AppError;

/// Running monitor task; aborted when dropped.
#[derive(Debug)]
pub struct MonitorHandle {
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Poll the health endpoint every `interval` and report status changes.
///
/// The first check runs one interval after start, and the baseline is
/// `Connected`, so nothing is sent while the backend stays healthy. After
/// each send `wake` is called so the UI thread picks the message up. The
/// task ends when the receiver is dropped. A zero `interval` is rejected.
pub fn spawn_monitor<F>(
    handle: &Handle,
    config: ApiConfig,
    interval: Duration,
    tx: mpsc::UnboundedSender<ConnectionCheck>,
    wake: F,
) -> crate::error::Result<MonitorHandle>
where
    F: Fn() + Send + Sync + 'static,
{
    if interval.is_zero() {
        return Err(AppError::validation("Monitor interval must be non-zero"));
    }

    let client = ApiClient::new(config)?;
    info!("Starting connection monitor (every {:?})", interval);

    let task = handle.spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_status = ConnectionStatus::Connected;

        loop {
            ticker.tick().await;
            let check = client.check().await;
            if check.status == last_status {
                continue;
            }

            info!("Connection status changed: {:?} -> {:?}", last_status, check.status);
            last_status = check.status;
            if tx.send(check).is_err() {
                warn!("Connection monitor receiver dropped, stopping");
                break;
            }
            wake();
        }
    });

    Ok(MonitorHandle { task })
}
