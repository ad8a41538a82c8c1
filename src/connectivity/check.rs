//! Health check and request helper.

use reqwest::{Client, Method, Response};
use tracing::{debug, warn};

use super::error::ApiError;
use super::status::{ConnectionCheck, ConnectionStatus, TransportFailure, classify_http_status, classify_transport};
use crate::config::ApiConfig;
use crate::error::Result;

/// HTTP client bound to one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET {base_url}/health`, classified. Never fails.
    pub async fn check(&self) -> ConnectionCheck {
        let url = self.config.health_url();
        debug!("Health check: {url}");

        match self.client.get(&url).send().await {
            Ok(response) => ConnectionCheck::from_parts(classify_http_status(response.status())),
            Err(e) => {
                warn!("Health check failed: {e}");
                ConnectionCheck::from_parts(classify_transport(TransportFailure::from_error(&e)))
            }
        }
    }

    /// Send a request to `path` under the base URL.
    ///
    /// Transport failures are retried `retry_attempts` times with
    /// `retry_delay` between attempts; HTTP responses are not retried.
    pub async fn call(&self, method: Method, path: &str) -> std::result::Result<Response, ApiError> {
        let url = self.config.endpoint(path);
        let retries = self.config.retry_attempts;
        let mut attempt = 0;

        loop {
            if attempt > 0 {
                debug!("Retry {attempt}/{retries} for {method} {url}");
                tokio::time::sleep(self.config.retry_delay()).await;
            }

            match self.client.request(method.clone(), &url).send().await {
                Ok(response) if response.status().is_server_error() => {
                    warn!("{method} {url} returned {}", response.status());
                    return Err(ApiError::Server(response.status()));
                }
                Ok(response) => return Ok(response),
                Err(e) if attempt < retries => {
                    debug!("{method} {url} failed: {e}");
                    attempt += 1;
                }
                Err(e) => {
                    warn!("{method} {url} failed after {} attempts: {e}", attempt + 1);
                    return Err(ApiError::transport(e));
                }
            }
        }
    }
}

/// One-shot health check using a fresh client.
pub async fn check_connection(config: &ApiConfig) -> ConnectionCheck {
    match ApiClient::new(config.clone()) {
        Ok(client) => client.check().await,
        Err(e) => {
            warn!("Failed to create HTTP client: {e}");
            ConnectionCheck::new(ConnectionStatus::NoInternet, "Failed to create request")
        }
    }
}
