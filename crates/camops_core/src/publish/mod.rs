//! Configuration push transport.
//!
//! Every control mutation is pushed to the backend as one whole-state
//! snapshot. Pushes are at-most-once: no retry, no queue, no cancellation
//! of in-flight requests; the backend applies last-received-wins.

use std::time::Duration;

use thiserror::Error;

use crate::models::TogglesPayload;

/// Errors from constructing the HTTP publisher.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for publisher construction.
pub type PublishResult<T> = Result<T, PublishError>;

/// Fire-and-forget transport for configuration snapshots.
///
/// `publish` must not block the caller; failures are the implementation's
/// to log. The seam lets tests record snapshots instead of transmitting,
/// and leaves room for an acknowledging transport later.
pub trait Publisher: Send + Sync {
    /// Transmit one full snapshot.
    fn publish(&self, payload: TogglesPayload);
}

/// Publisher POSTing JSON to the backend's toggles endpoint.
pub struct HttpPublisher {
    client: reqwest::Client,
    url: String,
}

impl HttpPublisher {
    /// Create a publisher for the given endpoint with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> PublishResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Endpoint this publisher posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Publisher for HttpPublisher {
    /// Spawn the request on the current tokio runtime and return at once.
    ///
    /// Must be called from within a runtime. Transport failures and
    /// non-success statuses are logged and swallowed.
    fn publish(&self, payload: TogglesPayload) {
        let client = self.client.clone();
        let url = self.url.clone();
        tokio::spawn(async move {
            match client.post(url.as_str()).json(&payload).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!("Pushed controls to {}", url);
                }
                Ok(response) => {
                    tracing::warn!("Control push rejected: HTTP {}", response.status());
                }
                Err(e) => {
                    tracing::warn!("Control push failed: {}", e);
                }
            }
        });
    }
}
