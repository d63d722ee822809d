//! Video feed liveness probe.
//!
//! A terminal cannot render the MJPEG stream, so the dashboard shows the
//! feed address plus a live/offline indicator instead. Liveness is checked
//! by issuing a GET and waiting only for response headers; the endless
//! stream body is never read.

use std::time::Duration;

use tokio::sync::watch;

/// Observed state of the video feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStatus {
    /// No probe has completed yet.
    Checking,
    /// The endpoint is serving the stream.
    Live,
    /// The endpoint is unreachable or answered with an error.
    Offline,
}

impl VideoStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VideoStatus::Checking => "checking",
            VideoStatus::Live => "live",
            VideoStatus::Offline => "offline",
        }
    }
}

/// A serving endpoint answers with headers immediately; a response slower
/// than this counts as offline.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Periodically probe the video feed and publish its status.
///
/// Runs until the task is aborted. Status transitions are logged; the
/// current value is always available through the watch channel.
pub async fn run_video_probe(url: String, interval: Duration, status: watch::Sender<VideoStatus>) {
    let client = match reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build video probe client: {}", e);
            return;
        }
    };

    loop {
        let observed = match tokio::time::timeout(PROBE_TIMEOUT, client.get(url.as_str()).send())
            .await
        {
            Ok(Ok(response)) if response.status().is_success() => VideoStatus::Live,
            Ok(Ok(response)) => {
                tracing::debug!("Video feed answered HTTP {}", response.status());
                VideoStatus::Offline
            }
            Ok(Err(e)) => {
                tracing::debug!("Video feed probe failed: {}", e);
                VideoStatus::Offline
            }
            Err(_) => {
                tracing::debug!("Video feed probe timed out");
                VideoStatus::Offline
            }
        };

        let previous = status.send_replace(observed);
        if previous != observed {
            tracing::info!("Video feed is {}", observed.label());
        }

        tokio::time::sleep(interval).await;
    }
}
