//! Metrics stream worker: connect, consume, reconnect forever.

use std::time::Duration;

use chrono::Local;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::models::MetricsSample;

use super::feed::SharedMetricsFeed;

/// Delay between reconnect attempts when the stream is unavailable.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(3000);

/// Drive the metrics subscription until the task is dropped.
///
/// Refused connections and mid-stream losses both end in a fixed sleep and
/// a fresh attempt; there is no backoff growth and no attempt limit.
/// Payloads that fail to parse are dropped, keeping the previous sample.
pub async fn run_metrics_stream(url: String, feed: SharedMetricsFeed, reconnect_delay: Duration) {
    loop {
        match connect_async(url.as_str()).await {
            Ok((mut ws, _response)) => {
                tracing::info!("Metrics stream connected: {}", url);
                feed.lock().set_connected(true);

                while let Some(message) = ws.next().await {
                    match message {
                        Ok(Message::Text(text)) => {
                            match serde_json::from_str::<MetricsSample>(&text) {
                                Ok(sample) => feed.lock().apply_sample(sample, Local::now()),
                                Err(e) => {
                                    tracing::debug!("Dropping malformed metrics payload: {}", e);
                                }
                            }
                        }
                        Ok(Message::Ping(data)) => {
                            if ws.send(Message::Pong(data)).await.is_err() {
                                break;
                            }
                        }
                        Ok(Message::Close(_)) => break,
                        Ok(_) => {}
                        Err(e) => {
                            tracing::warn!("Metrics stream error: {}", e);
                            break;
                        }
                    }
                }

                feed.lock().set_connected(false);
                tracing::warn!(
                    "Metrics stream disconnected, retrying in {} ms",
                    reconnect_delay.as_millis()
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Metrics stream unavailable ({}), retrying in {} ms",
                    e,
                    reconnect_delay.as_millis()
                );
            }
        }

        tokio::time::sleep(reconnect_delay).await;
    }
}
