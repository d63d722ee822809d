//! Metrics stream ingestion.
//!
//! `run_metrics_stream` maintains the WebSocket subscription and writes
//! into the shared `MetricsFeed`; the presentation layer reads the feed on
//! every frame. Connection losses are absorbed by the reconnect loop.

mod feed;
mod reader;

pub use feed::{MetricsFeed, SharedMetricsFeed};
pub use reader::{run_metrics_stream, DEFAULT_RECONNECT_DELAY};
