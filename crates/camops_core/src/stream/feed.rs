//! Shared live-metrics state updated by the stream reader.

use std::sync::Arc;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use crate::models::{MetricsSample, SeriesPoint};
use crate::series::SeriesWindow;

/// Shared handle to the feed. Locked briefly by the reader task on each
/// message and by the renderer on each frame.
pub type SharedMetricsFeed = Arc<Mutex<MetricsFeed>>;

/// Live metrics state: the charted window, the current sample, and the
/// stream connection flag.
#[derive(Debug, Default)]
pub struct MetricsFeed {
    window: SeriesWindow,
    current: Option<MetricsSample>,
    connected: bool,
}

impl MetricsFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New feed behind the shared handle.
    #[must_use]
    pub fn shared() -> SharedMetricsFeed {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Record one received sample.
    ///
    /// The window gains its point before the current sample is replaced,
    /// so chart and counters always reflect the same observation.
    pub fn apply_sample(&mut self, sample: MetricsSample, received_at: DateTime<Local>) {
        self.window
            .push(SeriesPoint::at(received_at, sample.people_count));
        self.current = Some(sample);
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Most recent sample, or none before the first message.
    pub fn current(&self) -> Option<MetricsSample> {
        self.current
    }

    /// Whether the subscription is currently up.
    pub fn connected(&self) -> bool {
        self.connected
    }

    /// The charted window.
    pub fn window(&self) -> &SeriesWindow {
        &self.window
    }
}
