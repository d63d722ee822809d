//! Metrics structures received from the analytics backend.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// One snapshot of pipeline output, pushed once per detection cycle.
///
/// A new sample fully replaces the previous one; there is no partial merge.
/// Messages missing a field fail to parse and are dropped by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSample {
    /// Frames per second the pipeline is currently achieving.
    pub fps: f64,
    /// People detected in the latest frame.
    pub people_count: u64,
    /// Cumulative frames processed since pipeline start.
    pub frame_count: u64,
}

/// One charted observation: people count at local receipt time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Display label, unpadded local `hour:minute:second` at receipt.
    pub label: String,
    /// People count carried over from the sample.
    pub count: u64,
}

impl SeriesPoint {
    /// Build a point from a receipt time and a people count.
    pub fn at(time: DateTime<Local>, count: u64) -> Self {
        Self {
            label: format!("{}:{}:{}", time.hour(), time.minute(), time.second()),
            count,
        }
    }
}
