//! Configuration intent state and its reducer.

use crate::models::{ModelSize, TogglesPayload};

/// The client's desired pipeline settings.
///
/// Authoritative locally; pushed whole to the backend after every change.
/// Never persisted: a session starts from the defaults and the backend
/// keeps whatever was last pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    /// Draw bounding boxes and track IDs.
    pub tracking: bool,
    /// Draw motion trails behind tracked people.
    pub trails: bool,
    /// Instance segmentation overlay. Mutually exclusive with `pose`.
    pub segmentation: bool,
    /// Pose skeleton overlay. Mutually exclusive with `segmentation`.
    pub pose: bool,
    /// Presence heatmap overlay.
    pub heatmap: bool,
    /// Trail length in frames, 20..=120 in steps of 5.
    pub trail_length: u32,
    /// Index into the ordered model size table, 0..=4.
    pub model_size_index: usize,
    /// Detection confidence threshold, 0.05..=0.95 in steps of 0.05.
    pub confidence: f64,
    /// Pause the pipeline, freezing the displayed frame.
    pub paused: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            tracking: true,
            trails: false,
            segmentation: false,
            pose: false,
            heatmap: false,
            trail_length: 60,
            model_size_index: ModelSize::Medium.to_index(),
            confidence: 0.25,
            paused: false,
        }
    }
}

/// A single-field change applied through the reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlChange {
    Tracking(bool),
    Trails(bool),
    Segmentation(bool),
    Pose(bool),
    Heatmap(bool),
    TrailLength(u32),
    ModelSizeIndex(usize),
    Confidence(f64),
    Paused(bool),
}

impl ControlState {
    /// Apply one field change.
    ///
    /// Enabling segmentation forces pose off and vice versa, within the
    /// same transition; disabling either leaves the other untouched.
    pub fn apply(&mut self, change: ControlChange) {
        match change {
            ControlChange::Tracking(on) => self.tracking = on,
            ControlChange::Trails(on) => self.trails = on,
            ControlChange::Segmentation(on) => {
                self.segmentation = on;
                if on {
                    self.pose = false;
                }
            }
            ControlChange::Pose(on) => {
                self.pose = on;
                if on {
                    self.segmentation = false;
                }
            }
            ControlChange::Heatmap(on) => self.heatmap = on,
            ControlChange::TrailLength(frames) => self.trail_length = frames,
            ControlChange::ModelSizeIndex(index) => self.model_size_index = index,
            ControlChange::Confidence(threshold) => self.confidence = threshold,
            ControlChange::Paused(on) => self.paused = on,
        }
    }

    /// Resolve the size index through the ordered table.
    pub fn model_size(&self) -> ModelSize {
        ModelSize::from_index(self.model_size_index)
    }

    /// Snapshot the full state in the backend's wire schema.
    pub fn to_payload(&self) -> TogglesPayload {
        TogglesPayload {
            tracking: self.tracking,
            trails: self.trails,
            segmentation: self.segmentation,
            pose: self.pose,
            heatmap: self.heatmap,
            trail_length: self.trail_length,
            model_size: self.model_size(),
            confidence: self.confidence,
            paused: self.paused,
        }
    }
}
