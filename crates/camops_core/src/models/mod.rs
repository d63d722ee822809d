//! Data models for the Camera Ops Dashboard.
//!
//! This module contains the core data structures shared across the engine:
//! - Metrics samples pushed by the backend and the charted series points
//! - The model size preset enum
//! - The wire payload for configuration pushes

mod enums;
mod metrics;
mod payload;

// Re-export all public types
pub use enums::ModelSize;
pub use metrics::{MetricsSample, SeriesPoint};
pub use payload::TogglesPayload;
