//! Wire payload for configuration pushes.

use serde::{Deserialize, Serialize};

use super::enums::ModelSize;

/// Full configuration snapshot in the backend's wire schema.
///
/// Field names match the toggles endpoint body exactly; `model_size`
/// carries the single-letter code. Always a whole-state snapshot, never a
/// delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TogglesPayload {
    pub tracking: bool,
    pub trails: bool,
    pub segmentation: bool,
    pub pose: bool,
    pub heatmap: bool,
    pub trail_length: u32,
    pub model_size: ModelSize,
    pub confidence: f64,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let payload = TogglesPayload {
            tracking: true,
            trails: false,
            segmentation: false,
            pose: false,
            heatmap: false,
            trail_length: 60,
            model_size: ModelSize::Medium,
            confidence: 0.25,
            paused: false,
        };

        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["tracking"], true);
        assert_eq!(value["trail_length"], 60);
        assert_eq!(value["model_size"], "m");
        assert_eq!(value["confidence"], 0.25);
        assert_eq!(value["paused"], false);
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
}
