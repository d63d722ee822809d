//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Detection model size preset.
///
/// The backend selects model weights from a single-letter code; the control
/// panel shows the full display name. The order here is the slider order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelSize {
    /// Smallest and fastest weights.
    #[serde(rename = "n")]
    Nano,
    #[serde(rename = "s")]
    Small,
    /// Balanced default.
    #[default]
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
    /// Highest accuracy, slowest inference.
    #[serde(rename = "x")]
    XLarge,
}

impl ModelSize {
    /// Get the display name for this size.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nano => "Nano",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::XLarge => "X-Large",
        }
    }

    /// Get the single-letter wire code for this size.
    pub fn wire_code(&self) -> &'static str {
        match self {
            Self::Nano => "n",
            Self::Small => "s",
            Self::Medium => "m",
            Self::Large => "l",
            Self::XLarge => "x",
        }
    }

    /// Get all available sizes in slider order.
    pub fn all() -> &'static [ModelSize] {
        &[
            Self::Nano,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::XLarge,
        ]
    }

    /// Create from index (for UI sliders). Out-of-range falls back to Medium.
    pub fn from_index(index: usize) -> Self {
        Self::all().get(index).copied().unwrap_or_default()
    }

    /// Get index of this size (for UI sliders).
    pub fn to_index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_code() {
        let json = serde_json::to_string(&ModelSize::Medium).unwrap();
        assert_eq!(json, "\"m\"");
        let json = serde_json::to_string(&ModelSize::XLarge).unwrap();
        assert_eq!(json, "\"x\"");
    }

    #[test]
    fn deserializes_wire_code() {
        let size: ModelSize = serde_json::from_str("\"n\"").unwrap();
        assert_eq!(size, ModelSize::Nano);
    }

    #[test]
    fn index_resolution_follows_slider_order() {
        let codes: Vec<&str> = (0..5).map(|i| ModelSize::from_index(i).wire_code()).collect();
        assert_eq!(codes, ["n", "s", "m", "l", "x"]);
    }

    #[test]
    fn out_of_range_index_falls_back_to_medium() {
        assert_eq!(ModelSize::from_index(5), ModelSize::Medium);
        assert_eq!(ModelSize::from_index(usize::MAX), ModelSize::Medium);
    }

    #[test]
    fn index_round_trips() {
        for size in ModelSize::all() {
            assert_eq!(ModelSize::from_index(size.to_index()), *size);
        }
    }

    #[test]
    fn display_uses_panel_labels() {
        assert_eq!(ModelSize::XLarge.to_string(), "X-Large");
        assert_eq!(ModelSize::Nano.to_string(), "Nano");
    }
}
