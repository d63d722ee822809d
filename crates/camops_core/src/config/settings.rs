//! Settings struct with TOML-based sections.
//!
//! Settings cover deployment wiring only (endpoints, timing, logs). The
//! pipeline configuration intent is never persisted; it lives in the
//! control store for the life of a session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Backend endpoint addresses.
    #[serde(default)]
    pub endpoints: EndpointSettings,

    /// Metrics stream and video probe timing.
    #[serde(default)]
    pub stream: StreamSettings,

    /// Configuration push behavior.
    #[serde(default)]
    pub publish: PublishSettings,

    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoints: EndpointSettings::default(),
            stream: StreamSettings::default(),
            publish: PublishSettings::default(),
            paths: PathSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Where the analytics backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// Base HTTP address of the backend API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// WebSocket address of the metrics push channel.
    #[serde(default = "default_metrics_ws")]
    pub metrics_ws: String,
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}

fn default_metrics_ws() -> String {
    "ws://localhost:8000/ws".to_string()
}

impl EndpointSettings {
    /// Endpoint receiving configuration pushes.
    pub fn toggles_url(&self) -> String {
        format!("{}/toggles", self.api_base.trim_end_matches('/'))
    }

    /// Address of the annotated MJPEG feed.
    pub fn video_feed_url(&self) -> String {
        format!("{}/video_feed", self.api_base.trim_end_matches('/'))
    }
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            metrics_ws: default_metrics_ws(),
        }
    }
}

/// Metrics stream and video probe timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamSettings {
    /// Delay before each reconnect attempt, in milliseconds.
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,

    /// Interval between video feed probes, in milliseconds.
    #[serde(default = "default_video_probe_interval_ms")]
    pub video_probe_interval_ms: u64,
}

fn default_reconnect_delay_ms() -> u64 {
    3000
}

fn default_video_probe_interval_ms() -> u64 {
    10_000
}

impl StreamSettings {
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    pub fn video_probe_interval(&self) -> Duration {
        Duration::from_millis(self.video_probe_interval_ms)
    }
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            reconnect_delay_ms: default_reconnect_delay_ms(),
            video_probe_interval_ms: default_video_probe_interval_ms(),
        }
    }
}

/// Configuration push behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishSettings {
    /// Client-side timeout for each push request, in milliseconds.
    #[serde(default = "default_publish_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_publish_timeout_ms() -> u64 {
    5000
}

impl PublishSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_publish_timeout_ms(),
        }
    }
}

/// Path configuration for logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level written to the log file.
    #[serde(default)]
    pub level: LogLevel,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[endpoints]"));
        assert!(toml.contains("[stream]"));
        assert!(toml.contains("api_base"));
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoints.api_base, settings.endpoints.api_base);
        assert_eq!(parsed.stream.reconnect_delay_ms, settings.stream.reconnect_delay_ms);
        assert_eq!(parsed.logging.level, settings.logging.level);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[endpoints]\napi_base = \"http://cam-host:9000\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.endpoints.api_base, "http://cam-host:9000");
        // Defaults applied for missing
        assert_eq!(parsed.endpoints.metrics_ws, "ws://localhost:8000/ws");
        assert_eq!(parsed.stream.reconnect_delay_ms, 3000);
        assert_eq!(parsed.publish.timeout_ms, 5000);
        assert_eq!(parsed.paths.logs_folder, ".logs");
    }

    #[test]
    fn derived_urls_strip_trailing_slash() {
        let endpoints = EndpointSettings {
            api_base: "http://cam-host:9000/".to_string(),
            metrics_ws: default_metrics_ws(),
        };
        assert_eq!(endpoints.toggles_url(), "http://cam-host:9000/toggles");
        assert_eq!(endpoints.video_feed_url(), "http://cam-host:9000/video_feed");
    }
}
