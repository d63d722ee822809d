//! Configuration management for the Camera Ops Dashboard.
//!
//! This module provides:
//! - TOML-based settings with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults applied for any missing field on load
//!
//! # Example
//!
//! ```no_run
//! use camops_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! println!("API base: {}", config.settings().endpoints.api_base);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    EndpointSettings, LoggingSettings, PathSettings, PublishSettings, Settings, StreamSettings,
};
