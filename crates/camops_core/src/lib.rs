//! Camera Ops core - state synchronization engine for the camera
//! operations dashboard.
//!
//! This crate contains all stream, store, and publish logic with zero UI
//! dependencies. It can be used by the terminal dashboard or a headless
//! monitor.

pub mod config;
pub mod controls;
pub mod logging;
pub mod models;
pub mod publish;
pub mod series;
pub mod stream;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
