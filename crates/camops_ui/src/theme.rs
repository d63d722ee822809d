//! Theme configuration for the Camera Ops Dashboard.
//!
//! Dark palette matching the web dashboard this replaces.

use ratatui::style::{Color, Modifier, Style};

/// Dashboard colors.
pub mod colors {
    use super::Color;

    /// Primary accent color (titles, sparkline)
    pub const ACCENT: Color = Color::Cyan;

    /// Healthy/enabled state
    pub const OK: Color = Color::Green;

    /// Attention state (paused, reconnecting)
    pub const ALERT: Color = Color::Yellow;

    /// Offline/error state
    pub const OFFLINE: Color = Color::Red;

    /// Secondary text
    pub const MUTED: Color = Color::DarkGray;
}

/// Panel title style.
pub fn title() -> Style {
    Style::default()
        .fg(colors::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Connection/feed status style.
pub fn status(ok: bool) -> Style {
    if ok {
        Style::default().fg(colors::OK)
    } else {
        Style::default().fg(colors::ALERT)
    }
}

/// Toggle value style.
pub fn toggle(on: bool) -> Style {
    if on {
        Style::default().fg(colors::OK).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::MUTED)
    }
}

/// Offline indicator style.
pub fn offline() -> Style {
    Style::default()
        .fg(colors::OFFLINE)
        .add_modifier(Modifier::BOLD)
}

/// Key legend style.
pub fn hint() -> Style {
    Style::default().fg(colors::MUTED)
}
