//! Dashboard application state and event loop.
//!
//! The loop alternates between drawing and waiting on the next terminal
//! event or redraw tick. Every key press resolves to at most one `Action`,
//! and every state-changing action dispatches exactly one `ControlChange`.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::watch;

use camops_core::controls::{ControlChange, ControlState, ControlStore};
use camops_core::models::ModelSize;
use camops_core::stream::SharedMetricsFeed;

use crate::ui;
use crate::video::VideoStatus;

/// How often the dashboard redraws between input events.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Trail length slider bounds and step.
const TRAIL_MIN: u32 = 20;
const TRAIL_MAX: u32 = 120;
const TRAIL_STEP: u32 = 5;

/// Confidence slider bounds and step, counted in twentieths (0.05 each).
const CONFIDENCE_MIN_STEPS: i32 = 1;
const CONFIDENCE_MAX_STEPS: i32 = 19;

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTracking,
    ToggleTrails,
    ToggleSegmentation,
    TogglePose,
    ToggleHeatmap,
    TogglePause,
    TrailShorter,
    TrailLonger,
    SmallerModel,
    LargerModel,
    ConfidenceDown,
    ConfidenceUp,
}

/// Map a key press to a dashboard action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTracking),
        KeyCode::Char('r') => Some(Action::ToggleTrails),
        KeyCode::Char('s') => Some(Action::ToggleSegmentation),
        KeyCode::Char('p') => Some(Action::TogglePose),
        KeyCode::Char('h') => Some(Action::ToggleHeatmap),
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('[') => Some(Action::TrailShorter),
        KeyCode::Char(']') => Some(Action::TrailLonger),
        KeyCode::Char('-') => Some(Action::SmallerModel),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(Action::LargerModel),
        KeyCode::Down => Some(Action::ConfidenceDown),
        KeyCode::Up => Some(Action::ConfidenceUp),
        _ => None,
    }
}

/// Top-level dashboard state.
pub struct App {
    store: ControlStore,
    controls: watch::Receiver<ControlState>,
    feed: SharedMetricsFeed,
    video_url: String,
    video: watch::Receiver<VideoStatus>,
    should_quit: bool,
}

impl App {
    pub fn new(
        store: ControlStore,
        feed: SharedMetricsFeed,
        video_url: String,
        video: watch::Receiver<VideoStatus>,
    ) -> Self {
        let controls = store.subscribe();
        Self {
            store,
            controls,
            feed,
            video_url,
            video,
            should_quit: false,
        }
    }

    /// Run the dashboard until the user quits.
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if let Some(action) = action_for(key) {
                                self.apply(action);
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        None => break,
                    }
                }
                _ = tick.tick() => {}
            }
        }

        Ok(())
    }

    /// Apply one dashboard action.
    ///
    /// Slider actions clamp here so the store only ever sees in-range
    /// values; a step that would leave the value unchanged dispatches
    /// nothing at all.
    pub fn apply(&mut self, action: Action) {
        let state = self.store.state().clone();

        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTracking => {
                self.store.dispatch(ControlChange::Tracking(!state.tracking));
            }
            Action::ToggleTrails => {
                self.store.dispatch(ControlChange::Trails(!state.trails));
            }
            Action::ToggleSegmentation => {
                self.store
                    .dispatch(ControlChange::Segmentation(!state.segmentation));
            }
            Action::TogglePose => {
                self.store.dispatch(ControlChange::Pose(!state.pose));
            }
            Action::ToggleHeatmap => {
                self.store.dispatch(ControlChange::Heatmap(!state.heatmap));
            }
            Action::TogglePause => {
                self.store.dispatch(ControlChange::Paused(!state.paused));
            }
            Action::TrailShorter => {
                let next = state.trail_length.saturating_sub(TRAIL_STEP).max(TRAIL_MIN);
                if next != state.trail_length {
                    self.store.dispatch(ControlChange::TrailLength(next));
                }
            }
            Action::TrailLonger => {
                let next = (state.trail_length + TRAIL_STEP).min(TRAIL_MAX);
                if next != state.trail_length {
                    self.store.dispatch(ControlChange::TrailLength(next));
                }
            }
            Action::SmallerModel => {
                if let Some(next) = state.model_size_index.checked_sub(1) {
                    self.store.dispatch(ControlChange::ModelSizeIndex(next));
                }
            }
            Action::LargerModel => {
                let next = state.model_size_index + 1;
                if next < ModelSize::all().len() {
                    self.store.dispatch(ControlChange::ModelSizeIndex(next));
                }
            }
            Action::ConfidenceDown => self.step_confidence(&state, -1),
            Action::ConfidenceUp => self.step_confidence(&state, 1),
        }
    }

    /// Step confidence by one 0.05 increment, clamped to [0.05, 0.95].
    ///
    /// Arithmetic runs on whole step counts so repeated presses cannot
    /// accumulate float drift.
    fn step_confidence(&mut self, state: &ControlState, direction: i32) {
        let steps = (state.confidence * 20.0).round() as i32;
        let next = (steps + direction).clamp(CONFIDENCE_MIN_STEPS, CONFIDENCE_MAX_STEPS);
        if next != steps {
            self.store
                .dispatch(ControlChange::Confidence(f64::from(next) / 20.0));
        }
    }

    /// Latest control state, as observed through the store's watch channel.
    pub fn controls(&self) -> ControlState {
        self.controls.borrow().clone()
    }

    pub fn feed(&self) -> &SharedMetricsFeed {
        &self.feed
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn video_status(&self) -> VideoStatus {
        *self.video.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camops_core::models::TogglesPayload;
    use camops_core::publish::Publisher;
    use std::sync::Arc;

    struct NullPublisher;

    impl Publisher for NullPublisher {
        fn publish(&self, _payload: TogglesPayload) {}
    }

    fn test_app() -> App {
        let store = ControlStore::new(Arc::new(NullPublisher));
        let (_video_tx, video_rx) = watch::channel(VideoStatus::Checking);
        App::new(
            store,
            camops_core::stream::MetricsFeed::shared(),
            "http://localhost:8000/video".to_string(),
            video_rx,
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_map_to_quit() {
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for(press(KeyCode::Char('z'))), None);
        assert_eq!(action_for(press(KeyCode::Tab)), None);
    }

    #[test]
    fn toggle_actions_flip_state() {
        let mut app = test_app();
        assert!(app.controls().tracking);

        app.apply(Action::ToggleTracking);
        assert!(!app.controls().tracking);

        app.apply(Action::TogglePause);
        assert!(app.controls().paused);
    }

    #[test]
    fn overlay_toggles_stay_mutually_exclusive() {
        let mut app = test_app();

        app.apply(Action::ToggleSegmentation);
        app.apply(Action::TogglePose);

        let state = app.controls();
        assert!(!state.segmentation);
        assert!(state.pose);
    }

    #[test]
    fn trail_length_clamps_at_both_ends() {
        let mut app = test_app();
        assert_eq!(app.controls().trail_length, 60);

        for _ in 0..20 {
            app.apply(Action::TrailLonger);
        }
        assert_eq!(app.controls().trail_length, 120);

        for _ in 0..30 {
            app.apply(Action::TrailShorter);
        }
        assert_eq!(app.controls().trail_length, 20);
    }

    #[test]
    fn model_size_stops_at_the_table_edges() {
        let mut app = test_app();
        assert_eq!(app.controls().model_size_index, 2);

        for _ in 0..5 {
            app.apply(Action::LargerModel);
        }
        assert_eq!(app.controls().model_size_index, 4);

        for _ in 0..8 {
            app.apply(Action::SmallerModel);
        }
        assert_eq!(app.controls().model_size_index, 0);
    }

    #[test]
    fn confidence_steps_in_twentieths_and_clamps() {
        let mut app = test_app();

        app.apply(Action::ConfidenceUp);
        assert!((app.controls().confidence - 0.30).abs() < 1e-9);

        for _ in 0..30 {
            app.apply(Action::ConfidenceUp);
        }
        assert!((app.controls().confidence - 0.95).abs() < 1e-9);

        for _ in 0..40 {
            app.apply(Action::ConfidenceDown);
        }
        assert!((app.controls().confidence - 0.05).abs() < 1e-9);
    }
}
