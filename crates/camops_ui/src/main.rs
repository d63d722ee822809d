//! Camera Ops Dashboard - Main entry point
//!
//! This is the terminal front-end for the camera analytics backend. It handles:
//! - Configuration loading
//! - File-based logging initialization (stdout belongs to the dashboard)
//! - Background worker startup (metrics stream, video probe)
//! - Terminal setup and the dashboard event loop

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::watch;

use camops_core::config::ConfigManager;
use camops_core::controls::ControlStore;
use camops_core::logging::init_tracing_with_file;
use camops_core::publish::HttpPublisher;
use camops_core::stream::{run_metrics_stream, MetricsFeed};

mod app;
mod theme;
mod ui;
mod video;

use app::App;
use video::{run_video_probe, VideoStatus};

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (needed for logs directory path)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    // The rolling appender needs the logs directory to exist
    if let Err(e) = config_manager.ensure_dirs_exist() {
        eprintln!("Warning: Failed to create directories: {}", e);
    }

    let logs_dir = config_manager.logs_folder();
    let _log_guard = init_tracing_with_file(config_manager.settings().logging.level, &logs_dir);

    tracing::info!("Camera Ops Dashboard starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", camops_core::version());

    let settings = config_manager.settings().clone();

    // Shared metrics state, fed by the background stream reader
    let feed = MetricsFeed::shared();
    let stream_task = tokio::spawn(run_metrics_stream(
        settings.endpoints.metrics_ws.clone(),
        feed.clone(),
        settings.stream.reconnect_delay(),
    ));

    // Video feed liveness probe
    let (video_tx, video_rx) = watch::channel(VideoStatus::Checking);
    let probe_task = tokio::spawn(run_video_probe(
        settings.endpoints.video_feed_url(),
        settings.stream.video_probe_interval(),
        video_tx,
    ));

    // Control state, pushed to the backend on every mutation
    let publisher =
        HttpPublisher::new(settings.endpoints.toggles_url(), settings.publish.timeout())
            .context("Failed to build control publisher")?;
    let store = ControlStore::new(Arc::new(publisher));

    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;

    let mut app = App::new(store, feed, settings.endpoints.video_feed_url(), video_rx);
    let result = app.run(&mut terminal).await;

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    stream_task.abort();
    probe_task.abort();

    tracing::info!("Camera Ops Dashboard exiting");
    result
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo `setup_terminal` so the shell gets a usable terminal back.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
