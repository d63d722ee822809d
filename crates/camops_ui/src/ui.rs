//! Dashboard render layer.
//!
//! Layout, top to bottom:
//! - header with connection status
//! - three metric tiles (FPS, people, frames)
//! - people-count sparkline over the series window
//! - video feed address and liveness
//! - control panel
//! - key legend

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use camops_core::controls::ControlState;
use camops_core::models::MetricsSample;

use crate::app::App;
use crate::theme;
use crate::video::VideoStatus;

/// Snapshot of everything the widgets need, taken once per frame.
struct FrameData {
    current: Option<MetricsSample>,
    counts: Vec<u64>,
    latest_label: Option<String>,
    connected: bool,
    controls: ControlState,
    video_url: String,
    video: VideoStatus,
}

impl FrameData {
    fn capture(app: &App) -> Self {
        let (current, counts, latest_label, connected) = {
            let feed = app.feed().lock();
            (
                feed.current(),
                feed.window().counts(),
                feed.window().latest().map(|p| p.label.clone()),
                feed.connected(),
            )
        };

        Self {
            current,
            counts,
            latest_label,
            connected,
            controls: app.controls(),
            video_url: app.video_url().to_string(),
            video: app.video_status(),
        }
    }
}

/// Render one frame of the dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    let data = FrameData::capture(app);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(11),
        Constraint::Length(1),
    ])
    .split(frame.area());

    draw_header(frame, rows[0], &data);
    draw_metrics(frame, rows[1], &data);
    draw_chart(frame, rows[2], &data);
    draw_video(frame, rows[3], &data);
    draw_controls(frame, rows[4], &data);
    draw_legend(frame, rows[5]);
}

fn draw_header(frame: &mut Frame, area: Rect, data: &FrameData) {
    let stream = if data.connected {
        Span::styled("stream: live", theme::status(true))
    } else {
        Span::styled("stream: reconnecting", theme::status(false))
    };

    let line = Line::from(vec![
        Span::styled("Camera Ops Dashboard", theme::title()),
        Span::raw("  |  "),
        stream,
        Span::raw("  |  "),
        Span::styled(
            format!("video: {}", data.video.label()),
            theme::status(data.video == VideoStatus::Live),
        ),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_metrics(frame: &mut Frame, area: Rect, data: &FrameData) {
    let tiles = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let (fps, people, frames) = match data.current {
        Some(sample) => (
            format!("{:.1}", sample.fps),
            sample.people_count.to_string(),
            sample.frame_count.to_string(),
        ),
        None => ("--".to_string(), "--".to_string(), "--".to_string()),
    };

    metric_tile(frame, tiles[0], "FPS", fps);
    metric_tile(frame, tiles[1], "People", people);
    metric_tile(frame, tiles[2], "Frames", frames);
}

fn metric_tile(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let tile = Paragraph::new(Line::from(Span::styled(value, theme::title()))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label.to_string()),
    );
    frame.render_widget(tile, area);
}

fn draw_chart(frame: &mut Frame, area: Rect, data: &FrameData) {
    let title = match &data.latest_label {
        Some(label) => format!("People Count ({} samples, last {})", data.counts.len(), label),
        None => "People Count".to_string(),
    };

    let chart = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(theme::colors::ACCENT))
        .data(&data.counts);
    frame.render_widget(chart, area);
}

fn draw_video(frame: &mut Frame, area: Rect, data: &FrameData) {
    let line = match data.video {
        VideoStatus::Offline => Line::from(Span::styled("Video Stream Offline", theme::offline())),
        status => Line::from(vec![
            Span::styled(
                format!("{}  ", status.label()),
                theme::status(status == VideoStatus::Live),
            ),
            Span::raw(data.video_url.clone()),
        ]),
    };

    let panel =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Video feed"));
    frame.render_widget(panel, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, data: &FrameData) {
    let state = &data.controls;

    let lines = vec![
        control_line("t", "Tracking", on_off(state.tracking), theme::toggle(state.tracking)),
        control_line("r", "Trails", on_off(state.trails), theme::toggle(state.trails)),
        control_line(
            "s",
            "Segmentation",
            on_off(state.segmentation),
            theme::toggle(state.segmentation),
        ),
        control_line("p", "Pose", on_off(state.pose), theme::toggle(state.pose)),
        control_line("h", "Heatmap", on_off(state.heatmap), theme::toggle(state.heatmap)),
        control_line("[ ]", "Trail length", state.trail_length.to_string(), Style::default()),
        control_line("- =", "Model size", state.model_size().name().to_string(), Style::default()),
        control_line("↓ ↑", "Confidence", format!("{:.2}", state.confidence), Style::default()),
        control_line(
            "space",
            "Paused",
            on_off(state.paused),
            if state.paused {
                theme::offline()
            } else {
                theme::toggle(false)
            },
        ),
    ];

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(panel, area);
}

fn control_line(key: &str, label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<6}", key), theme::hint()),
        Span::raw(format!("{:<14}", label)),
        Span::styled(value, value_style),
    ])
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

fn draw_legend(frame: &mut Frame, area: Rect) {
    let legend = Paragraph::new(Line::from(Span::styled(
        " toggles: t/r/s/p/h   sliders: [ ] - = ↓ ↑   pause: space   quit: q",
        theme::hint(),
    )));
    frame.render_widget(legend, area);
}
