//! UI rendering helpers for the terminal user interface.
//!
//! The screen is split into an empty top band, a centered fixed-width
//! now-playing box and a controls line at the bottom.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::{ControlsSettings, UiSettings};
use crate::format::{format_mmss, progress_filled};
use crate::player::NowPlaying;


const INDENT: &str = "    ";
const CONTROLS_HEIGHT: u16 = 5;

/// Human-readable name for a bound key.
fn key_label(c: char) -> String {
    match c {
        ' ' => "space".to_string(),
        c => c.to_string(),
    }
}

/// A green `label` followed by `value`, indented like the rest of the box.
fn field_line(label: &'static str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(INDENT),
        label.green(),
        Span::raw(" "),
        Span::raw(value.to_string()),
    ])
}

/// `[████------] MM:SS/MM:SS`
fn progress_line(np: &NowPlaying, bar_width: usize) -> Line<'static> {
    let filled = progress_filled(np.position, np.length, bar_width);
    Line::from(vec![
        Span::raw(INDENT),
        Span::raw("["),
        "█".repeat(filled).green(),
        "-".repeat(bar_width - filled).white(),
        Span::raw("]"),
        Span::raw(format!(
            " {}/{}",
            format_mmss(np.position),
            format_mmss(np.length)
        )),
    ])
}

fn track_lines(np: &NowPlaying, ui: &UiSettings) -> Vec<Line<'static>> {
    let status = if np.is_playing() {
        Span::raw(np.status.clone())
    } else {
        np.status.clone().yellow()
    };

    vec![
        Line::default(),
        field_line("Title: ", &np.title),
        field_line("Artist:", &np.artist),
        field_line("Album: ", &np.album),
        Line::from(vec![Span::raw(INDENT), "Status:".green(), Span::raw(" "), status]),
        Line::default(),
        progress_line(np, ui.bar_width),
    ]
}

fn placeholder_lines(app: &App, message: String) -> Vec<Line<'static>> {
    let style = if matches!(app.last_poll, Some(Err(_))) {
        Style::default().red()
    } else {
        Style::default()
    };
    vec![
        Line::default(),
        Line::from(vec![Span::raw(INDENT), Span::styled(message, style)]),
    ]
}

/// The key help line, built from the configured bindings.
fn controls_line(controls: &ControlsSettings) -> Line<'static> {
    let entries = [
        ("Play/Pause: ", controls.play_pause),
        ("Next: ", controls.next),
        ("Previous: ", controls.previous),
        ("Quit: ", controls.quit),
    ];

    let mut spans = Vec::with_capacity(entries.len() * 3);
    for (i, (label, key)) in entries.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::raw(label));
        spans.push(key_label(key).green());
    }
    Line::from(spans)
}

/// Split the screen into the box area and the controls area.
fn layout(area: Rect, box_width: u16) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(4),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(box_width),
            Constraint::Fill(1),
        ])
        .split(rows[1]);

    (cols[1], rows[2])
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, ui: &UiSettings, controls: &ControlsSettings) {
    let (box_area, controls_area) = layout(frame.area(), ui.box_width);

    let lines = match app.now_playing() {
        Some(np) => track_lines(np, ui),
        None => placeholder_lines(app, app.placeholder().unwrap_or_default()),
    };

    let song = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(ui.title_text.as_str())
                .title_alignment(Alignment::Center)
                .border_style(Style::default().green())
                .title_style(Style::default().green())
                .padding(Padding::uniform(1)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(song, box_area);

    let mut footer = vec![Line::default(), controls_line(controls)];
    if let Some(err) = &app.control_error {
        footer.push(Line::from(err.clone().red()));
    }
    let footer = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, controls_area);
}
