use std::io::Write;
use std::time::Duration;

use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::player::{PlayerWorker, Playerctl};

mod cli;
mod event_loop;
mod logging;
mod settings;

/// Puts the terminal back in cooked mode when dropped, on every exit path.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to disable raw mode");
        }
        if let Err(e) = restore_screen(&mut std::io::stdout()) {
            tracing::warn!(error = %e, "failed to restore screen");
        }
    }
}

/// Leave the alternate screen and show the cursor again.
fn restore_screen<W: Write>(out: &mut W) -> std::io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();
    let settings = settings::load_settings(&args);
    let log_file = logging::init(&settings.logging);

    tracing::info!(
        player = %settings.player.name,
        command = %settings.player.command,
        interval_ms = settings.player.poll_interval_ms,
        log_file = ?log_file,
        "starting"
    );

    let player = Playerctl::new(&settings.player, settings.ui.field_width);
    let worker = PlayerWorker::spawn(
        player,
        Duration::from_millis(settings.player.poll_interval_ms),
    );
    let mut app = App::new();

    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &worker);
    if let Err(e) = &run_result {
        tracing::error!(error = %e, "event loop failed");
    }

    run_result
}
