use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;

use crate::config::{LoggingSettings, default_log_path};

/// Install a file-backed `tracing` subscriber.
///
/// The terminal belongs to the TUI, so logs only ever go to a file. Returns the
/// file in use, or `None` when logging is off or could not be set up.
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    if !settings.enabled {
        return None;
    }

    let level = match settings.level.parse::<Level>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!(
                "nowplay: unknown log level {:?}, using info",
                settings.level
            );
            Level::INFO
        }
    };

    let path = settings.file.clone().or_else(default_log_path)?;
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("nowplay: cannot create {}: {e}", dir.display());
            return None;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("nowplay: cannot open log file {}: {e}", path.display());
            return None;
        }
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .ok()?;

    Some(path)
}
