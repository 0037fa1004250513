use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/nowplay/config.toml` or `~/.config/nowplay/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `NOWPLAY__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Executable used to talk to MPRIS players.
    pub command: String,
    /// Player passed as `-p <name>`. Empty lets playerctl pick the active one.
    pub name: String,
    /// Time between two metadata polls (milliseconds).
    pub poll_interval_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            command: "playerctl".to_string(),
            name: "spotify".to_string(),
            poll_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title rendered on the now-playing box border.
    pub title_text: String,
    /// Outer width of the now-playing box (columns, borders included).
    pub box_width: u16,
    /// Maximum characters shown for title, artist and album.
    pub field_width: usize,
    /// Number of cells in the progress bar.
    pub bar_width: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title_text: "  Now Playing ".to_string(),
            box_width: 52,
            field_width: 30,
            bar_width: 25,
        }
    }
}

/// Single-key bindings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    pub play_pause: char,
    pub next: char,
    pub previous: char,
    pub quit: char,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            play_pause: 'p',
            next: 'n',
            previous: 'b',
            quit: 'q',
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub enabled: bool,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/nowplay/nowplay.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}
