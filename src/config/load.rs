use std::{env, path::PathBuf};

use super::schema::Settings;

/// Columns the progress line needs besides the bar cells: 2 borders, 2 padding,
/// 4 indent, `[` and `]`, and ` MM:SS/MM:SS`.
pub const PROGRESS_LINE_OVERHEAD: usize = 2 + 2 + 4 + 2 + 12;

/// Configuration loading helpers.
///
/// `Settings::load` reads the optional config file first, then lets environment
/// variables (prefix `NOWPLAY__`) override it and falls back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path())
    }

    /// Load settings from an explicit (optional) config file and the environment.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("NOWPLAY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.player.command.trim().is_empty() {
            return Err("player.command must not be empty".to_string());
        }
        if self.player.poll_interval_ms == 0 {
            return Err("player.poll_interval_ms must be >= 1".to_string());
        }
        if self.ui.field_width < 4 {
            return Err("ui.field_width must be >= 4".to_string());
        }
        if self.ui.bar_width == 0 {
            return Err("ui.bar_width must be >= 1".to_string());
        }
        if usize::from(self.ui.box_width) < self.ui.bar_width + PROGRESS_LINE_OVERHEAD {
            return Err("ui.box_width is too small for ui.bar_width".to_string());
        }

        let keys = [
            self.controls.play_pause,
            self.controls.next,
            self.controls.previous,
            self.controls.quit,
        ];
        for (i, k) in keys.iter().enumerate() {
            if keys[i + 1..].contains(k) {
                return Err(format!("controls: key '{k}' is bound more than once"));
            }
        }
        Ok(())
    }
}

/// Resolve the config path from `NOWPLAY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("NOWPLAY_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/nowplay/config.toml`
/// or `~/.config/nowplay/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("nowplay").join("config.toml"))
}

/// Default log file under `$XDG_STATE_HOME/nowplay/` or `~/.local/state/nowplay/`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("nowplay").join("nowplay.log"))
}
