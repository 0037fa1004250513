use crate::config;

use super::cli::Args;

pub fn load_settings(args: &Args) -> config::Settings {
    let loaded = match &args.config {
        Some(path) => config::Settings::load_from(Some(path.clone())),
        None => config::Settings::load(),
    };

    let mut settings = match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("nowplay: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("nowplay: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };

    apply_overrides(&mut settings, args);
    settings
}

/// Command-line flags win over every other source.
fn apply_overrides(settings: &mut config::Settings, args: &Args) {
    if let Some(player) = &args.player {
        settings.player.name = player.clone();
    }
    if let Some(ms) = args.interval_ms {
        settings.player.poll_interval_ms = ms;
    }
}
