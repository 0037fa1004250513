use std::path::PathBuf;

use clap::Parser;

/// Terminal now-playing display and remote for playerctl.
#[derive(Debug, Parser)]
#[command(name = "nowplay", version, about)]
pub struct Args {
    /// Player to follow (playerctl `-p`). Pass "" to follow the active player.
    #[arg(short, long)]
    pub player: Option<String>,

    /// Milliseconds between two metadata polls.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Config file to read instead of the default location.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
