//! Now-playing data and the errors produced while polling the player.

use std::time::Duration;

use thiserror::Error;

use super::runner::RunError;

/// Transport commands understood by playerctl.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlCmd {
    PlayPause,
    Next,
    Prev,
}

impl ControlCmd {
    /// The playerctl subcommand for this action.
    pub fn as_arg(self) -> &'static str {
        match self {
            Self::PlayPause => "play-pause",
            Self::Next => "next",
            Self::Prev => "previous",
        }
    }
}

/// One poll worth of track information, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Raw playerctl status (`Playing`, `Paused`, `Stopped`).
    pub status: String,
    pub position: Duration,
    /// Zero when the player does not report a length.
    pub length: Duration,
}

impl NowPlaying {
    pub fn is_playing(&self) -> bool {
        self.status.eq_ignore_ascii_case("playing")
    }
}

/// Outcome of a poll that reached the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Track(NowPlaying),
    NothingPlaying,
    UnexpectedFormat,
}

impl Snapshot {
    /// Placeholder text for outcomes that carry no track.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Track(_) => None,
            Self::NothingPlaying => Some("No song is currently playing."),
            Self::UnexpectedFormat => Some("Unexpected output format."),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Can't run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't get player metadata for {player}")]
    Metadata {
        player: String,
        #[source]
        source: RunError,
    },

    #[error("Can't get track length")]
    Length(#[source] RunError),

    #[error("Can't get track position")]
    Position(#[source] RunError),

    #[error("Can't execute {command}")]
    Control {
        command: &'static str,
        #[source]
        source: RunError,
    },
}

impl PlayerError {
    /// Wrap a runner failure, keeping spawn failures distinct from player errors.
    pub(crate) fn from_run(err: RunError, wrap: impl FnOnce(RunError) -> Self) -> Self {
        match err {
            RunError::Spawn { program, source } => Self::Spawn { program, source },
            other => wrap(other),
        }
    }
}
