//! Client for the `playerctl` command-line tool.
//!
//! Every poll runs three short-lived subprocesses (metadata, length, position)
//! and folds their output into a [`Snapshot`]. Transport commands are fire and
//! forget; their errors are returned for display only. Both run on the
//! [`PlayerWorker`] thread so a slow player never blocks key handling.

mod parse;
mod runner;
mod types;
mod worker;

pub use parse::{METADATA_FORMAT, MetadataLine, parse_length, parse_metadata, parse_position};
pub use runner::{CommandRunner, RunError, SystemRunner};
pub use types::{ControlCmd, NowPlaying, PlayerError, Snapshot};
pub use worker::{PlayerWorker, WorkerCmd, WorkerEvent};

use crate::config::PlayerSettings;
use crate::format::truncate;


pub struct Playerctl<R = SystemRunner> {
    runner: R,
    /// Target player; `None` lets playerctl choose.
    player: Option<String>,
    field_width: usize,
}

impl Playerctl {
    /// Build a client that spawns `settings.command`.
    pub fn new(settings: &PlayerSettings, field_width: usize) -> Self {
        let player = Some(settings.name.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Self::with_runner(SystemRunner::new(&settings.command), player, field_width)
    }
}

impl<R: CommandRunner> Playerctl<R> {
    pub fn with_runner(runner: R, player: Option<String>, field_width: usize) -> Self {
        Self {
            runner,
            player,
            field_width,
        }
    }

    /// Name shown in messages; playerctl's own pick when no player is set.
    pub fn player_label(&self) -> &str {
        self.player.as_deref().unwrap_or("the active player")
    }

    fn run(&self, args: &[&str]) -> Result<String, RunError> {
        match self.player.as_deref() {
            Some(p) => {
                let mut full = vec!["-p", p];
                full.extend_from_slice(args);
                self.runner.run(&full)
            }
            None => self.runner.run(args),
        }
    }

    /// Query the player and build a fresh snapshot.
    pub fn fetch(&self) -> Result<Snapshot, PlayerError> {
        let metadata = self
            .run(&["metadata", "--format", METADATA_FORMAT])
            .map_err(|e| {
                PlayerError::from_run(e, |source| PlayerError::Metadata {
                    player: self.player_label().to_string(),
                    source,
                })
            })?;

        let (title, artist, album, status) = match parse_metadata(&metadata) {
            MetadataLine::Empty => return Ok(Snapshot::NothingPlaying),
            MetadataLine::Malformed(fields) => {
                tracing::debug!(fields, output = %metadata.trim(), "unexpected metadata line");
                return Ok(Snapshot::UnexpectedFormat);
            }
            MetadataLine::Fields {
                title,
                artist,
                album,
                status,
            } => (title, artist, album, status),
        };

        let length = self
            .run(&["metadata", "mpris:length"])
            .map_err(|e| PlayerError::from_run(e, PlayerError::Length))?;
        let position = self
            .run(&["position"])
            .map_err(|e| PlayerError::from_run(e, PlayerError::Position))?;

        Ok(Snapshot::Track(NowPlaying {
            title: truncate(title, self.field_width),
            artist: truncate(artist, self.field_width),
            album: truncate(album, self.field_width),
            status: status.to_string(),
            position: parse_position(&position),
            length: parse_length(&length),
        }))
    }

    /// Send a transport command to the player.
    pub fn control(&self, cmd: ControlCmd) -> Result<(), PlayerError> {
        let command = cmd.as_arg();
        self.run(&[command]).map_err(|e| {
            PlayerError::from_run(e, |source| PlayerError::Control { command, source })
        })?;
        tracing::debug!(command, "sent control command");
        Ok(())
    }
}
