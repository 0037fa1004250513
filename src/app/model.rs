//! Application model: `App`.

use crate::player::{ControlCmd, NowPlaying, PlayerError, Snapshot, WorkerEvent};

/// The main application model.
///
/// Nothing here outlives a poll: each result from the worker replaces
/// `last_poll` wholesale.
#[derive(Debug, Default)]
pub struct App {
    /// `None` until the first poll completes.
    pub last_poll: Option<Result<Snapshot, PlayerError>>,
    /// Message from the last failed transport command, cleared by the next success.
    pub control_error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one worker result into the model.
    pub fn apply(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Polled(result) => self.record_poll(result),
            WorkerEvent::Controlled(cmd, result) => self.record_control(cmd, result),
        }
    }

    /// Store the outcome of a poll.
    pub fn record_poll(&mut self, result: Result<Snapshot, PlayerError>) {
        match (&result, &self.last_poll) {
            (Err(e), Some(Err(prev))) if e.to_string() == prev.to_string() => {}
            (Err(e), _) => tracing::warn!(error = ?e, "poll failed"),
            (Ok(_), Some(Err(_))) => tracing::info!("player reachable again"),
            (Ok(_), _) => {}
        }

        self.last_poll = Some(result);
    }

    /// Store the outcome of a transport command.
    pub fn record_control(&mut self, cmd: ControlCmd, result: Result<(), PlayerError>) {
        match result {
            Ok(()) => self.control_error = None,
            Err(e) => {
                tracing::warn!(command = cmd.as_arg(), error = %e, "control command failed");
                self.control_error = Some(format!("Error executing {}: {e}", cmd.as_arg()));
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// The current track, if the last poll produced one.
    pub fn now_playing(&self) -> Option<&NowPlaying> {
        match &self.last_poll {
            Some(Ok(Snapshot::Track(np))) => Some(np),
            _ => None,
        }
    }

    /// Text shown in place of track info when there is no track to show.
    pub fn placeholder(&self) -> Option<String> {
        match &self.last_poll {
            None => Some("Waiting for player...".to_string()),
            Some(Ok(snapshot)) => snapshot.message().map(str::to_string),
            Some(Err(e)) => Some(format!("Error: {e}")),
        }
    }
}
