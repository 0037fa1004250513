//! Background thread that owns the `Playerctl` client.
//!
//! Queries and transport commands block on a subprocess, so they run here and
//! the UI thread only ever sees their results through a channel.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{CommandRunner, ControlCmd, PlayerError, Playerctl, Snapshot};

/// Requests accepted by the worker thread.
#[derive(Debug)]
pub enum WorkerCmd {
    /// Run a transport command, then poll.
    Control(ControlCmd),
    Stop,
}

/// Results published by the worker thread.
#[derive(Debug)]
pub enum WorkerEvent {
    Polled(Result<Snapshot, PlayerError>),
    Controlled(ControlCmd, Result<(), PlayerError>),
}

/// Handle to the worker thread.
pub struct PlayerWorker {
    tx: Sender<WorkerCmd>,
    rx: Receiver<WorkerEvent>,
    _handle: JoinHandle<()>,
}

impl PlayerWorker {
    /// Start the worker. It polls once right away, then every `interval`.
    pub fn spawn<R>(player: Playerctl<R>, interval: Duration) -> Self
    where
        R: CommandRunner + Send + 'static,
    {
        let (tx, cmd_rx) = mpsc::channel::<WorkerCmd>();
        let (event_tx, rx) = mpsc::channel::<WorkerEvent>();
        let handle = thread::spawn(move || worker_loop(&player, interval, &cmd_rx, &event_tx));

        Self {
            tx,
            rx,
            _handle: handle,
        }
    }

    pub fn send(&self, cmd: WorkerCmd) -> Result<(), SendError<WorkerCmd>> {
        self.tx.send(cmd)
    }

    /// Next pending result, if any. Never blocks.
    pub fn try_recv(&self) -> Option<WorkerEvent> {
        match self.rx.try_recv() {
            Ok(ev) => Some(ev),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// The thread is detached on drop: a stuck playerctl must not delay quitting.
impl Drop for PlayerWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(WorkerCmd::Stop);
    }
}

fn worker_loop<R: CommandRunner>(
    player: &Playerctl<R>,
    interval: Duration,
    cmd_rx: &Receiver<WorkerCmd>,
    event_tx: &Sender<WorkerEvent>,
) {
    loop {
        if event_tx.send(WorkerEvent::Polled(player.fetch())).is_err() {
            break;
        }

        match cmd_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(WorkerCmd::Control(cmd)) => {
                let result = player.control(cmd);
                if event_tx.send(WorkerEvent::Controlled(cmd, result)).is_err() {
                    break;
                }
            }
            Ok(WorkerCmd::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    tracing::debug!("player worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::RunError;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Thread-safe canned runner; the calls log is shared with the test.
    #[derive(Clone, Default)]
    struct SharedRunner {
        replies: Arc<Mutex<VecDeque<String>>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl CommandRunner for SharedRunner {
        fn run(&self, args: &[&str]) -> Result<String, RunError> {
            self.calls.lock().unwrap().push(args.join(" "));
            Ok(self.replies.lock().unwrap().pop_front().unwrap_or_default())
        }
    }

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn polls_immediately_on_start() {
        let runner = SharedRunner::default();
        runner.replies.lock().unwrap().extend([
            "Battery|Metallica|Master of Puppets|Playing".to_string(),
            "312000000".to_string(),
            "1.0".to_string(),
        ]);
        let worker = PlayerWorker::spawn(
            Playerctl::with_runner(runner.clone(), None, 30),
            Duration::from_secs(3600),
        );

        match worker.recv_timeout(WAIT) {
            Some(WorkerEvent::Polled(Ok(Snapshot::Track(np)))) => assert_eq!(np.title, "Battery"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn control_runs_on_worker_then_polls() {
        let runner = SharedRunner::default();
        let worker = PlayerWorker::spawn(
            Playerctl::with_runner(runner.clone(), Some("mpv".into()), 30),
            Duration::from_secs(3600),
        );
        assert!(matches!(
            worker.recv_timeout(WAIT),
            Some(WorkerEvent::Polled(_))
        ));

        worker.send(WorkerCmd::Control(ControlCmd::Next)).unwrap();
        assert!(matches!(
            worker.recv_timeout(WAIT),
            Some(WorkerEvent::Controlled(ControlCmd::Next, Ok(())))
        ));
        assert!(matches!(
            worker.recv_timeout(WAIT),
            Some(WorkerEvent::Polled(Ok(Snapshot::NothingPlaying)))
        ));

        let calls = runner.calls.lock().unwrap().clone();
        assert!(calls.contains(&"-p mpv next".to_string()), "{calls:?}");
    }

    #[test]
    fn slow_player_does_not_block_the_caller() {
        #[derive(Clone)]
        struct Sleepy;
        impl CommandRunner for Sleepy {
            fn run(&self, _args: &[&str]) -> Result<String, RunError> {
                thread::sleep(Duration::from_secs(2));
                Ok(String::new())
            }
        }

        let start = std::time::Instant::now();
        let worker = PlayerWorker::spawn(
            Playerctl::with_runner(Sleepy, None, 30),
            Duration::from_secs(3600),
        );
        assert!(worker.try_recv().is_none());
        worker.send(WorkerCmd::Control(ControlCmd::PlayPause)).unwrap();
        drop(worker);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
