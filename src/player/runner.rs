use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Status {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Runs the media-control executable and returns its stdout.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, RunError>;
}

/// Spawns a real subprocess per call and waits for it.
pub struct SystemRunner {
    program: String,
}

impl SystemRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, args: &[&str]) -> Result<String, RunError> {
        tracing::trace!(program = %self.program, ?args, "running");

        // stderr is captured too, otherwise it would scribble over the TUI.
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RunError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunError::Status {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
