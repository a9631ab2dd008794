//! Spawning external tools.
//!
//! Every step is a program plus an explicit argument vector; nothing goes
//! through a shell. Steps inherit the terminal and are awaited to completion.

use crate::error::{Result, TaskError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

#[cfg(unix)]
const SIGINT: i32 = 2;

/// One external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs steps from a fixed working directory.
#[derive(Debug, Clone)]
pub struct Runner {
    root: PathBuf,
}

impl Runner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run a step with inherited stdio. A non-zero exit becomes
    /// [`TaskError::CommandFailed`] carrying the tool's exit code.
    pub async fn run(&self, step: &Step) -> Result<()> {
        println!("🔄 Running: {}", step);

        let status = self
            .command(step)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| spawn_error(step, source))?;

        check(step, status)
    }

    /// Run a step and return its stdout; stderr stays on the terminal.
    pub async fn capture(&self, step: &Step) -> Result<String> {
        println!("🔄 Running: {}", step);

        let output = self
            .command(step)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|source| spawn_error(step, source))?;

        check(step, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a step and report whether it succeeded, without treating failure
    /// as an error. Output is discarded.
    pub async fn probe(&self, step: &Step) -> bool {
        debug!(command = %step, "Probing");

        match self
            .command(step)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(e) => {
                debug!(command = %step, error = %e, "Probe could not start");
                false
            }
        }
    }

    fn command(&self, step: &Step) -> Command {
        debug!(
            program = %step.program,
            args = ?step.args,
            cwd = %self.root.display(),
            "Executing command"
        );

        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .current_dir(&self.root)
            .kill_on_drop(true);
        cmd
    }
}

fn spawn_error(step: &Step, source: std::io::Error) -> TaskError {
    TaskError::Spawn {
        program: step.program.clone(),
        source,
    }
}

fn check(step: &Step, status: ExitStatus) -> Result<()> {
    if status.success() {
        debug!(command = %step, "Command succeeded");
        return Ok(());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(SIGINT) {
            debug!(command = %step, "Command interrupted");
            return Err(TaskError::Interrupted);
        }
    }

    Err(TaskError::CommandFailed {
        command: step.to_string(),
        code: exit_code(status),
    })
}

/// Exit code of a finished child; signal deaths map to `128 + signal` the way
/// shells report them.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
