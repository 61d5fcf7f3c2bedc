use std::fmt;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use derive_getters::Getters;
use tokio::process::Command;

use crate::errors::{LauncherError, LauncherResult};

/// Editor binary the workspaces are opened with
pub const EDITOR_PROGRAM: &str = "code";

/// A fully built editor invocation
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LaunchCommand {
    program: String,
    args: Vec<PathBuf>,
}

/// How a launch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Dry run: the command was logged, nothing was spawned
    Printed,
    /// The editor ran and exited with this status
    Exited(ExitStatus),
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>, args: Vec<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Invocation of [`EDITOR_PROGRAM`] with one argument per workspace
    pub fn editor(workspaces: Vec<PathBuf>) -> Self {
        Self::new(EDITOR_PROGRAM, workspaces)
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Spawn the program and wait for it to exit
    ///
    /// Only a failure to start is an error; the exit status is returned as is.
    pub async fn execute(&self) -> LauncherResult<ExitStatus> {
        tracing::debug!(command = %self, "running command");

        self.to_command()
            .status()
            .await
            .map_err(|source| LauncherError::LaunchFailed {
                program: self.program.clone(),
                source,
            })
    }

    /// Log the command when `dry_run` is set, otherwise execute it
    pub async fn launch(&self, dry_run: bool) -> LauncherResult<LaunchOutcome> {
        if dry_run {
            tracing::debug!(command = %self, "dry run, not running command");
            return Ok(LaunchOutcome::Printed);
        }

        let status = self.execute().await?;
        if status.success() {
            tracing::info!(program = %self.program, "editor exited");
        } else {
            tracing::warn!(program = %self.program, %status, "editor exited with failure status");
        }

        Ok(LaunchOutcome::Exited(status))
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.display())?;
        }
        Ok(())
    }
}
