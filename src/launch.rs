//! Child process launcher: verify, spawn, report, never wait.

use std::{io, process::Command};

use tracing::{info, warn};

use crate::{config::TargetConfig, console::Console, runlog::RunLog};

/// Routine attempt/success lines go to the log only. Errors always reach the
/// console, quiet or not.
pub const QUIET: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started,
    MissingTarget,
    Failed,
}

/// Start the target as a detached child process.
///
/// The parent never waits on the child and never inspects its exit status;
/// every outcome ends with the caller shutting down.
pub fn start(
    target: &TargetConfig,
    quiet: bool,
    log: &mut RunLog,
    console: &mut dyn Console,
) -> io::Result<LaunchOutcome> {
    if !target.path.is_file() {
        log.write_and_log(
            console,
            &format!("Couldn't find {}, press any key to exit...", target.name),
        )?;
        console.read_key()?;
        return Ok(LaunchOutcome::MissingTarget);
    }

    let attempt = format!("Attempting to start {}...", target.name);
    if quiet {
        log.line(&attempt)?;
    } else {
        log.write_and_log(console, &attempt)?;
    }

    match spawn(target) {
        Ok(()) => {
            info!(
                target: "fallout_launcher::launch",
                name = %target.name,
                path = %target.path.display(),
                "Child process started"
            );
            let success = "Successful! Now exiting...";
            if quiet {
                log.line(success)?;
            } else {
                log.write_and_log(console, success)?;
            }
            Ok(LaunchOutcome::Started)
        }
        Err(err) => {
            warn!(
                target: "fallout_launcher::launch",
                name = %target.name,
                error = %err,
                "Failed to start child process"
            );
            log.write_and_log(console, &format!("Error starting {}:", target.name))?;
            log.write_and_log(console, &err.to_string())?;
            console.write_line("")?;
            console.write_line("Press any key to exit...")?;
            console.read_key()?;
            Ok(LaunchOutcome::Failed)
        }
    }
}

fn spawn(target: &TargetConfig) -> io::Result<()> {
    let mut command = Command::new(&target.path);
    // An empty argument string must not become an empty argv entry.
    if !target.arguments.trim().is_empty() {
        command.args(target.arguments.split_whitespace());
    }
    command.spawn().map(drop)
}
