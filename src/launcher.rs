/**
 * Launcher Module
 *
 * Starts the Jac streamlit frontend with the working directory pinned to the
 * directory containing this executable, shielding the user from
 * path-resolution issues in the invoking shell.
 */
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::paths;

/// Command used to start the frontend
pub const JAC_COMMAND: &str = "jac";
/// Fixed arguments for the frontend
pub const CLIENT_ARGS: [&str; 2] = ["streamlit", "client.jac"];

/// Launch failure cases
#[derive(Debug, Clone)]
pub enum LaunchError {
    /// The target executable is not on PATH
    MissingExecutable,
    /// The process could not be spawned or awaited
    Io(String),
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::MissingExecutable => {
                write!(f, "'{}' command not found", JAC_COMMAND)
            }
            LaunchError::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LaunchError {}

/// Run the frontend and return its exit code
///
/// Blocks until the child exits. Stdio is inherited, so streamlit's own
/// output and errors go straight to the user's terminal.
pub fn launch() -> Result<i32, LaunchError> {
    let dir = paths::exe_dir().map_err(LaunchError::Io)?;
    tracing::info!("[Launcher] Running {} {:?} in {:?}", JAC_COMMAND, CLIENT_ARGS, dir);
    run_command(JAC_COMMAND, &CLIENT_ARGS, &dir)
}

/// Spawn a command synchronously and map its exit status to a code
fn run_command(command: &str, args: &[&str], dir: &Path) -> Result<i32, LaunchError> {
    let status = Command::new(command)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => LaunchError::MissingExecutable,
            _ => LaunchError::Io(format!("Failed to run {}: {}", command, e)),
        })?;

    // A signal-terminated child carries no code; report plain failure
    Ok(status.code().unwrap_or(1))
}
