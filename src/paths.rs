/**
 * Paths Module
 *
 * Path resolution helpers shared by both binaries.
 */
use std::path::PathBuf;

/// Get the directory containing the current executable
///
/// The launcher runs the frontend from here so that `client.jac` resolves
/// regardless of where the user's shell happened to be.
pub fn exe_dir() -> Result<PathBuf, String> {
    let exe = std::env::current_exe()
        .map_err(|e| format!("Failed to resolve current executable: {}", e))?;

    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| format!("Executable has no parent directory: {:?}", exe))
}
