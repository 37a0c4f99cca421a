/**
 * Configuration Patcher
 *
 * Rewrites the chatbot's server.jac from the cloud model declaration to the
 * local Ollama one, exactly once, with a backup of the original file.
 *
 * The declaration is recognized structurally rather than by byte-exact
 * comparison, so whitespace and quote-style variations still patch cleanly.
 */
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Fragment that marks an already-patched configuration
pub const OLLAMA_MARKER: &str = "ollama/";

/// Declaration written into server.jac
pub const NEW_MODEL_LINE: &str = "glob llm = Model(model_name='ollama/llama3.2', verbose=True, base_url='http://localhost:11434');";

/// Shape of the model declaration: a `glob llm = Model(...);` statement
/// naming a quoted model_name argument. Quote style and spacing are free.
const DECLARATION_PATTERN: &str =
    r#"glob\s+llm\s*=\s*Model\s*\([^)]*model_name\s*=\s*['"][^'"]*['"][^)]*\)\s*;"#;

/// Outcome of a patch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Declaration found and replaced; backup written alongside the target
    Patched { backup: PathBuf },
    /// File already references the local provider; nothing written
    AlreadyConfigured,
    /// Target file does not exist; nothing written
    MissingFile,
    /// No recognizable model declaration; nothing written
    NoMatch,
}

/// Patch the target configuration to use the local Ollama model
///
/// Checks, in order: target exists, target is not already configured, a
/// model declaration is present. Only then is anything written: first the
/// original content to `<target>.backup`, then the patched content to the
/// target itself. Every non-Patched outcome leaves the filesystem untouched.
pub fn patch_server_config(target: &Path) -> Result<PatchOutcome, String> {
    if !target.exists() {
        return Ok(PatchOutcome::MissingFile);
    }

    let content = fs::read_to_string(target)
        .map_err(|e| format!("Failed to read {}: {}", target.display(), e))?;

    // Idempotence guard: a file that already names an ollama/ model is done
    if content.contains(OLLAMA_MARKER) {
        tracing::info!("[Patcher] {} already configured", target.display());
        return Ok(PatchOutcome::AlreadyConfigured);
    }

    let patched = match rewrite_declaration(&content)? {
        Some(patched) => patched,
        None => return Ok(PatchOutcome::NoMatch),
    };

    // Snapshot the original before touching the target
    let backup = backup_path(target);
    fs::write(&backup, &content)
        .map_err(|e| format!("Failed to write backup {}: {}", backup.display(), e))?;
    fs::write(target, &patched)
        .map_err(|e| format!("Failed to write {}: {}", target.display(), e))?;

    tracing::info!(
        "[Patcher] Patched {} (backup: {})",
        target.display(),
        backup.display()
    );
    Ok(PatchOutcome::Patched { backup })
}

/// Backup file path: `<target>.backup`
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(".backup");
    PathBuf::from(name)
}

/// Replace the first model declaration with the local-provider one
///
/// Every byte outside the matched declaration is preserved as-is. Returns
/// None when no declaration is recognized.
fn rewrite_declaration(content: &str) -> Result<Option<String>, String> {
    let re = Regex::new(DECLARATION_PATTERN)
        .map_err(|e| format!("Invalid declaration pattern: {}", e))?;

    let m = match re.find(content) {
        Some(m) => m,
        None => return Ok(None),
    };

    let mut patched = String::with_capacity(content.len() + NEW_MODEL_LINE.len());
    patched.push_str(&content[..m.start()]);
    patched.push_str(NEW_MODEL_LINE);
    patched.push_str(&content[m.end()..]);
    Ok(Some(patched))
}
