/**
 * Installer Module
 *
 * Ensures the configured model is present locally. The actual download is
 * delegated to `ollama pull`, which streams its own progress output to the
 * user's terminal and handles resume/dedup internally.
 */
use std::process::Command;

use anyhow::{anyhow, Result};

use crate::ollama::OllamaClient;

use super::OLLAMA_COMMAND;

/// Where the requested model came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// The model was already in the local store
    AlreadyInstalled,
    /// The model was pulled from the registry
    Pulled,
}

/// Ensure a model is available locally, pulling it if necessary
///
/// When the service is reachable the installed models are listed first and a
/// present model skips the pull entirely. If the listing is unavailable the
/// pull runs unconditionally; `ollama pull` is itself a no-op for an
/// up-to-date model.
pub async fn ensure_model(client: &OllamaClient, name: &str) -> Result<ModelSource> {
    if let Ok(models) = client.list_models().await {
        if models.iter().any(|installed| model_matches(installed, name)) {
            tracing::info!("[Setup] Model already present: {}", name);
            return Ok(ModelSource::AlreadyInstalled);
        }
    }

    pull_model(name)?;
    Ok(ModelSource::Pulled)
}

/// Pull a model, streaming Ollama's progress output to the terminal
///
/// Blocks until the pull finishes; success is derived from the exit status.
pub fn pull_model(name: &str) -> Result<()> {
    println!("Pulling {} model...", name);
    println!("This may take a few minutes depending on your internet speed.");

    let status = Command::new(OLLAMA_COMMAND)
        .args(["pull", name])
        .status()
        .map_err(|e| anyhow!("Failed to run {} pull: {}", OLLAMA_COMMAND, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} pull {} exited with status {}",
            OLLAMA_COMMAND,
            name,
            status.code().unwrap_or(1)
        ))
    }
}

/// True iff an installed model name satisfies the requested one
///
/// An untagged request matches any tag of the same model, so `llama3.2`
/// accepts the `llama3.2:latest` entry that `ollama pull` creates.
fn model_matches(installed: &str, wanted: &str) -> bool {
    if installed == wanted {
        return true;
    }
    !wanted.contains(':') && installed.split(':').next() == Some(wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_request_matches_any_tag() {
        assert!(model_matches("llama3.2:latest", "llama3.2"));
        assert!(model_matches("llama3.2:1b", "llama3.2"));
        assert!(model_matches("llama3.2", "llama3.2"));
    }

    #[test]
    fn test_tagged_request_matches_exactly() {
        assert!(model_matches("llama3.2:1b", "llama3.2:1b"));
        assert!(!model_matches("llama3.2:latest", "llama3.2:1b"));
    }

    #[test]
    fn test_different_model_does_not_match() {
        assert!(!model_matches("nomic-embed-text:latest", "llama3.2"));
        assert!(!model_matches("llama3", "llama3.2"));
    }
}
