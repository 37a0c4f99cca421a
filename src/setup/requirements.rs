/**
 * Requirements Detection Module
 *
 * Read-only probes for the two external dependencies of the setup flow:
 * the Ollama executable on PATH and the local Ollama HTTP service.
 * Nothing here mutates any state.
 */
use std::process::Command;

use crate::ollama::{OllamaClient, ServiceStatus};

use super::OLLAMA_COMMAND;

/// Check if the Ollama executable is installed
///
/// Runs `ollama --version` and inspects the exit status. A missing
/// executable is reported as not installed rather than a hard error.
pub fn is_tool_installed() -> bool {
    reports_version(OLLAMA_COMMAND)
}

/// True iff `<command> --version` spawns and exits successfully
fn reports_version(command: &str) -> bool {
    match Command::new(command).arg("--version").output() {
        Ok(output) => output.status.success(),
        Err(e) => {
            tracing::debug!("[Setup] {} --version failed to spawn: {}", command, e);
            false
        }
    }
}

/// Probe the Ollama service
///
/// Never fails hard: every probe error is classified into a ServiceStatus
/// variant so the caller can print the cause and decide what to do.
pub async fn check_service(client: &OllamaClient) -> ServiceStatus {
    client.probe().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_not_installed() {
        assert!(!reports_version("definitely-not-a-real-command-xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_present_command_reports_version() {
        // `sh --version` is not portable, but `true` ignores its args and exits 0
        assert!(reports_version("true"));
    }

    #[tokio::test]
    async fn test_check_service_on_dead_port() {
        let client = OllamaClient::new("http://localhost:9").unwrap();
        let status = check_service(&client).await;
        assert!(!status.is_running());
    }
}
