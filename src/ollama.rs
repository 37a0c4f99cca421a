/**
 * Ollama Client Module
 *
 * Minimal typed client for the local Ollama HTTP API. The setup flow only
 * needs two things from the service: a reachability probe and the list of
 * installed models, both served by GET /api/tags.
 */
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

/// Default Ollama endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Probe timeout. The service either answers immediately or is not there.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Reachability of the Ollama service, classified by failure cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Service answered the probe
    Running,
    /// Probe timed out
    Timeout,
    /// Nothing is listening on the endpoint
    ConnectionRefused,
    /// Any other failure (DNS, protocol, unexpected HTTP status)
    Unreachable(String),
}

impl ServiceStatus {
    /// Boolean view used by the setup flow's go/no-go decision
    pub fn is_running(&self) -> bool {
        matches!(self, ServiceStatus::Running)
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceStatus::Running => write!(f, "running"),
            ServiceStatus::Timeout => write!(f, "probe timed out"),
            ServiceStatus::ConnectionRefused => write!(f, "connection refused"),
            ServiceStatus::Unreachable(msg) => write!(f, "unreachable: {}", msg),
        }
    }
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(OllamaClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for the configured endpoint (`OLLAMA_URL` env var,
    /// falling back to the default localhost port)
    pub fn from_env() -> Result<Self, String> {
        let url =
            std::env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        Self::new(&url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service with a short-timeout GET on /api/tags
    ///
    /// Never returns an error: every failure is folded into a ServiceStatus
    /// variant so the caller can report the cause without aborting.
    pub async fn probe(&self) -> ServiceStatus {
        let url = format!("{}/api/tags", self.base_url);

        let status = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => ServiceStatus::Running,
            Ok(response) => ServiceStatus::Unreachable(format!("HTTP {}", response.status())),
            Err(e) if e.is_timeout() => ServiceStatus::Timeout,
            Err(e) if e.is_connect() => ServiceStatus::ConnectionRefused,
            Err(e) => ServiceStatus::Unreachable(e.to_string()),
        };

        tracing::debug!("[Ollama] Probe {}: {}", url, status);
        status
    }

    /// List the names of installed models via /api/tags
    pub async fn list_models(&self) -> Result<Vec<String>, String> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Ollama tags failed ({}): {}", status, body));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse tags response: {}", e))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }
}
