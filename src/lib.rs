// Frontend launcher module
pub mod launcher;
// Ollama HTTP client module
pub mod ollama;
// Unified path helpers
pub mod paths;
// Ollama setup flow (detection, model pull, config patch)
pub mod setup;
