pub mod installer;
pub mod patcher;
/**
 * Setup Module - Ollama Detection & Chatbot Configuration
 *
 * This module handles:
 * 1. Ollama installation and service detection
 * 2. Model availability checking and pulling
 * 3. Patching server.jac to use the local model
 */
pub mod requirements;

use std::path::Path;

use crate::ollama::OllamaClient;
use installer::ModelSource;
use patcher::PatchOutcome;

// Re-export commonly used types
pub use requirements::is_tool_installed;

/// Executable expected on PATH for installation checks and model pulls
pub const OLLAMA_COMMAND: &str = "ollama";
/// Model pulled and configured by the setup flow
pub const DEFAULT_MODEL: &str = "llama3.2";
/// Configuration file patched by the setup flow
pub const SERVER_CONFIG: &str = "server.jac";

/// Run the full setup flow and return the process exit code
///
/// Steps run strictly top to bottom. A missing Ollama install, a failed
/// pull, or a failed patch aborts immediately with a remediation hint; an
/// unreachable service is only a warning because Ollama starts on demand on
/// most systems.
pub async fn run_setup() -> i32 {
    print_banner("Jac MCP Chatbot - Ollama Setup");

    // Step 1: Ollama executable on PATH
    println!("\nStep 1: Checking Ollama installation...");
    if !requirements::is_tool_installed() {
        println!("Ollama is not installed!");
        println!();
        println!("Please install Ollama first:");
        println!("   Windows: https://ollama.com/download/windows");
        println!("   Mac:     https://ollama.com/download/mac");
        println!("   Linux:   https://ollama.com/download/linux");
        println!();
        println!("After installation, run this tool again.");
        return 1;
    }
    println!("Ollama is installed");

    // Step 2: service probe (advisory)
    println!("\nStep 2: Checking if Ollama is running...");
    let client = match OllamaClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("Error: {}", e);
            return 1;
        }
    };
    let service = requirements::check_service(&client).await;
    if service.is_running() {
        println!("Ollama service is running");
    } else {
        println!("Ollama service is not running ({})", service);
        println!("Starting Ollama... (this happens automatically on most systems)");
        println!("If you see errors, try running: {} serve", OLLAMA_COMMAND);
    }

    // Step 3: model
    println!("\nStep 3: Checking for {} model...", DEFAULT_MODEL);
    match installer::ensure_model(&client, DEFAULT_MODEL).await {
        Ok(ModelSource::AlreadyInstalled) => {
            println!("Model {} is already installed", DEFAULT_MODEL)
        }
        Ok(ModelSource::Pulled) => println!("Model ready"),
        Err(e) => {
            tracing::error!("[Setup] Model pull failed: {}", e);
            println!("Failed to pull model");
            println!("Try manually: {} pull {}", OLLAMA_COMMAND, DEFAULT_MODEL);
            return 1;
        }
    }

    // Step 4: patch server.jac
    println!("\nStep 4: Updating {} configuration...", SERVER_CONFIG);
    match patcher::patch_server_config(Path::new(SERVER_CONFIG)) {
        Ok(PatchOutcome::Patched { backup }) => {
            println!("Updated {} to use Ollama", SERVER_CONFIG);
            println!("Backup saved as {}", backup.display());
        }
        Ok(PatchOutcome::AlreadyConfigured) => {
            println!("{} is already configured for Ollama", SERVER_CONFIG);
        }
        Ok(PatchOutcome::MissingFile) => {
            println!("Error: {} not found in current directory", SERVER_CONFIG);
            return 1;
        }
        Ok(PatchOutcome::NoMatch) => {
            println!(
                "Warning: Could not find the model declaration in {}",
                SERVER_CONFIG
            );
            println!("Please manually update the llm line to:");
            println!("{}", patcher::NEW_MODEL_LINE);
            return 1;
        }
        Err(e) => {
            println!("Error: {}", e);
            return 1;
        }
    }

    print_next_steps();
    0
}

fn print_banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn print_next_steps() {
    println!();
    print_banner("Setup complete!");
    println!();
    println!("Your chatbot is now configured to use Ollama (free local LLM)");
    println!();
    println!("Next steps:");
    println!("   1. Restart your MCP server (if running):");
    println!("      jac run mcp_server.jac");
    println!();
    println!("   2. Restart your chatbot server:");
    println!("      jac serve {}", SERVER_CONFIG);
    println!();
    println!("   3. Start the frontend:");
    println!("      jac streamlit client.jac");
    println!();
    println!("Tip: To use a smaller/faster model, run:");
    println!("   {} pull {}:1b", OLLAMA_COMMAND, DEFAULT_MODEL);
    println!(
        "   Then update {} to use 'ollama/{}:1b'",
        SERVER_CONFIG, DEFAULT_MODEL
    );
}
