/**
 * Ollama setup binary
 *
 * Configures the chatbot for a free local LLM: checks the Ollama install
 * and service, makes sure the default model is present, and patches
 * server.jac in the current directory to point at it.
 */
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jac_chatbot_tools::setup;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let code = setup::run_setup().await;
    std::process::exit(code);
}
