/**
 * Frontend launcher binary
 *
 * Runs `jac streamlit client.jac` with the working directory pinned to the
 * directory containing this binary, then mirrors the frontend's exit code.
 */
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jac_chatbot_tools::launcher::{self, LaunchError};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    match launcher::launch() {
        Ok(code) => {
            if code != 0 {
                eprintln!("Error running jac streamlit: exit status {}", code);
            }
            std::process::exit(code);
        }
        Err(LaunchError::MissingExecutable) => {
            eprintln!("Error: 'jac' command not found. Make sure jaclang is installed.");
            eprintln!("Install with: pip install jaclang jac-streamlit");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error running jac streamlit: {}", e);
            std::process::exit(1);
        }
    }
}
