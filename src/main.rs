// src/main.rs

mod cli;

use std::process::ExitCode;

use etantara::config::Config;
use etantara::state::AppState;
use etantara::utils::logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from environment (and .env, if present)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize Tracing (Logging). The guard flushes the file writer on exit.
    let _guard = logging::init(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::args::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("Using API at {}", state.client.base());

    match cli::commands::dispatch(&mut state, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
