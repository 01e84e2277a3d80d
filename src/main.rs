//! Entry point: updates the message files of the project in the current directory.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use translation_merger::error::error_chain;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            tracing::error!("Failed to resolve the working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    match translation_merger::run(&root) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
