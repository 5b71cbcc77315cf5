//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `visitor_profile` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use visitor_profile::initialization::init_logger_with;
use visitor_profile::{exit_code_for, run_lookup, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists).
    // This allows setting IP_API_KEY and USER_AGENT_API_KEY in .env without
    // exporting them manually. Try the current directory first, then the
    // executable's directory.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookup(config).await {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(e) => {
            eprintln!("visitor_profile error: {e}");
            process::exit(exit_code_for(&e));
        }
    }
}
