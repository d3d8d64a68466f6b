//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `gpdat` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate. Decoded records
//! go to stdout; logs and errors go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use gpdat::config::Opt;
use gpdat::initialization::init_logger_with;
use gpdat::{run_decode, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config: Config = Opt::parse().into();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_decode(config) {
        Ok(_report) => Ok(()),
        Err(e) => {
            eprintln!("gpdat error: {:#}", e);
            process::exit(1);
        }
    }
}
