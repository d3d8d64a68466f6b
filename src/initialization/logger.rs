//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::Builder;
use log::LevelFilter;

/// Log target prefix of this crate.
const CRATE_TARGET: &str = "gpdat";

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging. Log output goes to
/// stderr, leaving stdout to the decoded records.
///
/// `RUST_LOG` is parsed first. `level` then replaces its default level and
/// sets this crate's level, so a bare `RUST_LOG=debug` has no effect while
/// module directives for other crates (`RUST_LOG=csv=trace`) still apply.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-file summaries on stderr
/// gpdat gpsz000009.dat --log-level info
///
/// # Machine-readable logs
/// gpdat gpsz000009.dat --log-level debug --log-format json 2> log.jsonl
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = Builder::from_default_env();
    configure(&mut builder, level, format);

    // try_init() so tests that initialize more than once do not panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn configure(builder: &mut Builder, level: LevelFilter, format: LogFormat) {
    builder.filter_level(level);
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }
}
