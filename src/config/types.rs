//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_LOG_LEVEL;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for decoded records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One rendered line per record (default)
    Text,
    /// CSV with a header row, tagged with file, market and code
    Csv,
    /// One JSON object per line
    Jsonl,
}

/// What to do when a file ends partway through a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TruncationPolicy {
    /// Drop the trailing fragment silently (default)
    Lenient,
    /// Fail the run with `DecodeError::TruncatedRecord`
    Strict,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use gpdat::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     files: vec![PathBuf::from("gpsz000009.dat")],
///     limit: Some(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Data files to decode, in order
    pub files: Vec<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Record output format
    pub format: OutputFormat,

    /// Stop after this many records per file
    pub limit: Option<u64>,

    /// Trailing fragment handling
    pub truncation: TruncationPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            format: OutputFormat::Text,
            limit: None,
            truncation: TruncationPolicy::Lenient,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print every record of one file
/// gpdat ./vipdoc/tdxgp/gpsz000009.dat
///
/// # First 20 records of several files as JSON lines
/// gpdat gpsz000009.dat gpsh600000.dat --format jsonl --limit 20
///
/// # Fail on files that end mid-record
/// gpdat gpsz000009.dat --strict
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "gpdat",
    about = "Decodes TDX gp*.dat market-data record files and prints one line per record."
)]
pub struct Opt {
    /// Data files to decode
    #[arg(value_parser, required = true)]
    pub files: Vec<PathBuf>,

    /// Output format: text|csv|jsonl
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop after this many records per file
    #[arg(long)]
    pub limit: Option<u64>,

    /// Treat a trailing partial record as an error instead of ignoring it
    #[arg(long)]
    pub strict: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            files: opt.files,
            log_level: opt.log_level,
            log_format: opt.log_format,
            format: opt.format,
            limit: opt.limit,
            truncation: if opt.strict {
                TruncationPolicy::Strict
            } else {
                TruncationPolicy::Lenient
            },
        }
    }
}
