//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for decoding a record stream under the strict truncation policy.
///
/// The decoder itself never reports truncation; this type is produced by the
/// run layer when `--strict` asks for a trailing fragment to be fatal.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The stream ended partway through a record.
    #[error("file truncated at record {index}: {fragment_len} trailing byte(s) do not form a record")]
    TruncatedRecord {
        /// Ordinal the incomplete record would have had
        index: u64,
        /// Number of bytes in the discarded fragment (1..=12)
        fragment_len: usize,
    },
}

/// Error types for data file name parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FileNameError {
    /// The name does not follow the `gp<market><code>.dat` convention.
    #[error("Unrecognized data file name: {0:?}")]
    Unrecognized(String),
}
