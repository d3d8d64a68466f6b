//! Configuration constants.
//!
//! This module defines the defaults used by the CLI and the library `Config`.

/// Default minimum log level.
///
/// Kept at `warn` so that stdout/stderr stay quiet on a clean run; use
/// `--log-level info` or `RUST_LOG=gpdat=info` for per-file summaries.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Buffer capacity for the file reader.
///
/// Sized as a whole number of records so that buffered refills stay aligned
/// with record boundaries.
pub const READ_BUFFER_RECORDS: usize = 4096;

/// Buffer capacity for the stdout writer, in bytes.
pub const WRITE_BUFFER_BYTES: usize = 64 * 1024;

/// CSV column names, in output order.
pub const CSV_HEADER: &[&str] = &[
    "file",
    "market",
    "code",
    "category",
    "index",
    "type_code",
    "date",
    "value1",
    "value2",
];
