//! Application-level helpers for a decode run.

pub mod statistics;

pub use statistics::{DecodeReport, FileSummary};
pub(crate) use statistics::{log_run_summary, RunStatistics};
