//! Run statistics and summary logging.

use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use crate::source::DatFileTag;

/// Outcome of decoding one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    /// Path that was decoded
    pub path: PathBuf,
    /// Market/code tag from the file name, if any
    pub tag: Option<DatFileTag>,
    /// Full records emitted
    pub records: u64,
    /// Bytes read from the file, including a discarded trailing fragment
    pub bytes_consumed: u64,
    /// Length of the discarded trailing fragment, if the file ended mid-record
    pub trailing_fragment: Option<usize>,
    /// True when `limit` or a closed output stopped decoding before the end of
    /// the file was observed
    pub stopped_early: bool,
}

/// Results of a decode run.
#[derive(Debug, Clone)]
pub struct DecodeReport {
    /// Per-file outcomes, in processing order
    pub files: Vec<FileSummary>,
    /// Records emitted across all files
    pub total_records: u64,
    /// Files that ended on a discarded trailing fragment
    pub truncated_files: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Accumulates per-file summaries over a run.
pub(crate) struct RunStatistics {
    start_time: Instant,
    files: Vec<FileSummary>,
}

impl RunStatistics {
    pub(crate) fn new() -> Self {
        Self {
            start_time: Instant::now(),
            files: Vec::new(),
        }
    }

    /// Records one finished file and logs its outcome.
    pub(crate) fn record_file(&mut self, summary: FileSummary) {
        log_file_summary(&summary);
        self.files.push(summary);
    }

    pub(crate) fn into_report(self) -> DecodeReport {
        let total_records = self.files.iter().map(|f| f.records).sum();
        let truncated_files = self
            .files
            .iter()
            .filter(|f| f.trailing_fragment.is_some())
            .count();
        DecodeReport {
            files: self.files,
            total_records,
            truncated_files,
            elapsed_seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }
}

fn log_file_summary(summary: &FileSummary) {
    info!(
        "{}: {} record(s), {} byte(s) read{}",
        summary.path.display(),
        summary.records,
        summary.bytes_consumed,
        if summary.stopped_early {
            " (stopped early)"
        } else {
            ""
        }
    );
    if summary.records == 0 && summary.trailing_fragment.is_none() && !summary.stopped_early {
        warn!("{}: file is empty", summary.path.display());
    }
}

/// Logs a one-line summary of the whole run.
pub(crate) fn log_run_summary(report: &DecodeReport) {
    // Precision loss only matters past 2^53 records
    #[allow(clippy::cast_precision_loss)]
    let rate = if report.elapsed_seconds > 0.0 {
        report.total_records as f64 / report.elapsed_seconds
    } else {
        0.0
    };
    info!(
        "Decoded {} record{} from {} file{} ({} truncated) in {:.3}s (~{:.0} records/sec)",
        report.total_records,
        if report.total_records == 1 { "" } else { "s" },
        report.files.len(),
        if report.files.len() == 1 { "" } else { "s" },
        report.truncated_files,
        report.elapsed_seconds,
        rate
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(records: u64, trailing_fragment: Option<usize>) -> FileSummary {
        FileSummary {
            path: PathBuf::from("gpsz000001.dat"),
            tag: None,
            records,
            bytes_consumed: records * 13 + trailing_fragment.unwrap_or(0) as u64,
            trailing_fragment,
            stopped_early: false,
        }
    }

    #[test]
    fn test_report_totals() {
        let mut stats = RunStatistics::new();
        stats.record_file(summary(3, None));
        stats.record_file(summary(2, Some(5)));
        stats.record_file(summary(0, None));

        let report = stats.into_report();
        assert_eq!(report.files.len(), 3);
        assert_eq!(report.total_records, 5);
        assert_eq!(report.truncated_files, 1);
        assert!(report.elapsed_seconds >= 0.0);
        // Summary logging must not panic on any report
        log_run_summary(&report);
    }

    #[test]
    fn test_empty_run() {
        let report = RunStatistics::new().into_report();
        assert_eq!(report.total_records, 0);
        assert_eq!(report.truncated_files, 0);
        log_run_summary(&report);
    }
}
