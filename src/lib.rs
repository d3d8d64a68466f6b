//! gpdat library: decoding of TDX `gp*.dat` market-data record files
//!
//! A `.dat` file is a packed sequence of 13-byte little-endian records
//! (`u8` type code, `u32` packed date, two `f32` values) with no header or
//! footer. This library decodes such streams lazily and renders each record as
//! one line of text.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = BufReader::new(File::open("gpsz000009.dat")?);
//! for record in gpdat::decode(file) {
//!     println!("{}", gpdat::render(&record?));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A trailing partial record is dropped silently; read errors from the
//! underlying source are returned unchanged.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod decoder;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod record;
pub mod source;

// Re-export public API
pub use app::{DecodeReport, FileSummary};
pub use config::{Config, LogFormat, LogLevel, OutputFormat, TruncationPolicy};
pub use decoder::{decode, DecoderState, RecordStreamDecoder};
pub use error_handling::DecodeError;
pub use record::{render, DecodedRecord, RECORD_SIZE};
pub use run::{decode_files, run_decode};
pub use source::{DatFileTag, Market, SecurityCategory};

// Internal run module (source -> decode -> render over the configured files)
mod run {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use anyhow::{bail, Context, Result};
    use log::{debug, info};

    use crate::app::{log_run_summary, DecodeReport, FileSummary, RunStatistics};
    use crate::config::{Config, TruncationPolicy, READ_BUFFER_RECORDS};
    use crate::decoder::decode;
    use crate::error_handling::DecodeError;
    use crate::export::{stdout_sink, RecordSink, SourceContext};
    use crate::record::RECORD_SIZE;

    /// Decodes every configured file and writes the records to stdout.
    ///
    /// Files are processed one at a time in the order given. Output uses the
    /// configured format; logs go to stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if no files are configured, a file cannot be opened or
    /// read, output cannot be written, or a file ends mid-record under
    /// [`TruncationPolicy::Strict`]. Records decoded before the failure have
    /// already been written.
    pub fn run_decode(config: Config) -> Result<DecodeReport> {
        if config.files.is_empty() {
            bail!("No input files given");
        }
        let mut sink = stdout_sink(config.format);
        decode_files(&config, sink.as_mut())
    }

    /// Decodes every configured file into `sink`.
    ///
    /// `config.format` is ignored here; the sink decides the output format.
    /// Decoding stops as soon as the sink reports that its output is closed.
    ///
    /// # Errors
    ///
    /// Same as [`run_decode`], except that an empty file list is allowed.
    pub fn decode_files(config: &Config, sink: &mut dyn RecordSink) -> Result<DecodeReport> {
        let mut stats = RunStatistics::new();
        for (i, path) in config.files.iter().enumerate() {
            let summary = decode_file(path, config, sink)?;
            stats.record_file(summary);
            if sink.output_closed() {
                let skipped = config.files.len() - i - 1;
                info!("Output closed, stopping ({} file(s) not decoded)", skipped);
                break;
            }
        }
        sink.finish()?;

        let report = stats.into_report();
        log_run_summary(&report);
        Ok(report)
    }

    /// Decodes a single file. The file handle is released when this returns,
    /// on every path.
    fn decode_file(path: &Path, config: &Config, sink: &mut dyn RecordSink) -> Result<FileSummary> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open data file: {}", path.display()))?;
        let reader = BufReader::with_capacity(READ_BUFFER_RECORDS * RECORD_SIZE, file);
        let source = SourceContext::for_path(path);

        match &source.tag {
            Some(tag) => info!(
                "Decoding {} (market={}, code={}, category={})",
                path.display(),
                tag.market,
                tag.code,
                tag.category()
            ),
            None => info!("Decoding {}", path.display()),
        }

        let mut decoder = decode(reader);
        let mut stopped_early = false;
        loop {
            if sink.output_closed() {
                stopped_early = !decoder.is_done();
                break;
            }
            if let Some(limit) = config.limit {
                if decoder.records_decoded() >= limit {
                    stopped_early = !decoder.is_done();
                    break;
                }
            }

            let record = match decoder.next() {
                Some(item) => item.with_context(|| {
                    format!(
                        "Failed to read {} at record {}",
                        path.display(),
                        decoder.records_decoded()
                    )
                })?,
                None => break,
            };
            sink.write_record(&source, &record)?;
        }

        if let Some(fragment_len) = decoder.trailing_fragment() {
            debug!(
                "{}: discarded {} trailing byte(s) after record {}",
                path.display(),
                fragment_len,
                decoder.records_decoded()
            );
            if config.truncation == TruncationPolicy::Strict {
                return Err(DecodeError::TruncatedRecord {
                    index: decoder.records_decoded(),
                    fragment_len,
                })
                .with_context(|| format!("Invalid data file: {}", path.display()));
            }
        }

        Ok(FileSummary {
            path: path.to_path_buf(),
            tag: source.tag,
            records: decoder.records_decoded(),
            bytes_consumed: decoder.bytes_consumed(),
            trailing_fragment: decoder.trailing_fragment(),
            stopped_early,
        })
    }
}
