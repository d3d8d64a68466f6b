//! Output sinks for decoded records.
//!
//! Each sink consumes records one at a time as the decoder produces them and
//! writes them to an arbitrary `Write`, normally stdout:
//! - `text`: the rendered line format, one record per line
//! - `csv`: flattened rows tagged with file, market, code and category
//! - `jsonl`: one JSON object per record

mod csv;
mod jsonl;
mod pipe;
mod text;

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use crate::config::{OutputFormat, WRITE_BUFFER_BYTES};
use crate::record::DecodedRecord;
use crate::source::DatFileTag;

pub use self::csv::CsvSink;
pub use self::jsonl::JsonlSink;
pub use self::text::TextSink;
use pipe::IgnoreBrokenPipe;

/// Where a record came from. Passed alongside every record so that tagged
/// formats can label rows without the decoder knowing about files.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Path as given by the caller, lossily converted for output
    pub file: String,
    /// Market/code tag parsed from the file name, if it follows the convention
    pub tag: Option<DatFileTag>,
}

impl SourceContext {
    /// Builds the context for a data file path.
    pub fn for_path(path: &Path) -> Self {
        Self {
            file: path.display().to_string(),
            tag: DatFileTag::from_path(path),
        }
    }
}

/// A consumer of decoded records.
pub trait RecordSink {
    /// Writes one record.
    fn write_record(&mut self, source: &SourceContext, record: &DecodedRecord) -> Result<()>;

    /// Flushes buffered output. Called once after the last record.
    fn finish(&mut self) -> Result<()>;

    /// True once the destination has stopped accepting output, e.g. the
    /// reading end of a pipe was closed. Further records would be discarded.
    fn output_closed(&self) -> bool {
        false
    }
}

/// Creates the sink for `format` on top of `writer`.
pub fn sink_for<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn RecordSink> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer)),
        OutputFormat::Jsonl => Box::new(JsonlSink::new(writer)),
    }
}

/// Creates the sink for `format` on buffered stdout, ignoring broken pipes.
///
/// The returned sink reports [`RecordSink::output_closed`] once stdout's
/// reader has gone away.
pub fn stdout_sink(format: OutputFormat) -> Box<dyn RecordSink> {
    piped_sink(format, io::stdout())
}

fn piped_sink<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn RecordSink> {
    let pipe = IgnoreBrokenPipe::new(writer);
    let closed = pipe.closed_flag();
    let buffered = io::BufWriter::with_capacity(WRITE_BUFFER_BYTES, pipe);
    Box::new(PipedSink {
        inner: sink_for(format, buffered),
        closed,
    })
}

/// A sink over a pipe that tracks whether the pipe was closed.
struct PipedSink {
    inner: Box<dyn RecordSink>,
    closed: Arc<AtomicBool>,
}

impl RecordSink for PipedSink {
    fn write_record(&mut self, source: &SourceContext, record: &DecodedRecord) -> Result<()> {
        self.inner.write_record(source, record)
    }

    fn finish(&mut self) -> Result<()> {
        self.inner.finish()
    }

    fn output_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn record(index: u64) -> DecodedRecord {
        DecodedRecord {
            index,
            type_code: 1,
            date: 12345,
            value1: 0.0,
            value2: 1.0,
        }
    }

    #[test]
    fn test_piped_sink_reports_closed_pipe() {
        let source = SourceContext::for_path(Path::new("gpsz000009.dat"));
        let mut sink = piped_sink(OutputFormat::Text, ClosedPipe);
        sink.write_record(&source, &record(0)).unwrap();
        // Still buffered, nothing has reached the pipe yet
        assert!(!sink.output_closed());

        sink.finish().unwrap();
        assert!(sink.output_closed());
        sink.write_record(&source, &record(1)).unwrap();
        sink.finish().unwrap();
    }

    #[test]
    fn test_plain_sinks_never_close() {
        let sink = sink_for(OutputFormat::Csv, Vec::new());
        assert!(!sink.output_closed());
    }
}
