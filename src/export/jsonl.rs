//! JSONL output.
//!
//! Each line is a complete JSON object for one record, suitable for piping
//! to `jq`. Non-finite floats are written as `null`.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::{RecordSink, SourceContext};
use crate::record::DecodedRecord;
use crate::source::{Market, SecurityCategory};

#[derive(Serialize)]
struct JsonRow<'a> {
    file: &'a str,
    market: Option<Market>,
    code: Option<&'a str>,
    category: Option<SecurityCategory>,
    #[serde(flatten)]
    record: &'a DecodedRecord,
}

/// JSON Lines sink.
pub struct JsonlSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonlSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonlSink<W> {
    fn write_record(&mut self, source: &SourceContext, record: &DecodedRecord) -> Result<()> {
        let row = JsonRow {
            file: &source.file,
            market: source.tag.as_ref().map(|t| t.market),
            code: source.tag.as_ref().map(|t| t.code.as_str()),
            category: source.tag.as_ref().map(|t| t.category()),
            record,
        };
        serde_json::to_writer(&mut self.writer, &row).context("Failed to serialize record")?;
        self.writer
            .write_all(b"\n")
            .context("Failed to write record line")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output")
    }
}
