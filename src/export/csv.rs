//! CSV output.
//!
//! One flattened row per record, preceded by a single header row written
//! before the first record.

use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer;

use super::{RecordSink, SourceContext};
use crate::config::CSV_HEADER;
use crate::record::DecodedRecord;

/// CSV sink. Market, code and category columns are empty for untagged files.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::from_writer(writer),
            header_written: false,
        }
    }

    /// Flushes and returns the wrapped writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, source: &SourceContext, record: &DecodedRecord) -> Result<()> {
        if !self.header_written {
            self.writer
                .write_record(CSV_HEADER)
                .context("Failed to write CSV header")?;
            self.header_written = true;
        }

        let (market, code): (&str, &str) = match &source.tag {
            Some(tag) => (tag.market.as_ref(), tag.code.as_str()),
            None => ("", ""),
        };
        let category = source.tag.as_ref().map(|t| t.category());
        let category = category.as_ref().map_or("", |c| c.as_ref());

        let index = record.index.to_string();
        let type_code = record.type_code.to_string();
        let date = record.date.to_string();
        let value1 = float_field(record.value1);
        let value2 = float_field(record.value2);

        self.writer
            .write_record([
                source.file.as_str(),
                market,
                code,
                category,
                index.as_str(),
                type_code.as_str(),
                date.as_str(),
                value1.as_str(),
                value2.as_str(),
            ])
            .context("Failed to write CSV row")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush CSV output")
    }
}

// Shortest round-trip form; NaN is spelled as in the text format
fn float_field(value: f32) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}
