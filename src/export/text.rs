//! Plain text output: one rendered line per record.

use std::io::Write;

use anyhow::{Context, Result};

use super::{RecordSink, SourceContext};
use crate::record::DecodedRecord;

/// Writes `render(record)` followed by a newline. The source is not printed.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for TextSink<W> {
    fn write_record(&mut self, _source: &SourceContext, record: &DecodedRecord) -> Result<()> {
        writeln!(self.writer, "{}", record).context("Failed to write record line")
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines() {
        let source = SourceContext {
            file: "gpsz000009.dat".into(),
            tag: None,
        };
        let mut sink = TextSink::new(Vec::new());
        for index in 0..2 {
            let record = DecodedRecord {
                index,
                type_code: 1,
                date: 12345,
                value1: 0.0,
                value2: 1.0,
            };
            sink.write_record(&source, &record).unwrap();
        }
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "000  type=0x01  date=12345  val1=0.000  val2=1.000\n\
             001  type=0x01  date=12345  val1=0.000  val2=1.000\n"
        );
    }
}
