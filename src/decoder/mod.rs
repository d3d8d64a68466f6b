//! Streaming decoder for `.dat` record streams.
//!
//! [`RecordStreamDecoder`] pulls 13 bytes at a time from any [`Read`] source and
//! yields [`DecodedRecord`]s lazily, in stream order. It stops at clean EOF or
//! at a short trailing fragment. The fragment is consumed from the reader
//! and then dropped without an error, since the format carries no record
//! count or footer that would make it detectable as corruption.
//!
//! Read faults from the underlying source are yielded unchanged as `Err` and
//! end the stream.

use std::io::{self, ErrorKind, Read};
use std::iter::FusedIterator;

use crate::record::{DecodedRecord, RawRecord, RECORD_SIZE};


/// Lifecycle of a decoder. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// More records may follow
    Streaming,
    /// Clean EOF, trailing fragment or read fault reached
    Done,
}

/// Lazy, single-pass decoder over an owned byte source.
///
/// The decoder owns its reader for as long as it lives. Dropping it (for
/// instance when a consumer stops iterating early) drops the reader, which
/// closes file handles. Use [`RecordStreamDecoder::into_inner`] to take the
/// reader back instead.
#[derive(Debug)]
pub struct RecordStreamDecoder<R> {
    reader: R,
    buf: RawRecord,
    state: DecoderState,
    next_index: u64,
    bytes_consumed: u64,
    trailing_fragment: Option<usize>,
}

/// Starts decoding `reader` from its current position.
///
/// Correct results require the position to be on a record boundary.
pub fn decode<R: Read>(reader: R) -> RecordStreamDecoder<R> {
    RecordStreamDecoder::new(reader)
}

impl<R: Read> RecordStreamDecoder<R> {
    /// Creates a decoder in the `Streaming` state with its ordinal at 0.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: [0u8; RECORD_SIZE],
            state: DecoderState::Streaming,
            next_index: 0,
            bytes_consumed: 0,
            trailing_fragment: None,
        }
    }

    /// Fills the record buffer, returning how many bytes were read.
    ///
    /// Keeps reading through short reads and `Interrupted` until the buffer is
    /// full or the source reports EOF.
    fn fill_buffer(&mut self) -> io::Result<usize> {
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.reader.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.bytes_consumed += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// True once the stream has ended for any reason.
    pub fn is_done(&self) -> bool {
        self.state == DecoderState::Done
    }

    /// Number of full records yielded so far.
    pub fn records_decoded(&self) -> u64 {
        self.next_index
    }

    /// Bytes taken from the reader, including a discarded trailing fragment.
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    /// Length of the discarded trailing fragment, if the stream ended on one.
    pub fn trailing_fragment(&self) -> Option<usize> {
        self.trailing_fragment
    }

    /// Returns the underlying reader, positioned after the last byte consumed.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for RecordStreamDecoder<R> {
    type Item = io::Result<DecodedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == DecoderState::Done {
            return None;
        }

        let filled = match self.fill_buffer() {
            Ok(n) => n,
            Err(e) => {
                self.state = DecoderState::Done;
                return Some(Err(e));
            }
        };

        if filled < RECORD_SIZE {
            self.state = DecoderState::Done;
            if filled > 0 {
                self.trailing_fragment = Some(filled);
            }
            return None;
        }

        let record = DecodedRecord::decode(&self.buf, self.next_index);
        self.next_index += 1;
        Some(Ok(record))
    }
}

impl<R: Read> FusedIterator for RecordStreamDecoder<R> {}
