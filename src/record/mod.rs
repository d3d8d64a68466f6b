//! Record layout and decoded record type.
//!
//! A `.dat` file is a tightly packed sequence of 13-byte little-endian records
//! with no header, footer, record count or magic number:
//!
//! | Offset | Size | Type | Field       |
//! |--------|------|------|-------------|
//! | 0      | 1    | u8   | `type_code` |
//! | 1      | 4    | u32  | `date`      |
//! | 5      | 4    | f32  | `value1`    |
//! | 9      | 4    | f32  | `value2`    |

mod render;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

pub use render::render;

/// Size of one record on disk, in bytes.
pub const RECORD_SIZE: usize = 13;

const TYPE_CODE_OFFSET: usize = 0;
const DATE_OFFSET: usize = 1;
const VALUE1_OFFSET: usize = 5;
const VALUE2_OFFSET: usize = 9;

/// One raw record exactly as it appears in the stream.
pub type RawRecord = [u8; RECORD_SIZE];

/// A record decoded from its 13 raw bytes plus its position in the stream.
///
/// `date` is surfaced exactly as stored. Its packed encoding is not interpreted
/// here, so implausible values pass through untouched, as do NaN and infinite
/// floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecodedRecord {
    /// Zero-based ordinal of the record within its stream
    pub index: u64,
    /// Record type tag (byte 0)
    pub type_code: u8,
    /// Packed date, little-endian u32 (bytes 1..5)
    pub date: u32,
    /// First value, little-endian f32 (bytes 5..9)
    pub value1: f32,
    /// Second value, little-endian f32 (bytes 9..13)
    pub value2: f32,
}

impl DecodedRecord {
    /// Decodes a full record.
    ///
    /// Every 13-byte pattern is a valid record, so this cannot fail.
    #[inline]
    pub fn decode(raw: &RawRecord, index: u64) -> Self {
        Self {
            index,
            type_code: raw[TYPE_CODE_OFFSET],
            date: LittleEndian::read_u32(&raw[DATE_OFFSET..VALUE1_OFFSET]),
            value1: LittleEndian::read_f32(&raw[VALUE1_OFFSET..VALUE2_OFFSET]),
            value2: LittleEndian::read_f32(&raw[VALUE2_OFFSET..RECORD_SIZE]),
        }
    }

    /// Byte offset of this record from the start of its stream.
    pub fn byte_offset(&self) -> u64 {
        self.index * RECORD_SIZE as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: RawRecord = [
        0x01, 0x39, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F,
    ];

    #[test]
    fn test_decode_sample_record() {
        let record = DecodedRecord::decode(&SAMPLE, 0);
        assert_eq!(record.index, 0);
        assert_eq!(record.type_code, 1);
        assert_eq!(record.date, 12345);
        assert_eq!(record.value1, 0.0);
        assert_eq!(record.value2, 1.0);
    }

    #[test]
    fn test_decode_keeps_index() {
        let record = DecodedRecord::decode(&SAMPLE, 41);
        assert_eq!(record.index, 41);
        assert_eq!(record.byte_offset(), 41 * 13);
    }

    #[test]
    fn test_decode_is_little_endian() {
        let mut raw = [0u8; RECORD_SIZE];
        raw[0] = 0xFF;
        raw[1..5].copy_from_slice(&20230105u32.to_le_bytes());
        raw[5..9].copy_from_slice(&12.34f32.to_le_bytes());
        raw[9..13].copy_from_slice(&(-56.78f32).to_le_bytes());

        let record = DecodedRecord::decode(&raw, 7);
        assert_eq!(record.type_code, 0xFF);
        assert_eq!(record.date, 20230105);
        assert_eq!(record.value1, 12.34);
        assert_eq!(record.value2, -56.78);
    }

    #[test]
    fn test_decode_passes_nan_through() {
        let mut raw = [0u8; RECORD_SIZE];
        raw[5..9].copy_from_slice(&f32::NAN.to_le_bytes());
        raw[9..13].copy_from_slice(&f32::INFINITY.to_le_bytes());

        let record = DecodedRecord::decode(&raw, 0);
        assert!(record.value1.is_nan());
        assert_eq!(record.value2, f32::INFINITY);
    }
}
