// Shared test helpers for building .dat fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use gpdat::DecodedRecord;

/// The worked example record: type 0x01, date 12345, values 0.0 and 1.0.
#[allow(dead_code)] // Used by other test files
pub const SAMPLE_RECORD: [u8; 13] = [
    0x01, 0x39, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F,
];

/// Encodes one record in the on-disk layout.
#[allow(dead_code)] // Used by other test files
pub fn record_bytes(type_code: u8, date: u32, value1: f32, value2: f32) -> Vec<u8> {
    let mut out = Vec::with_capacity(13);
    out.push(type_code);
    out.extend_from_slice(&date.to_le_bytes());
    out.extend_from_slice(&value1.to_le_bytes());
    out.extend_from_slice(&value2.to_le_bytes());
    out
}

/// Builds `count` distinct records back to back.
#[allow(dead_code)] // Used by other test files
pub fn sequential_records(count: u32) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..count {
        out.extend(record_bytes(
            (i % 256) as u8,
            20230101 + i,
            i as f32 * 0.5,
            -(i as f32),
        ));
    }
    out
}

/// Writes `bytes` to `dir/name` and returns the path.
#[allow(dead_code)] // Used by other test files
pub fn write_dat(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("Failed to write fixture file");
    path
}

/// Bit-exact view of a record, so NaN payloads compare equal.
#[allow(dead_code)] // Used by other test files
pub fn bits(r: &DecodedRecord) -> (u64, u8, u32, u32, u32) {
    (
        r.index,
        r.type_code,
        r.date,
        r.value1.to_bits(),
        r.value2.to_bits(),
    )
}
