//! Text rendering of decoded records.

use std::fmt;

use super::DecodedRecord;

/// Renders a record as a single line, without a trailing newline.
///
/// Format: `{index:03}  type=0x{type:02X}  date={date}  val1={v1:.3}  val2={v2:.3}`.
/// Any NaN value prints as `nan`, whatever its sign or payload.
pub fn render(record: &DecodedRecord) -> String {
    record.to_string()
}

impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}  type=0x{:02X}  date={}  val1={:.3}  val2={:.3}",
            self.index,
            self.type_code,
            self.date,
            Fixed3(self.value1),
            Fixed3(self.value2)
        )
    }
}

/// A value printed with three decimals. NaN is spelled `nan`.
struct Fixed3(f32);

impl fmt::Display for Fixed3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("nan")
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}
