//! 32-bit hex formatter
//!
//! Results are shown as their raw two's-complement bit pattern: always eight
//! lowercase digits, never a sign. `-1` prints as `ffffffff`.

use core::fmt;

use crate::device::CharDevice;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render `value` as eight hex digits, most significant nibble first
pub fn format_hex32(value: i32) -> [u8; 8] {
    let bits = value as u32;
    let mut out = [0u8; 8];
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = 28 - 4 * i;
        *slot = DIGITS[((bits >> shift) & 0xf) as usize];
    }
    out
}

/// Write the eight digits followed by CRLF
pub fn write_hex32<D: CharDevice>(device: &mut D, value: i32) {
    device.write_bytes(&format_hex32(value));
    device.write_bytes(b"\r\n");
}

/// `Display` adapter producing the same eight digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex32(pub i32);

impl fmt::Display for Hex32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in format_hex32(self.0) {
            fmt::Write::write_char(f, char::from(digit))?;
        }
        Ok(())
    }
}
