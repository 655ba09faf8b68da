//! Word formatting helpers for bit-level debugging.

use crate::bitops::word_bits::get_bit;

/// Format a word MSB-first in binary, with a space after every nibble.
pub fn format_binary(value: u32) -> String {
    let mut out = String::new();
    for position in (0..32).rev() {
        out.push(if get_bit(value, position) != 0 { '1' } else { '0' });
        if position % 4 == 0 && position != 0 {
            out.push(' ');
        }
    }
    out
}

/// Format a word as an upper-case hex literal.
pub fn format_hex(value: u32) -> String {
    format!("0x{value:X}")
}
