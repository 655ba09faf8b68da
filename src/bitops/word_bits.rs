//! Single-word (32-bit) bit manipulation primitives.
//!
//! These are the foundation the wide 64-bit operations and the board
//! bitboards are built on. An out-of-range position is never an error:
//! set/clear/toggle return the word unchanged and get returns 0.

pub const WORD_BITS: i32 = 32;

/// Return `value` with the bit at `position` forced to 1.
#[inline]
pub const fn set_bit(value: u32, position: i32) -> u32 {
    if position < 0 || position >= WORD_BITS {
        return value;
    }
    value | (1u32 << position)
}

/// Return `value` with the bit at `position` forced to 0.
#[inline]
pub const fn clear_bit(value: u32, position: i32) -> u32 {
    if position < 0 || position >= WORD_BITS {
        return value;
    }
    value & !(1u32 << position)
}

/// Return `value` with the bit at `position` flipped.
#[inline]
pub const fn toggle_bit(value: u32, position: i32) -> u32 {
    if position < 0 || position >= WORD_BITS {
        return value;
    }
    value ^ (1u32 << position)
}

/// Return the bit (0 or 1) at `position`, or 0 when out of range.
#[inline]
pub const fn get_bit(value: u32, position: i32) -> u32 {
    if position < 0 || position >= WORD_BITS {
        return 0;
    }
    (value >> position) & 1
}

/// Count the 1-bits in `value` by iterative reduction.
#[inline]
pub const fn count_set_bits(value: u32) -> u32 {
    let mut remaining = value;
    let mut count = 0;
    while remaining != 0 {
        count += remaining & 1;
        remaining >>= 1;
    }
    count
}

/// Logical left shift. Amounts outside `[0, 32)` yield 0 rather than
/// tripping Rust's shift-overflow check.
#[inline]
pub const fn shift_left(value: u32, positions: i32) -> u32 {
    if positions < 0 || positions >= WORD_BITS {
        return 0;
    }
    value << positions
}

/// Logical right shift with the same amount clamping as `shift_left`.
#[inline]
pub const fn shift_right(value: u32, positions: i32) -> u32 {
    if positions < 0 || positions >= WORD_BITS {
        return 0;
    }
    value >> positions
}
