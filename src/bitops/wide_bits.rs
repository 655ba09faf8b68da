//! Double-width (64-bit) bit operations composed from the word layer.
//!
//! Each operation splits the value at bit 32, delegates to
//! `word_bits` with `position` or `position - 32`, and recombines the
//! halves. No additional bounds checks are added here; out-of-range
//! behavior comes entirely from the 32-bit primitives.

use crate::bitops::word_bits::{
    clear_bit, count_set_bits, get_bit, set_bit, toggle_bit, WORD_BITS,
};

const LOW_MASK: u64 = 0xFFFF_FFFF;

#[inline]
const fn low_word(value: u64) -> u32 {
    (value & LOW_MASK) as u32
}

#[inline]
const fn high_word(value: u64) -> u32 {
    (value >> 32) as u32
}

#[inline]
const fn recombine(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | (low as u64)
}

#[inline]
pub const fn set_bit64(value: u64, position: i32) -> u64 {
    if position < WORD_BITS {
        recombine(high_word(value), set_bit(low_word(value), position))
    } else {
        recombine(set_bit(high_word(value), position - WORD_BITS), low_word(value))
    }
}

#[inline]
pub const fn clear_bit64(value: u64, position: i32) -> u64 {
    if position < WORD_BITS {
        recombine(high_word(value), clear_bit(low_word(value), position))
    } else {
        recombine(clear_bit(high_word(value), position - WORD_BITS), low_word(value))
    }
}

#[inline]
pub const fn toggle_bit64(value: u64, position: i32) -> u64 {
    if position < WORD_BITS {
        recombine(high_word(value), toggle_bit(low_word(value), position))
    } else {
        recombine(toggle_bit(high_word(value), position - WORD_BITS), low_word(value))
    }
}

#[inline]
pub const fn get_bit64(value: u64, position: i32) -> u32 {
    if position < WORD_BITS {
        get_bit(low_word(value), position)
    } else {
        get_bit(high_word(value), position - WORD_BITS)
    }
}

#[inline]
pub const fn count_set_bits64(value: u64) -> u32 {
    count_set_bits(low_word(value)) + count_set_bits(high_word(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_work_across_both_halves() {
        for position in 0..64 {
            let value = set_bit64(0, position);
            assert_eq!(value, 1u64 << position);
            assert_eq!(get_bit64(value, position), 1);
        }
    }

    #[test]
    fn clear_and_toggle_work_across_both_halves() {
        for position in 0..64 {
            assert_eq!(clear_bit64(u64::MAX, position), !(1u64 << position));
            assert_eq!(toggle_bit64(toggle_bit64(0, position), position), 0);
        }
    }

    #[test]
    fn out_of_range_positions_are_no_ops() {
        let value = 0xDEAD_BEEF_CAFE_F00D;
        for position in [-1, -64, 64, 65, i32::MAX] {
            assert_eq!(set_bit64(value, position), value);
            assert_eq!(clear_bit64(value, position), value);
            assert_eq!(toggle_bit64(value, position), value);
            assert_eq!(get_bit64(value, position), 0);
        }
    }

    #[test]
    fn count_agrees_with_word_count_for_zero_extended_words() {
        use crate::bitops::word_bits::count_set_bits;
        for word in [0u32, 1, 0xFFFF_FFFF, 0xA5A5_A5A5] {
            assert_eq!(count_set_bits64(word as u64), count_set_bits(word));
        }
    }

    #[test]
    fn count_is_the_sum_of_half_counts() {
        for value in [0u64, u64::MAX, 0x0123_4567_89AB_CDEF, 0xF0F0_F0F0_0F0F_0F0F] {
            let low = (value & 0xFFFF_FFFF) as u32;
            let high = (value >> 32) as u32;
            assert_eq!(count_set_bits64(value), low.count_ones() + high.count_ones());
        }
    }
}
