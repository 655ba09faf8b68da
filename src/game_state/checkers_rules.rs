//! Canonical checkers-rule constants.
//!
//! American rules on an 8x8 board: men and kings move one square and
//! jump two, there is no long-range king slide.

use crate::game_state::checkers_types::Color;

/// Board edge length; squares are addressed `row * 8 + col`.
pub const BOARD_SIZE: i32 = 8;

/// Rows initially filled with men, per side (dark squares only).
pub const RED_START_ROWS: std::ops::Range<i32> = 0..3;
pub const BLACK_START_ROWS: std::ops::Range<i32> = 5..8;

/// The four jump offsets, in the fixed order the chain-capture
/// controller scans them.
pub const JUMP_DIRECTIONS: [(i32, i32); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Forward row direction for a side's men: red advances toward
/// increasing rows, black toward decreasing rows.
#[inline]
pub const fn forward_sign(color: Color) -> i32 {
    match color {
        Color::Red => 1,
        Color::Black => -1,
    }
}

/// The row on which a man of `color` promotes to king.
#[inline]
pub const fn promotion_row(color: Color) -> i32 {
    match color {
        Color::Red => 7,
        Color::Black => 0,
    }
}

/// True for the dark squares, the only squares checkers is played on.
#[inline]
pub const fn is_dark_square(row: i32, col: i32) -> bool {
    (row + col) % 2 == 1
}
