//! Core bitboard board state representation.
//!
//! `GameState` is the central model for the engine. It stores one
//! bitboard per `[color][piece_class]` pair plus the side to move, and
//! exposes the occupancy queries and square-level accessors the move
//! validator, executor, and renderer are built on. All bit access goes
//! through the composed 64-bit primitives in `bitops`.

use crate::bitops::wide_bits::{clear_bit64, count_set_bits64, get_bit64, set_bit64};
use crate::game_state::checkers_rules::{
    is_dark_square, BLACK_START_ROWS, BOARD_SIZE, RED_START_ROWS,
};
use crate::game_state::checkers_types::{Color, PieceClass, SquareOccupant};

/// Map board coordinates to a bit index in `[0, 64)`.
#[inline]
pub const fn coord_to_bit_index(row: i32, col: i32) -> i32 {
    row * 8 + col
}

#[inline]
pub const fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// The complete game position: four square-sets and the side to move.
///
/// Invariants maintained by the executor: the four bitboards are
/// pairwise disjoint and only dark squares are ever occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_class]
    pub pieces: [[u64; 2]; 2],
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 2]; 2],
            side_to_move: Color::Red,
        }
    }
}

impl GameState {
    /// Empty board, red to move. Used by tests that construct
    /// positions square by square.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position: red men on the dark squares of
    /// rows 0..=2, black men on rows 5..=7, no kings, red to move.
    pub fn new_game() -> Self {
        let mut state = Self::default();
        for row in RED_START_ROWS {
            for col in 0..BOARD_SIZE {
                if is_dark_square(row, col) {
                    state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(row, col));
                }
            }
        }
        for row in BLACK_START_ROWS {
            for col in 0..BOARD_SIZE {
                if is_dark_square(row, col) {
                    state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(row, col));
                }
            }
        }
        state
    }

    #[inline]
    pub fn men(&self, color: Color) -> u64 {
        self.pieces[color.index()][PieceClass::Man.index()]
    }

    #[inline]
    pub fn kings(&self, color: Color) -> u64 {
        self.pieces[color.index()][PieceClass::King.index()]
    }

    /// Union of both square-sets of one side.
    #[inline]
    pub fn occupancy_by_color(&self, color: Color) -> u64 {
        self.men(color) | self.kings(color)
    }

    /// Union of all four square-sets.
    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_by_color(Color::Red) | self.occupancy_by_color(Color::Black)
    }

    #[inline]
    pub fn is_empty_square(&self, bit_index: i32) -> bool {
        get_bit64(self.occupancy_all(), bit_index) == 0
    }

    /// Remaining pieces of one side, men and kings combined.
    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        count_set_bits64(self.men(color)) + count_set_bits64(self.kings(color))
    }

    /// Classify the occupant of a square for rendering.
    pub fn occupant_at(&self, row: i32, col: i32) -> SquareOccupant {
        let bit_index = coord_to_bit_index(row, col);
        if get_bit64(self.kings(Color::Red), bit_index) != 0 {
            SquareOccupant::RedKing
        } else if get_bit64(self.men(Color::Red), bit_index) != 0 {
            SquareOccupant::RedMan
        } else if get_bit64(self.kings(Color::Black), bit_index) != 0 {
            SquareOccupant::BlackKing
        } else if get_bit64(self.men(Color::Black), bit_index) != 0 {
            SquareOccupant::BlackMan
        } else {
            SquareOccupant::Empty
        }
    }

    /// Put a piece of the given class on a square.
    #[inline]
    pub fn place_piece(&mut self, color: Color, class: PieceClass, bit_index: i32) {
        let board = &mut self.pieces[color.index()][class.index()];
        *board = set_bit64(*board, bit_index);
    }

    /// Clear a square for one side, whichever class occupies it.
    /// Clearing both boards keeps the executor free of man/king
    /// branching on removal.
    #[inline]
    pub fn remove_piece(&mut self, color: Color, bit_index: i32) {
        for class in [PieceClass::Man, PieceClass::King] {
            let board = &mut self.pieces[color.index()][class.index()];
            *board = clear_bit64(*board, bit_index);
        }
    }
}
