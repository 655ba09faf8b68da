//! Core shared types for the checkers rules engine.
//!
//! Color and piece class are kept separate so the bitboards can be
//! laid out `[color][piece_class]`, mirroring the board model.

pub use crate::game_state::game_state::GameState;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Piece class (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Man,
    King,
}

impl PieceClass {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceClass::Man => 0,
            PieceClass::King => 1,
        }
    }
}

/// Per-square classification exposed to rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareOccupant {
    Empty,
    RedMan,
    RedKing,
    BlackMan,
    BlackKing,
}

/// A candidate move as four 0-based board coordinates. Transient: it
/// is validated against exactly one `GameState` snapshot and never
/// stored in the state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckersMove {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
}

impl CheckersMove {
    #[inline]
    pub const fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// A two-row displacement marks a jump; the validator guarantees
    /// the column displacement matches.
    #[inline]
    pub const fn is_jump(&self) -> bool {
        let row_delta = self.to_row - self.from_row;
        row_delta == 2 || row_delta == -2
    }
}
