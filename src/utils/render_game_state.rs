//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the internal bitboards for
//! the console game and for diagnostics in tests. Pure read-only: no
//! rule logic lives here.

use crate::game_state::checkers_types::{Color, SquareOccupant};
use crate::game_state::game_state::GameState;

/// Render the board plus per-side piece counts to a string.
///
/// Rows and columns are 0-based, row 0 printed first. Men render as
/// `r`/`b`, kings as `R`/`B`, empty squares as `.`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("    0 1 2 3 4 5 6 7\n");
    out.push_str("   -----------------\n");

    for row in 0..8 {
        out.push_str(&format!("{row} | "));
        for col in 0..8 {
            out.push(occupant_glyph(game_state.occupant_at(row, col)));
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str("\nPieces Remaining:\n");
    out.push_str(&format!("  Red:   {}\n", game_state.piece_count(Color::Red)));
    out.push_str(&format!("  Black: {}\n", game_state.piece_count(Color::Black)));

    out
}

fn occupant_glyph(occupant: SquareOccupant) -> char {
    match occupant {
        SquareOccupant::Empty => '.',
        SquareOccupant::RedMan => 'r',
        SquareOccupant::RedKing => 'R',
        SquareOccupant::BlackMan => 'b',
        SquareOccupant::BlackKing => 'B',
    }
}
