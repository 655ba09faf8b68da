//! Move execution against the board bitboards.
//!
//! `apply_move` assumes the caller has already validated the move with
//! `legal_move_checks`; it performs no re-validation. It mutates only
//! the four square-sets — switching `side_to_move` stays with the turn
//! driver so chained jumps can run in between.

use crate::bitops::wide_bits::get_bit64;
use crate::game_state::checkers_rules::promotion_row;
use crate::game_state::checkers_types::{CheckersMove, PieceClass};
use crate::game_state::game_state::{coord_to_bit_index, GameState};

/// Apply a validated move: clear the source, remove a jumped enemy
/// piece, promote a man reaching its far row, and place the piece on
/// the destination.
pub fn apply_move(game_state: &mut GameState, mv: CheckersMove) {
    let mover = game_state.side_to_move;
    let from_idx = coord_to_bit_index(mv.from_row, mv.from_col);
    let to_idx = coord_to_bit_index(mv.to_row, mv.to_col);

    let was_king = get_bit64(game_state.kings(mover), from_idx) != 0;
    game_state.remove_piece(mover, from_idx);

    if mv.is_jump() {
        let mid_row = (mv.from_row + mv.to_row) / 2;
        let mid_col = (mv.from_col + mv.to_col) / 2;
        game_state.remove_piece(mover.opposite(), coord_to_bit_index(mid_row, mid_col));
    }

    let now_king = was_king || mv.to_row == promotion_row(mover);
    let class = if now_king {
        PieceClass::King
    } else {
        PieceClass::Man
    };
    game_state.place_piece(mover, class, to_idx);
}
