//! Move legality rules.
//!
//! A move is either a simple step (one diagonal square onto an empty
//! square) or a jump (two diagonal squares over an enemy piece onto an
//! empty square). Men are restricted to their side's forward row
//! direction; kings step and jump in either row direction but never
//! slide further. Every check is read-only.

use crate::bitops::wide_bits::get_bit64;
use crate::game_state::checkers_rules::forward_sign;
use crate::game_state::checkers_types::{CheckersMove, Color};
use crate::game_state::game_state::{coord_to_bit_index, in_bounds, GameState};

/// Legality for the side whose turn it is.
#[inline]
pub fn is_legal_move(game_state: &GameState, mv: CheckersMove) -> bool {
    is_legal_move_for(game_state, game_state.side_to_move, mv)
}

/// Legality for an explicit side, independent of `side_to_move`.
///
/// Checks short-circuit in a fixed order: bounds, ownership, empty
/// destination, then the step/jump shape rules.
pub fn is_legal_move_for(game_state: &GameState, mover: Color, mv: CheckersMove) -> bool {
    if !in_bounds(mv.from_row, mv.from_col) || !in_bounds(mv.to_row, mv.to_col) {
        return false;
    }

    let from_idx = coord_to_bit_index(mv.from_row, mv.from_col);
    let to_idx = coord_to_bit_index(mv.to_row, mv.to_col);

    let moving_man = get_bit64(game_state.men(mover), from_idx) != 0;
    let moving_king = get_bit64(game_state.kings(mover), from_idx) != 0;
    if !moving_man && !moving_king {
        return false;
    }

    if get_bit64(game_state.occupancy_all(), to_idx) != 0 {
        return false;
    }

    let row_delta = mv.to_row - mv.from_row;
    let col_delta = mv.to_col - mv.from_col;
    let abs_row = row_delta.abs();
    let abs_col = col_delta.abs();

    // Simple step: diagonal by one.
    if abs_row == 1 && abs_col == 1 {
        if !moving_king && row_delta != forward_sign(mover) {
            return false;
        }
        return true;
    }

    // Jump: diagonal by two over an enemy piece.
    if abs_row == 2 && abs_col == 2 {
        let mid_row = (mv.from_row + mv.to_row) / 2;
        let mid_col = (mv.from_col + mv.to_col) / 2;
        let mid_idx = coord_to_bit_index(mid_row, mid_col);

        let enemy = game_state.occupancy_by_color(mover.opposite());
        if get_bit64(enemy, mid_idx) == 0 {
            return false;
        }

        if !moving_king && row_delta != 2 * forward_sign(mover) {
            return false;
        }
        return true;
    }

    false
}
