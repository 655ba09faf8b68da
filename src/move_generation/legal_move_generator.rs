//! Mobility checking and full legal-move enumeration.
//!
//! `has_any_move` is the terminal-position test: a side with no legal
//! move has lost. It takes the side to check as a parameter and never
//! touches `side_to_move`, so it is safe to call at any point in a
//! turn. `generate_legal_moves` walks the same square/offset space but
//! collects every hit; the playout harness and benches are built on it.

use crate::bitops::wide_bits::get_bit64;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{CheckersMove, Color};
use crate::game_state::game_state::{coord_to_bit_index, in_bounds, GameState};
use crate::move_generation::legal_move_checks::is_legal_move_for;

/// Diagonal offsets at step and jump distance, `|dr| == |dc|`.
const DIAGONAL_OFFSETS: [(i32, i32); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (2, 2),
    (2, -2),
    (-2, 2),
    (-2, -2),
];

/// True when `side` has at least one legal move anywhere on the
/// board. Short-circuits on the first hit.
pub fn has_any_move(game_state: &GameState, side: Color) -> bool {
    let own = game_state.occupancy_by_color(side);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if get_bit64(own, coord_to_bit_index(row, col)) == 0 {
                continue;
            }
            for (row_delta, col_delta) in DIAGONAL_OFFSETS {
                let to_row = row + row_delta;
                let to_col = col + col_delta;
                if !in_bounds(to_row, to_col) {
                    continue;
                }
                let mv = CheckersMove::new(row, col, to_row, to_col);
                if is_legal_move_for(game_state, side, mv) {
                    return true;
                }
            }
        }
    }
    false
}

/// Every legal move for `side`, steps and jumps alike, in board scan
/// order.
pub fn generate_legal_moves(game_state: &GameState, side: Color) -> Vec<CheckersMove> {
    let own = game_state.occupancy_by_color(side);
    let mut moves = Vec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if get_bit64(own, coord_to_bit_index(row, col)) == 0 {
                continue;
            }
            for (row_delta, col_delta) in DIAGONAL_OFFSETS {
                let to_row = row + row_delta;
                let to_col = col + col_delta;
                if !in_bounds(to_row, to_col) {
                    continue;
                }
                let mv = CheckersMove::new(row, col, to_row, to_col);
                if is_legal_move_for(game_state, side, mv) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::PieceClass;

    #[test]
    fn both_sides_can_move_on_the_start_position() {
        let state = GameState::new_game();
        assert!(has_any_move(&state, Color::Red));
        assert!(has_any_move(&state, Color::Black));
        assert_eq!(state.side_to_move, Color::Red);
    }

    #[test]
    fn start_position_has_seven_moves_per_side() {
        let state = GameState::new_game();
        assert_eq!(generate_legal_moves(&state, Color::Red).len(), 7);
        assert_eq!(generate_legal_moves(&state, Color::Black).len(), 7);
    }

    #[test]
    fn a_side_with_no_pieces_has_no_moves() {
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, 17);
        assert!(has_any_move(&state, Color::Red));
        assert!(!has_any_move(&state, Color::Black));
        assert!(generate_legal_moves(&state, Color::Black).is_empty());
    }

    #[test]
    fn a_fully_blocked_piece_has_no_moves() {
        // Black man cornered at (7,0); red men occupy its only step
        // and its only jump landing.
        let mut state = GameState::new_empty();
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(7, 0));
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(6, 1));
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(5, 2));

        assert!(!has_any_move(&state, Color::Black));
        assert!(has_any_move(&state, Color::Red));
    }

    #[test]
    fn mobility_agrees_with_enumeration() {
        let positions = [GameState::new_empty(), GameState::new_game()];
        for state in positions {
            for side in [Color::Red, Color::Black] {
                assert_eq!(
                    has_any_move(&state, side),
                    !generate_legal_moves(&state, side).is_empty()
                );
            }
        }
    }

    #[test]
    fn checking_mobility_never_mutates_the_state() {
        let mut state = GameState::new_game();
        state.side_to_move = Color::Black;
        let before = state.clone();
        let _ = has_any_move(&state, Color::Red);
        let _ = generate_legal_moves(&state, Color::Red);
        assert_eq!(state, before);
    }

    #[test]
    fn enumeration_includes_jumps() {
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(2, 3));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 4));

        let moves = generate_legal_moves(&state, Color::Red);
        assert!(moves.contains(&CheckersMove::new(2, 3, 4, 5)));
        assert!(moves.contains(&CheckersMove::new(2, 3, 3, 2)));
        // (3,4) is occupied, so the step there is not listed.
        assert!(!moves.contains(&CheckersMove::new(2, 3, 3, 4)));
    }
}
