//! Forced continuation of multi-jump captures.
//!
//! After a capture lands, the same piece must keep jumping while a
//! further capture exists. When several continuations are legal the
//! controller takes the first one in the fixed scan order
//! `(+2,+2), (+2,-2), (-2,+2), (-2,-2)` instead of offering a choice.
//! That determinism is a documented rules deviation from full
//! draughts and is preserved on purpose. Turn switching stays with
//! the driver.

use crate::bitops::wide_bits::get_bit64;
use crate::game_state::checkers_rules::{forward_sign, JUMP_DIRECTIONS};
use crate::game_state::checkers_types::CheckersMove;
use crate::game_state::game_state::{coord_to_bit_index, in_bounds, GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_legal_move;

/// True when the piece of the side to move at `(row, col)` has at
/// least one legal jump available.
pub fn has_another_jump(game_state: &GameState, row: i32, col: i32) -> bool {
    let mover = game_state.side_to_move;
    let from_idx = coord_to_bit_index(row, col);

    if get_bit64(game_state.occupancy_by_color(mover), from_idx) == 0 {
        return false;
    }
    let is_king = get_bit64(game_state.kings(mover), from_idx) != 0;

    for (row_delta, col_delta) in JUMP_DIRECTIONS {
        // Men only jump in their forward row direction.
        if !is_king && row_delta.signum() != forward_sign(mover) {
            continue;
        }
        let to_row = row + row_delta;
        let to_col = col + col_delta;
        if !in_bounds(to_row, to_col) {
            continue;
        }
        if !game_state.is_empty_square(coord_to_bit_index(to_row, to_col)) {
            continue;
        }
        let mid_idx = coord_to_bit_index(row + row_delta / 2, col + col_delta / 2);
        if get_bit64(game_state.occupancy_by_color(mover.opposite()), mid_idx) != 0 {
            return true;
        }
    }
    false
}

/// Keep extending a capture with the same piece while any further
/// jump is legal, applying the first legal direction each round.
/// Returns the landing squares in order, for transcript recording;
/// the final element (if any) is where the piece ended up.
pub fn chain_jumps(game_state: &mut GameState, row: i32, col: i32) -> Vec<(i32, i32)> {
    let mut current = (row, col);
    let mut landings = Vec::new();

    while has_another_jump(game_state, current.0, current.1) {
        for (row_delta, col_delta) in JUMP_DIRECTIONS {
            let to_row = current.0 + row_delta;
            let to_col = current.1 + col_delta;
            if !in_bounds(to_row, to_col) {
                continue;
            }
            let mv = CheckersMove::new(current.0, current.1, to_row, to_col);
            if is_legal_move(game_state, mv) {
                apply_move(game_state, mv);
                current = (to_row, to_col);
                landings.push(current);
                break;
            }
        }
    }

    landings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Color, PieceClass, SquareOccupant};

    #[test]
    fn no_further_jump_on_the_start_position() {
        let state = GameState::new_game();
        assert!(!has_another_jump(&state, 2, 1));
    }

    #[test]
    fn detects_a_single_available_jump() {
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(2, 3));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 4));
        assert!(has_another_jump(&state, 2, 3));
    }

    #[test]
    fn opponent_pieces_report_no_jump() {
        let mut state = GameState::new_empty();
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 4));
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(2, 3));
        // Red to move, so the black piece at (3,4) has no say.
        assert!(!has_another_jump(&state, 3, 4));
    }

    #[test]
    fn men_do_not_see_backward_jumps() {
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(4, 3));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 2));
        assert!(!has_another_jump(&state, 4, 3));

        // The same square as a king does see it.
        state.remove_piece(Color::Red, coord_to_bit_index(4, 3));
        state.place_piece(Color::Red, PieceClass::King, coord_to_bit_index(4, 3));
        assert!(has_another_jump(&state, 4, 3));
    }

    #[test]
    fn chains_a_double_jump_to_completion() {
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(2, 1));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 2));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(5, 4));

        // Driver applies the first jump, then the chain takes over.
        apply_move(&mut state, CheckersMove::new(2, 1, 4, 3));
        let landings = chain_jumps(&mut state, 4, 3);

        assert_eq!(landings, vec![(6, 5)]);
        assert_eq!(state.piece_count(Color::Black), 0);
        assert_eq!(state.occupant_at(6, 5), SquareOccupant::RedMan);
        assert_eq!(state.side_to_move, Color::Red, "chain must not switch turns");
    }

    #[test]
    fn chain_prefers_the_first_direction_in_scan_order() {
        // Both (+2,+2) and (+2,-2) are legal continuations; the
        // controller must take (+2,+2).
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(2, 3));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 4));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(3, 2));

        let landings = chain_jumps(&mut state, 2, 3);
        assert_eq!(landings, vec![(4, 5)]);
        assert_eq!(state.occupant_at(3, 2), SquareOccupant::BlackMan);
    }

    #[test]
    fn promotion_mid_chain_lets_the_new_king_jump_backward() {
        // The first jump lands on row 7 and promotes; the chain then
        // continues with a backward jump only a king may make.
        let mut state = GameState::new_empty();
        state.place_piece(Color::Red, PieceClass::Man, coord_to_bit_index(5, 4));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(6, 3));
        state.place_piece(Color::Black, PieceClass::Man, coord_to_bit_index(6, 1));

        let landings = chain_jumps(&mut state, 5, 4);
        assert_eq!(landings, vec![(7, 2), (5, 0)]);
        assert_eq!(state.occupant_at(5, 0), SquareOccupant::RedKing);
        assert_eq!(state.piece_count(Color::Black), 0);
    }
}
