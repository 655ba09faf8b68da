//! Seeded random self-play harness.
//!
//! Plays a full game by picking uniformly among the legal moves each
//! turn, with capture chaining and turn switching handled the same way
//! the console driver does it. Used by invariant tests and benches to
//! exercise long move sequences deterministically from a seed.

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::game_state::checkers_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::jump_chain::chain_jumps;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_any_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    /// The named side won because the opponent had no legal move.
    Win(Color),
    /// The ply cap was reached with both sides still mobile.
    MaxPliesReached,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self { max_plies: 400 }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    pub final_state: GameState,
}

/// Play one random game from the starting position.
pub fn play_random_game(seed: u64, config: &PlayoutConfig) -> PlayoutReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new_game();
    let mut plies = 0u16;

    loop {
        let side = state.side_to_move;
        if !has_any_move(&state, side) {
            return PlayoutReport {
                outcome: PlayoutOutcome::Win(side.opposite()),
                plies,
                final_state: state,
            };
        }
        if plies >= config.max_plies {
            return PlayoutReport {
                outcome: PlayoutOutcome::MaxPliesReached,
                plies,
                final_state: state,
            };
        }

        let moves = generate_legal_moves(&state, side);
        let mv = *moves.choose(&mut rng).expect("mobile side has moves");
        let was_jump = mv.is_jump();
        apply_move(&mut state, mv);
        if was_jump {
            chain_jumps(&mut state, mv.to_row, mv.to_col);
        }
        state.side_to_move = side.opposite();
        plies += 1;
    }
}
