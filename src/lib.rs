//! Crate root module declarations for the Plum Checkers engine.
//!
//! This file exposes all top-level subsystems (bit primitives, game
//! state, move generation, console driver, and utility helpers) so the
//! binary, tests, and benches can import stable module paths.

pub mod bitops {
    pub mod wide_bits;
    pub mod word_bits;
}

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod jump_chain;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod console {
    pub mod game_loop;
}

pub mod utils {
    pub mod debug_bits;
    pub mod pdn;
    pub mod playout_harness;
    pub mod render_game_state;
}

pub mod errors;
