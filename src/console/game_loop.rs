//! Interactive console front-end and turn driver.
//!
//! Owns the single `GameState`, reads move requests as four 0-based
//! integers per line, and routes them through the rules core:
//! validate, apply, auto-chain captures, then switch the turn. Bad
//! input and illegal moves are reported and reprompted without
//! advancing the turn; a side left without a legal move loses and the
//! finished game is printed as a PDN record.

use std::io::{self, BufRead, Write};

use crate::errors::Errors;
use crate::game_state::checkers_types::{CheckersMove, Color};
use crate::game_state::game_state::GameState;
use crate::move_generation::jump_chain::chain_jumps;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::legal_move_generator::has_any_move;
use crate::utils::pdn::{move_token, write_pdn};
use crate::utils::render_game_state::render_game_state;

pub fn run_console_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let mut game_state = GameState::new_game();
    let mut transcript = Vec::<String>::new();

    loop {
        writeln!(stdout, "{}", render_game_state(&game_state))?;

        let side = game_state.side_to_move;
        if !has_any_move(&game_state, side) {
            let winner = side.opposite();
            writeln!(
                stdout,
                "{} has no moves. {} wins!",
                side_name(side),
                side_name(winner)
            )?;
            let result = match winner {
                Color::Red => "1-0",
                Color::Black => "0-1",
            };
            writeln!(stdout)?;
            write!(stdout, "{}", write_pdn(&transcript, result))?;
            return Ok(());
        }

        writeln!(stdout, "{}'s turn", side_name(side))?;
        write!(stdout, "Enter move (fromRow fromCol toRow toCol): ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // Input closed mid-game; nothing more to drive.
            return Ok(());
        };

        match parse_and_validate(&game_state, &line?) {
            Ok(mv) => {
                let was_jump = mv.is_jump();
                apply_move(&mut game_state, mv);

                let mut path = vec![(mv.from_row, mv.from_col), (mv.to_row, mv.to_col)];
                if was_jump {
                    path.extend(chain_jumps(&mut game_state, mv.to_row, mv.to_col));
                }
                // Validated moves only visit in-bounds dark squares,
                // so tokenizing the path cannot fail.
                if let Ok(token) = move_token(&path, was_jump) {
                    transcript.push(token);
                }

                game_state.side_to_move = side.opposite();
            }
            Err(Errors::MalformedInput(_)) => {
                writeln!(stdout, "Invalid input. Try again.")?;
            }
            Err(Errors::IllegalMove) => {
                writeln!(stdout, "Invalid move. Try again.")?;
            }
        }
    }
}

/// Parse a prompt line into a move and check it against the rules.
/// The whole line must be exactly four integers; anything else is
/// discarded as malformed, matching the reprompt-and-retry recovery.
pub fn parse_and_validate(game_state: &GameState, line: &str) -> Result<CheckersMove, Errors> {
    let mv = parse_move_line(line)?;
    if !is_legal_move(game_state, mv) {
        return Err(Errors::IllegalMove);
    }
    Ok(mv)
}

/// Split a line into exactly four whitespace-separated integers.
pub fn parse_move_line(line: &str) -> Result<CheckersMove, Errors> {
    let mut values = [0i32; 4];
    let mut tokens = line.split_whitespace();
    for slot in values.iter_mut() {
        let token = tokens
            .next()
            .ok_or_else(|| Errors::MalformedInput(line.to_owned()))?;
        *slot = token
            .parse()
            .map_err(|_| Errors::MalformedInput(line.to_owned()))?;
    }
    if tokens.next().is_some() {
        return Err(Errors::MalformedInput(line.to_owned()));
    }

    Ok(CheckersMove::new(values[0], values[1], values[2], values[3]))
}

fn side_name(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Black => "Black",
    }
}
