//! PDN-style transcript writing for finished games.
//!
//! Serializes a game's move history into a Portable Draughts Notation
//! flavored record: bracketed headers followed by numbered movetext.
//! Dark squares are numbered 1..=32 row-major from row 0; simple moves
//! join squares with `-`, capture sequences with `x`.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::checkers_rules::is_dark_square;
use crate::game_state::game_state::in_bounds;

/// Map a dark square to its 1-based PDN number.
pub fn square_to_pdn_number(row: i32, col: i32) -> Result<u8, String> {
    if !in_bounds(row, col) {
        return Err(format!("Coordinates out of bounds: ({row},{col})"));
    }
    if !is_dark_square(row, col) {
        return Err(format!("Light square has no PDN number: ({row},{col})"));
    }
    Ok((row * 4 + col / 2 + 1) as u8)
}

/// Build one movetext token from the squares a piece visited.
///
/// `path` holds the origin followed by every landing square, so a
/// simple move has two entries and a chained capture three or more.
pub fn move_token(path: &[(i32, i32)], is_capture: bool) -> Result<String, String> {
    if path.len() < 2 {
        return Err(format!(
            "Move path needs an origin and a landing, got {} squares",
            path.len()
        ));
    }
    let separator = if is_capture { "x" } else { "-" };
    let numbers = path
        .iter()
        .map(|&(row, col)| square_to_pdn_number(row, col).map(|n| n.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(numbers.join(separator))
}

/// Write the full record: headers, then movetext in numbered pairs
/// (red's token starts each numbered turn), closed by the result.
pub fn write_pdn(tokens: &[String], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Checkers Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Red".to_owned(), "Red".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result.to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(tokens.len() + 1);
    for (ply, token) in tokens.iter().enumerate() {
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, token));
        } else {
            movetext_parts.push(token.clone());
        }
    }
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}
