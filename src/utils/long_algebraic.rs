//! Move text: origin coordinate followed by destination coordinate.

use crate::errors::{CongoError, CongoResult};
use crate::game_state::congo_types::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> CongoResult<String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

/// Parse `"c2c3"`. Only the coordinates are checked, not the rules.
pub fn long_algebraic_to_move(text: &str) -> CongoResult<Move> {
    let text = text.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(CongoError::InvalidCoordinate(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(Move::new(from, to))
}
