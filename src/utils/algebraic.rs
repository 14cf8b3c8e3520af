//! Square conversions for board coordinates.
//!
//! Converts between human-readable coordinates (`a1`..`g7`) and square
//! indices. Used by the position text, move text and the command loop.

use crate::errors::{CongoError, CongoResult};
use crate::game_state::congo_types::*;

/// Convert a coordinate such as `"d4"` to a square index.
pub fn algebraic_to_square(square: &str) -> CongoResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(CongoError::InvalidCoordinate(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'g').contains(&file) || !(b'1'..=b'7').contains(&rank) {
        return Err(CongoError::InvalidCoordinate(square.to_owned()));
    }

    square_from_file_rank((file - b'a') as i8, (rank - b'0') as i8)
        .ok_or_else(|| CongoError::InvalidCoordinate(square.to_owned()))
}

/// Convert a square index (`0..=48`) to its coordinate.
pub fn square_to_algebraic(square: Square) -> CongoResult<String> {
    if !is_on_board(square) {
        return Err(CongoError::InvalidCoordinate(format!("#{square}")));
    }

    let file_char = char::from(b'a' + square_file(square));
    let rank_char = char::from(b'0' + square_rank(square));
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::CongoError;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a7").expect("a7 should parse"), 0);
        assert_eq!(algebraic_to_square("g1").expect("g1 should parse"), 48);
        assert_eq!(algebraic_to_square("d4").expect("d4 should parse"), 24);
        for sq in 0..49 {
            let text = square_to_algebraic(sq).expect("on-board square should convert");
            assert_eq!(algebraic_to_square(&text).expect("text should parse"), sq);
        }
    }

    #[test]
    fn rejects_coordinates_off_the_board() {
        for bad in ["h1", "a8", "a0", "d", "d44", "D4", ""] {
            assert!(matches!(
                algebraic_to_square(bad),
                Err(CongoError::InvalidCoordinate(_))
            ));
        }
        assert!(square_to_algebraic(49).is_err());
    }
}
