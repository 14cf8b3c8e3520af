//! Pawn move generation.
//!
//! Pawns step one square straight or diagonally forward. Once across the
//! river a pawn may also walk one or two squares straight back toward its own
//! side; the retreat never captures and stops at the first occupied square.

use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_shared::{jump_table, push_moves_from_mask};

pub const WHITE_PAWN_ADVANCES: [u64; NUM_SQUARES] = jump_table(&[(0, 1), (-1, 1), (1, 1)]);
pub const BLACK_PAWN_ADVANCES: [u64; NUM_SQUARES] = jump_table(&[(0, -1), (-1, -1), (1, -1)]);

/// Longest straight retreat of a pawn past the river.
const MAX_RETREAT: i8 = 2;

#[inline]
pub const fn pawn_advances(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ADVANCES[square as usize],
        Color::Black => BLACK_PAWN_ADVANCES[square as usize],
    }
}

/// True when a pawn of `color` on `square` has crossed the river.
#[inline]
pub const fn is_past_river(color: Color, square: Square) -> bool {
    match color {
        Color::White => square_rank(square) >= 5,
        Color::Black => square_rank(square) <= 3,
    }
}

/// Pawn moves for `color`, sorted by move text.
pub fn generate_pawn_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let own_occ = game_state.occupancy(color);
    let retreat_step: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    let mut out = Vec::with_capacity(24);

    for from in game_state.piece_squares(Piece::new(color, PieceKind::Pawn)) {
        push_moves_from_mask(from, pawn_advances(color, from) & !own_occ, &mut out);

        if !is_past_river(color, from) {
            continue;
        }
        for distance in 1..=MAX_RETREAT {
            let Some(to) = offset_square(from, 0, retreat_step * distance) else {
                break;
            };
            if game_state.piece_at(to).is_some() {
                break;
            }
            out.push(Move::new(from, to));
        }
    }

    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::congo_types::*;

    fn texts(game: &GameState, color: Color) -> Vec<String> {
        generate_pawn_moves(game, color)
            .iter()
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn start_position_has_nineteen_white_pawn_moves() {
        let game = GameState::new_game();
        let moves = texts(&game, Color::White);
        // Seven pawns, three forward squares each, minus the two edge diagonals.
        assert_eq!(moves.len(), 19);
        assert_eq!(moves[0], "a2a3");
        assert!(moves.contains(&"d2e3".to_owned()));
    }

    #[test]
    fn pawn_captures_diagonally_and_straight() {
        let game = GameState::from_fen("3l3/7/7/7/2ppp2/3P3/3L3 w 0").expect("FEN should parse");
        let moves = texts(&game, Color::White);
        assert_eq!(moves, vec!["d2c3", "d2d3", "d2e3"]);
    }

    #[test]
    fn pawn_past_the_river_can_retreat_two_squares() {
        let game = GameState::from_fen("3l3/7/3P3/7/7/7/3L3 w 0").expect("FEN should parse");
        let moves = texts(&game, Color::White);
        assert_eq!(moves, vec!["d5c6", "d5d3", "d5d4", "d5d6", "d5e6"]);
    }

    #[test]
    fn retreat_stops_at_first_occupied_square() {
        let game = GameState::from_fen("3l3/7/3P3/3p3/7/7/3L3 w 0").expect("FEN should parse");
        let moves = texts(&game, Color::White);
        assert!(!moves.contains(&"d5d4".to_owned()));
        assert!(!moves.contains(&"d5d3".to_owned()));
    }

    #[test]
    fn black_pawn_past_the_river_retreats_upward() {
        let game = GameState::from_fen("3l3/7/7/7/3p3/7/3L3 b 0").expect("FEN should parse");
        let moves = texts(&game, Color::Black);
        assert_eq!(moves, vec!["d3c2", "d3d2", "d3d4", "d3d5", "d3e2"]);
    }
}
