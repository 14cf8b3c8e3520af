//! Full move generation pipeline.
//!
//! Concatenates the per-piece generators in a fixed order: lion, zebra,
//! elephant, pawn. Each block is sorted by move text. There is no
//! self-exposure filter; losing the lion is simply a lost game.

use crate::game_state::congo_types::*;
use crate::moves::elephant_moves::generate_elephant_moves;
use crate::moves::lion_moves::generate_lion_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::zebra_moves::generate_zebra_moves;

/// Moves available to `color`, regardless of whose turn it is.
pub fn generate_moves_for(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut moves = generate_lion_moves(game_state, color);
    moves.extend(generate_zebra_moves(game_state, color));
    moves.extend(generate_elephant_moves(game_state, color));
    moves.extend(generate_pawn_moves(game_state, color));
    moves
}

/// Moves available to the side to move.
#[inline]
pub fn generate_all_legal_moves(game_state: &GameState) -> Vec<Move> {
    generate_moves_for(game_state, game_state.side_to_move)
}
