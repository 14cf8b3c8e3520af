//! Zebra move generation: the eight knight jumps, for every zebra of a color.

use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_shared::{jump_table, push_moves_from_mask};

const ZEBRA_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const ZEBRA_TARGETS: [u64; NUM_SQUARES] = jump_table(&ZEBRA_DELTAS);

#[inline]
pub const fn zebra_targets(square: Square) -> u64 {
    ZEBRA_TARGETS[square as usize]
}

/// Knight-style zebra jumps for `color`, sorted by move text.
pub fn generate_zebra_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let own_occ = game_state.occupancy(color);
    let mut out = Vec::with_capacity(8);

    for from in game_state.piece_squares(Piece::new(color, PieceKind::Zebra)) {
        push_moves_from_mask(from, zebra_targets(from) & !own_occ, &mut out);
    }

    out.sort();
    out
}
