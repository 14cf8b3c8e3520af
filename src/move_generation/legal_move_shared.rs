//! Helpers shared by the piece move generators.

use crate::game_state::congo_types::*;

/// Build a destination table for a fixed set of `(file, rank)` jumps.
pub(crate) const fn jump_table(deltas: &[(i8, i8)]) -> [u64; NUM_SQUARES] {
    let mut table = [0u64; NUM_SQUARES];
    let mut sq = 0usize;

    while sq < NUM_SQUARES {
        let mut targets = 0u64;
        let mut i = 0usize;
        while i < deltas.len() {
            let (d_file, d_rank) = deltas[i];
            if let Some(to) = offset_square(sq as Square, d_file, d_rank) {
                targets |= 1u64 << to;
            }
            i += 1;
        }
        table[sq] = targets;
        sq += 1;
    }

    table
}

/// Push one move from `from` to every square set in `targets`.
#[inline]
pub(crate) fn push_moves_from_mask(from: Square, mut targets: u64, out: &mut Vec<Move>) {
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        out.push(Move::new(from, to));
        targets &= targets - 1;
    }
}
