//! Lion move generation.
//!
//! A lion steps one square in any direction but only onto its confinement
//! squares. It also has two long shots that land on the enemy lion: along an
//! open file, and across the empty center square on a two-step diagonal.

use crate::game_state::congo_rules::{is_lion_confinement_square, CENTER_SQUARE, LION_CONFINEMENT};
use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_shared::{jump_table, push_moves_from_mask};

const LION_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Index differences between two lions that sit on a two-step diagonal
/// through the center square.
const DIAGONAL_SHOT_OFFSETS: [i32; 4] = [12, 16, -12, -16];

pub const LION_STEP_TARGETS: [u64; NUM_SQUARES] = generate_lion_step_targets();

const fn confinement_mask() -> u64 {
    let mut mask = 0u64;
    let mut i = 0usize;
    while i < LION_CONFINEMENT.len() {
        mask |= 1u64 << LION_CONFINEMENT[i];
        i += 1;
    }
    mask
}

const fn generate_lion_step_targets() -> [u64; NUM_SQUARES] {
    let steps = jump_table(&LION_DELTAS);
    let confinement = confinement_mask();
    let mut table = [0u64; NUM_SQUARES];
    let mut sq = 0usize;
    while sq < NUM_SQUARES {
        table[sq] = steps[sq] & confinement;
        sq += 1;
    }
    table
}

/// Lion moves for `color`, sorted by move text.
pub fn generate_lion_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let Some(from) = game_state.lion_square(color) else {
        return Vec::new();
    };

    let own_occ = game_state.occupancy(color);
    let mut out = Vec::with_capacity(10);
    push_moves_from_mask(from, LION_STEP_TARGETS[from as usize] & !own_occ, &mut out);
    debug_assert!(out.iter().all(|mv| is_lion_confinement_square(mv.to)));

    if let Some(enemy) = game_state.lion_square(color.opposite()) {
        if square_file(from) == square_file(enemy) && file_is_open_between(game_state, from, enemy) {
            out.push(Move::new(from, enemy));
        }

        let diff = i32::from(from) - i32::from(enemy);
        if DIAGONAL_SHOT_OFFSETS.contains(&diff) && game_state.piece_at(CENTER_SQUARE).is_none() {
            out.push(Move::new(from, enemy));
        }
    }

    out.sort();
    out
}

/// True when every square strictly between two squares of the same file is
/// empty.
fn file_is_open_between(game_state: &GameState, a: Square, b: Square) -> bool {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    (low + BOARD_WIDTH..high)
        .step_by(BOARD_WIDTH as usize)
        .all(|sq| game_state.piece_at(sq).is_none())
}
