//! Elephant move generation: one- or two-square jumps along files and ranks.

use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_shared::{jump_table, push_moves_from_mask};

const ELEPHANT_DELTAS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (0, 2),
    (0, -2),
    (1, 0),
    (-1, 0),
    (-2, 0),
    (2, 0),
];

pub const ELEPHANT_TARGETS: [u64; NUM_SQUARES] = jump_table(&ELEPHANT_DELTAS);

#[inline]
pub const fn elephant_targets(square: Square) -> u64 {
    ELEPHANT_TARGETS[square as usize]
}

/// Elephant moves for `color`, sorted by move text. The jump ignores any
/// piece on the intermediate square.
pub fn generate_elephant_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let own_occ = game_state.occupancy(color);
    let mut out = Vec::with_capacity(16);

    for from in game_state.piece_squares(Piece::new(color, PieceKind::Elephant)) {
        push_moves_from_mask(from, elephant_targets(from) & !own_occ, &mut out);
    }

    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::{elephant_targets, generate_elephant_moves};
    use crate::game_state::congo_types::*;

    #[test]
    fn elephant_in_the_corner_has_four_targets() {
        assert_eq!(elephant_targets(0).count_ones(), 4);
        assert_eq!(elephant_targets(24).count_ones(), 8);
    }

    #[test]
    fn elephants_jump_over_own_pawns() {
        let game = GameState::new_game();
        let moves: Vec<String> = generate_elephant_moves(&game, Color::White)
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(
            moves,
            vec![
                "c1a1".to_owned(),
                "c1b1".to_owned(),
                "c1c3".to_owned(),
                "e1e3".to_owned(),
                "e1f1".to_owned(),
            ]
        );
    }
}
