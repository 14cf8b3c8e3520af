//! Perft node counting over the move generator and move application.
//!
//! Finished games are leaves: a decided position has no children.

use crate::errors::CongoResult;
use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    /// Leaf moves after which the mover has fewer pieces (river losses).
    pub drownings: usize,
    pub lion_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.drownings += rhs.drownings;
        self.lion_captures += rhs.lion_captures;
    }
}

/// Leaf count of the move tree below `game_state`. Finished games are leaves.
pub fn perft(game_state: &GameState, depth: u8) -> CongoResult<u64> {
    Ok(perft_counts(game_state, depth)?.nodes as u64)
}

pub fn perft_counts(game_state: &GameState, depth: u8) -> CongoResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    if game_state.is_game_over() {
        return Ok(total);
    }

    for mv in generate_all_legal_moves(game_state) {
        let next = apply_move(game_state, mv)?;

        if depth == 1 {
            total.nodes += 1;
            if let Some(target) = game_state.piece_at(mv.to) {
                if mv.from != mv.to {
                    total.captures += 1;
                    if target.kind == PieceKind::Lion {
                        total.lion_captures += 1;
                    }
                }
            }
            let mover = game_state.side_to_move;
            if next.piece_count(mover) < game_state.piece_count(mover) {
                total.drownings += 1;
            }
            continue;
        }

        total.merge(perft_counts(&next, depth - 1)?);
    }

    Ok(total)
}

/// Per-root-move leaf counts, sorted by move text.
pub fn perft_divide(game_state: &GameState, depth: u8) -> CongoResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for mv in generate_all_legal_moves(game_state) {
        let next = apply_move(game_state, mv)?;
        out.push((mv, perft(&next, depth - 1)?));
    }
    out.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_counts, perft_divide};
    use crate::game_state::congo_types::*;

    #[test]
    fn start_position_perft_depth_one_and_two() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0).expect("perft should run"), 1);
        assert_eq!(perft(&game, 1).expect("perft should run"), 25);
        // The armies cannot interact within one move each.
        assert_eq!(perft(&game, 2).expect("perft should run"), 625);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::new_game();
        let divide = perft_divide(&game, 3).expect("divide should run");
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&game, 3).expect("perft should run"));
        assert_eq!(divide.len(), 25);
    }

    #[test]
    fn counts_captures_and_river_losses() {
        // White pawns d2 and a4; black pawns c3 and e3.
        let game = GameState::from_fen("3l3/7/7/P6/2p1p2/3P3/3L3 w 0").expect("FEN should parse");
        let counts = perft_counts(&game, 1).expect("perft should run");
        assert_eq!(counts.captures, 2);
        assert_eq!(counts.lion_captures, 0);
        // Every move except a4's own steps leaves the a4 pawn to drown.
        let a4_moves = 2;
        assert_eq!(counts.drownings, counts.nodes - a4_moves);
    }

    #[test]
    fn finished_games_have_no_children() {
        let game = GameState::from_fen("3l3/7/7/7/7/7/3P3 w 5").expect("FEN should parse");
        assert_eq!(perft(&game, 2).expect("perft should run"), 0);
    }
}
