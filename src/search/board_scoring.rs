//! Pluggable board evaluation interfaces and the two stock heuristics.
//!
//! Search delegates static scoring to [`BoardScorer`], so a heuristic can be
//! swapped without touching the search code. Every scorer answers from the
//! point of view of the side to move.

use crate::game_state::congo_rules::GameStatus;
use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_generator::generate_moves_for;

/// Score of a won game, white-relative before the side-to-move flip.
pub const WIN_SCORE: i32 = 10_000;

/// Bonus for a move that lands on the enemy lion, on top of the plain attack.
const LION_ATTACK_BONUS: i32 = 10;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Which stock heuristic a search uses at its leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Basic,
    Full,
}

impl ScorerKind {
    pub fn scorer(self) -> &'static dyn BoardScorer {
        match self {
            ScorerKind::Basic => &BasicScorer,
            ScorerKind::Full => &FullScorer,
        }
    }
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Elephant => 200,
        PieceKind::Zebra => 300,
        PieceKind::Lion => 0,
    }
}

/// Material balance, white minus black.
pub fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
    let mut score = 0i32;
    for kind in PieceKind::ALL {
        let white = game_state.piece_bitboard(Piece::new(Color::White, kind)).count_ones() as i32;
        let black = game_state.piece_bitboard(Piece::new(Color::Black, kind)).count_ones() as i32;
        score += (white - black) * piece_value(kind);
    }
    score
}

/// White-relative value of a decided game or a bare-lions position.
fn settled_score_white_relative(game_state: &GameState) -> Option<i32> {
    match game_state.game_status() {
        GameStatus::WhiteWins => return Some(WIN_SCORE),
        GameStatus::BlackWins => return Some(-WIN_SCORE),
        GameStatus::Ongoing | GameStatus::Draw => {}
    }
    let bare_lions =
        game_state.piece_count(Color::White) == 1 && game_state.piece_count(Color::Black) == 1;
    bare_lions.then_some(0)
}

/// Terminal outcome plus material.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicScorer;

impl BoardScorer for BasicScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_relative = settled_score_white_relative(game_state)
            .unwrap_or_else(|| material_balance_white_minus_black(game_state));
        white_relative * game_state.side_to_move.sign()
    }
}

/// Terminal outcome, material, mobility and attacks on enemy pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullScorer;

impl FullScorer {
    /// Mobility plus attack terms for one color.
    fn activity(game_state: &GameState, color: Color) -> i32 {
        let moves = generate_moves_for(game_state, color);
        let mut total = moves.len() as i32;
        for mv in &moves {
            if let Some(target) = game_state.piece_at(mv.to) {
                if target.color != color {
                    total += 1;
                    if target.kind == PieceKind::Lion {
                        total += LION_ATTACK_BONUS;
                    }
                }
            }
        }
        total
    }
}

impl BoardScorer for FullScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_relative = match settled_score_white_relative(game_state) {
            Some(settled) => settled,
            None => {
                material_balance_white_minus_black(game_state)
                    + Self::activity(game_state, Color::White)
                    - Self::activity(game_state, Color::Black)
            }
        };
        white_relative * game_state.side_to_move.sign()
    }
}
