//! Congo rule constants and game-end detection.
//!
//! Holds the starting position, the river row, the lion confinement squares
//! and the terminal-state classifier used by search and match play.

use crate::game_state::congo_types::*;
use crate::moves::lion_moves::generate_lion_moves;

/// Standard starting layout in position notation.
pub const STARTING_POSITION_FEN: &str = "2ele1z/ppppppp/7/7/7/PPPPPPP/2ELE1Z w 0";

/// First and last square of the river row (rank 4).
pub const RIVER_FIRST_SQUARE: Square = 21;
pub const RIVER_LAST_SQUARE: Square = 27;

/// Center square `d4`, which must be empty for the diagonal lion shot.
pub const CENTER_SQUARE: Square = 24;

/// Squares a lion may step onto with an ordinary one-square move: the two
/// 3x3 castles on files c-e.
pub const LION_CONFINEMENT: [Square; 18] = [
    2, 3, 4, 9, 10, 11, 16, 17, 18, 30, 31, 32, 37, 38, 39, 44, 45, 46,
];

#[inline]
pub const fn is_river_square(square: Square) -> bool {
    square >= RIVER_FIRST_SQUARE && square <= RIVER_LAST_SQUARE
}

#[inline]
pub fn is_lion_confinement_square(square: Square) -> bool {
    LION_CONFINEMENT.contains(&square)
}

/// Outcome classification of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    /// Winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWins => Some(Color::White),
            GameStatus::BlackWins => Some(Color::Black),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }
}

/// Classify `game_state`.
///
/// A missing lion loses. With exactly one piece per side (the two lions) the
/// game is drawn unless the side to move can take the other lion right away.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let white_lion = game_state.lion_square(Color::White);
    let black_lion = game_state.lion_square(Color::Black);

    match (white_lion, black_lion) {
        (None, Some(_)) => return GameStatus::BlackWins,
        (Some(_), None) => return GameStatus::WhiteWins,
        _ => {}
    }

    if game_state.piece_count(Color::White) == 1 && game_state.piece_count(Color::Black) == 1 {
        let can_take_lion = generate_lion_moves(game_state, game_state.side_to_move)
            .iter()
            .any(|mv| {
                game_state
                    .piece_at(mv.to)
                    .is_some_and(|piece| piece.kind == PieceKind::Lion)
            });
        return if can_take_lion {
            GameStatus::Ongoing
        } else {
            GameStatus::Draw
        };
    }

    GameStatus::Ongoing
}
