//! Move application, including the river rules.
//!
//! A move either relocates a piece (capturing whatever stood on the
//! destination) or, when origin and destination are the same river square,
//! drowns the piece on purpose. Afterwards every piece of the mover that sat
//! on the river before the move and was not touched by it is swept away.

use crate::errors::{CongoError, CongoResult, InvalidMoveReason};
use crate::game_state::congo_rules::{is_river_square, RIVER_FIRST_SQUARE, RIVER_LAST_SQUARE};
use crate::game_state::congo_types::*;

const RIVER_LEN: usize = (RIVER_LAST_SQUARE - RIVER_FIRST_SQUARE + 1) as usize;

/// Copy-make wrapper around [`make_move_in_place`].
pub fn apply_move(game_state: &GameState, mv: Move) -> CongoResult<GameState> {
    let mut next = game_state.clone();
    make_move_in_place(&mut next, mv)?;
    Ok(next)
}

/// Apply `mv` for the side to move. On error the position is left untouched.
pub fn make_move_in_place(game_state: &mut GameState, mv: Move) -> CongoResult<()> {
    validate_move(game_state, mv)?;

    let mover = game_state.side_to_move;
    let river_before = river_snapshot(game_state);

    if is_drowning(mv) {
        game_state.clear_square(mv.from);
    } else if let Some(piece) = game_state.clear_square(mv.from) {
        game_state.put_piece(mv.to, piece);
    }

    for (offset, before) in river_before.iter().enumerate() {
        let square = RIVER_FIRST_SQUARE + offset as Square;
        let Some(piece) = before else {
            continue;
        };
        if piece.color == mover && game_state.piece_at(square) == Some(*piece) {
            game_state.clear_square(square);
        }
    }

    if mover == Color::Black {
        game_state.turn_number = game_state.turn_number.saturating_add(1);
    }
    game_state.side_to_move = mover.opposite();

    debug_assert!(game_state.piece_index_is_consistent());
    Ok(())
}

fn validate_move(game_state: &GameState, mv: Move) -> CongoResult<()> {
    if !is_on_board(mv.from) || !is_on_board(mv.to) {
        return Err(CongoError::invalid_move(mv, InvalidMoveReason::OffBoard));
    }

    let mover = game_state.side_to_move;
    match game_state.piece_at(mv.from) {
        Some(piece) if piece.color != mover => {
            return Err(CongoError::invalid_move(mv, InvalidMoveReason::WrongColor));
        }
        None => return Err(CongoError::invalid_move(mv, InvalidMoveReason::EmptyOrigin)),
        Some(_) => {}
    }

    if !is_drowning(mv)
        && game_state
            .piece_at(mv.to)
            .is_some_and(|target| target.color == mover)
    {
        return Err(CongoError::invalid_move(
            mv,
            InvalidMoveReason::OwnPieceCapture,
        ));
    }

    Ok(())
}

/// A piece standing on the river may drown itself by "moving" in place.
#[inline]
pub fn is_drowning(mv: Move) -> bool {
    mv.from == mv.to && is_river_square(mv.from)
}

fn river_snapshot(game_state: &GameState) -> [Option<Piece>; RIVER_LEN] {
    let mut snapshot = [None; RIVER_LEN];
    for (offset, slot) in snapshot.iter_mut().enumerate() {
        *slot = game_state.piece_at(RIVER_FIRST_SQUARE + offset as Square);
    }
    snapshot
}
