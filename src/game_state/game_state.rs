//! Core board state representation.
//!
//! `GameState` stores the 49 tiles, the side to move and the turn counter,
//! together with per-piece occupancy sets. The occupancy sets are a cache of
//! the tile array: every tile write goes through [`GameState::put_piece`] or
//! [`GameState::clear_square`], which update both at once, so the cache always
//! equals the set of squares holding each piece tag.

use crate::errors::CongoResult;
use crate::game_state::congo_rules::{game_status, GameStatus, STARTING_POSITION_FEN};
use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_apply::make_move_in_place;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Full position: tiles, side to move, turn counter and piece occupancy cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    cells: [Option<Piece>; NUM_SQUARES],

    // [color][piece_kind], bit `i` set when square `i` holds that piece.
    pieces: [[u64; 4]; 2],

    pub side_to_move: Color,

    /// Incremented once after every black move.
    pub turn_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
            pieces: [[0; 4]; 2],
            side_to_move: Color::White,
            turn_number: 0,
        }
    }
}

impl GameState {
    /// Empty board, White to move, turn 0.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting layout.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        // Standard layout, written out so construction cannot fail.
        let back_rank = [
            None,
            None,
            Some(PieceKind::Elephant),
            Some(PieceKind::Lion),
            Some(PieceKind::Elephant),
            None,
            Some(PieceKind::Zebra),
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            if let Some(kind) = kind {
                state.put_piece(file as Square, Piece::new(Color::Black, *kind));
                state.put_piece(42 + file as Square, Piece::new(Color::White, *kind));
            }
        }
        for file in 0..BOARD_WIDTH {
            state.put_piece(7 + file, Piece::new(Color::Black, PieceKind::Pawn));
            state.put_piece(35 + file, Piece::new(Color::White, PieceKind::Pawn));
        }
        debug_assert_eq!(state.get_fen(), STARTING_POSITION_FEN);
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> CongoResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Tile content at `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn cells(&self) -> &[Option<Piece>; NUM_SQUARES] {
        &self.cells
    }

    /// Place `piece` on `square`, replacing whatever was there.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.clear_square(square);
        self.cells[square as usize] = Some(piece);
        self.pieces[piece.color.index()][piece.kind.index()] |= 1u64 << square;
    }

    /// Remove the piece on `square`, returning it.
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        let removed = self.cells[square as usize].take();
        if let Some(piece) = removed {
            self.pieces[piece.color.index()][piece.kind.index()] &= !(1u64 << square);
        }
        removed
    }

    /// Occupancy set of one piece tag.
    #[inline]
    pub fn piece_bitboard(&self, piece: Piece) -> u64 {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    /// Occupancy set of every piece of `color`.
    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.pieces[color.index()]
            .iter()
            .copied()
            .fold(0u64, |acc, bb| acc | bb)
    }

    /// Squares holding `piece`, in ascending index order.
    pub fn piece_squares(&self, piece: Piece) -> impl Iterator<Item = Square> {
        let mut bb = self.piece_bitboard(piece);
        std::iter::from_fn(move || {
            if bb == 0 {
                return None;
            }
            let sq = bb.trailing_zeros() as Square;
            bb &= bb - 1;
            Some(sq)
        })
    }

    /// First square holding `piece`, if any.
    #[inline]
    pub fn find_piece(&self, piece: Piece) -> Option<Square> {
        let bb = self.piece_bitboard(piece);
        (bb != 0).then(|| bb.trailing_zeros() as Square)
    }

    #[inline]
    pub fn lion_square(&self, color: Color) -> Option<Square> {
        self.find_piece(Piece::new(color, PieceKind::Lion))
    }

    /// Number of pieces of `color` on the board.
    pub fn piece_count(&self, color: Color) -> u32 {
        self.pieces[color.index()]
            .iter()
            .map(|bb| bb.count_ones())
            .sum()
    }

    /// Same board with the other side to move.
    pub fn with_flipped_side_to_move(&self) -> Self {
        let mut flipped = self.clone();
        flipped.side_to_move = self.side_to_move.opposite();
        flipped
    }

    /// Apply `mv` in place. See [`make_move_in_place`].
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> CongoResult<()> {
        make_move_in_place(self, mv)
    }

    /// Every legal move for the side to move.
    #[inline]
    pub fn generate_all_legal_moves(&self) -> Vec<Move> {
        generate_all_legal_moves(self)
    }

    #[inline]
    pub fn game_status(&self) -> GameStatus {
        game_status(self)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_status() != GameStatus::Ongoing
    }

    /// Check the occupancy cache against the tile array.
    pub fn piece_index_is_consistent(&self) -> bool {
        let mut rebuilt = [[0u64; 4]; 2];
        for (sq, cell) in self.cells.iter().enumerate() {
            if let Some(piece) = cell {
                rebuilt[piece.color.index()][piece.kind.index()] |= 1u64 << sq;
            }
        }
        rebuilt == self.pieces
    }
}
