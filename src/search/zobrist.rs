//! Zobrist hashing for transposition lookups.
//!
//! One random key per (square, piece tag). Keys are drawn once per searcher,
//! either from a fixed seed (reproducible runs and tests) or from the OS.
//! Neither the side to move nor the turn counter is hashed; the table entry
//! remembers who was to move instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::congo_types::*;

#[derive(Debug, Clone)]
pub struct ZobristKeys {
    piece_square: [[u64; Piece::TAG_COUNT]; NUM_SQUARES],
}

impl ZobristKeys {
    /// Keys from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Keys seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::from_rng(&mut StdRng::from_os_rng())
    }

    fn from_rng(rng: &mut StdRng) -> Self {
        let mut piece_square = [[0u64; Piece::TAG_COUNT]; NUM_SQUARES];
        for square in &mut piece_square {
            for key in square {
                *key = rng.random();
            }
        }
        Self { piece_square }
    }

    /// Key term for `piece` standing on `square`.
    #[inline]
    pub fn piece_square_key(&self, piece: Piece, square: Square) -> u64 {
        self.piece_square[square as usize][piece.tag_index()]
    }

    /// Full key of a position: XOR over every occupied square.
    pub fn compute_key(&self, game_state: &GameState) -> u64 {
        game_state
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(sq, cell)| cell.map(|piece| self.piece_square_key(piece, sq as Square)))
            .fold(0u64, |acc, key| acc ^ key)
    }
}
