//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Slots are addressed by the low 16 bits of the key and a store always
//! replaces whatever the slot held. A probe only reports an entry whose full
//! key matches.

use crate::game_state::congo_types::{Color, Move};

/// Number of slots (one per value of the low 16 key bits).
pub const TT_SLOTS: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
    /// Side to move when the entry was written; scores are relative to it.
    pub side_to_move: Color,
}

impl TTEntry {
    /// Stored score seen from `side_to_move`.
    #[inline]
    pub fn score_for(&self, side_to_move: Color) -> i32 {
        if side_to_move == self.side_to_move {
            self.score
        } else {
            -self.score
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    stats: TTStats,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self {
            entries: vec![None; TT_SLOTS],
            stats: TTStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    #[inline]
    fn idx(key: u64) -> usize {
        (key & 0xFFFF) as usize
    }

    /// Entry stored under exactly `key`. A slot occupied by another key that
    /// shares the low 16 bits is a miss; its entry is never handed back.
    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let hit = self.entries[Self::idx(key)].filter(|e| e.key == key);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;
        self.entries[Self::idx(entry.key)] = Some(entry);
    }
}
