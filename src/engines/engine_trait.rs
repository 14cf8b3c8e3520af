//! Engine abstraction used by the match harness and the `engine_match` binary.
//!
//! Every move-picking strategy sits behind [`Engine`], so a game driver can
//! pit any two of them against each other.

use crate::errors::CongoResult;
use crate::game_state::congo_types::{GameState, Move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Fixed search depth. Ignored by engines that do not search.
    pub depth: Option<u32>,
    /// Wall-clock budget for iterative deepening.
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. `best_move` is `None` only when
    /// there is nothing to play.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> CongoResult<EngineOutput>;
}
