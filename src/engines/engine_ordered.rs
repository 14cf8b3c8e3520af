//! Deterministic engine that walks the move list with a running counter.
//!
//! Each call plays the move at the counter's position in the current list and
//! advances the counter; once the counter runs past the end of the list it
//! restarts at the top. A cheap, reproducible opponent for search engines.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::CongoResult;
use crate::game_state::congo_types::GameState;

#[derive(Debug, Clone, Default)]
pub struct OrderedEngine {
    next_index: usize,
}

impl OrderedEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for OrderedEngine {
    fn name(&self) -> &str {
        "Congo Ordered"
    }

    fn new_game(&mut self) {
        self.next_index = 0;
    }

    fn choose_move(&mut self, game_state: &GameState, _params: &GoParams) -> CongoResult<EngineOutput> {
        let legal_moves = game_state.generate_all_legal_moves();
        let mut out = EngineOutput::default();
        if legal_moves.is_empty() {
            return Ok(out);
        }

        if self.next_index >= legal_moves.len() {
            self.next_index = 0;
        }
        let index = self.next_index;
        self.next_index += 1;
        out.best_move = Some(legal_moves[index]);
        out.info_lines
            .push(format!("info string ordered_engine index {index}"));
        Ok(out)
    }
}
