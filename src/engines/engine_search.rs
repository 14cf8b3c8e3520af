//! Engine backed by the negamax searcher.
//!
//! Without a time budget it searches to a fixed depth. With `movetime_ms`
//! set it runs iterative deepening up to the requested (or default) depth.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{CongoError, CongoResult};
use crate::game_state::congo_types::GameState;
use crate::search::board_scoring::ScorerKind;
use crate::search::iterative_deepening::SearchConfig;
use crate::search::negamax_search::{SearchMode, Searcher, SearcherOptions};

pub struct SearchEngine {
    searcher: Searcher,
    mode: SearchMode,
    default_depth: u32,
    scorer: Option<ScorerKind>,
}

impl SearchEngine {
    pub fn new(mode: SearchMode, default_depth: u32) -> Self {
        Self::with_options(mode, default_depth, SearcherOptions::default())
    }

    pub fn with_options(mode: SearchMode, default_depth: u32, options: SearcherOptions) -> Self {
        Self {
            searcher: Searcher::new(options),
            mode,
            default_depth: default_depth.max(1),
            scorer: None,
        }
    }

    /// Override the mode's default leaf heuristic.
    pub fn with_scorer(mut self, scorer: ScorerKind) -> Self {
        self.scorer = Some(scorer);
        self
    }

    #[inline]
    pub fn mode(&self) -> SearchMode {
        self.mode
    }
}

impl Engine for SearchEngine {
    fn name(&self) -> &str {
        match self.mode {
            SearchMode::Negamax => "Congo Negamax",
            SearchMode::AlphaBeta => "Congo AlphaBeta",
            SearchMode::AlphaBetaTt => "Congo AlphaBeta+TT",
            SearchMode::Pvs => "Congo PVS",
        }
    }

    fn new_game(&mut self) {
        self.searcher.clear_tt();
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> CongoResult<EngineOutput> {
        if game_state.is_game_over() {
            return Err(CongoError::EngineFailure(format!(
                "{} asked to move in a finished game",
                self.name()
            )));
        }

        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let mut out = EngineOutput::default();

        match params.movetime_ms {
            Some(movetime_ms) => {
                let result = self.searcher.iterative_deepening(
                    game_state,
                    SearchConfig {
                        mode: self.mode,
                        max_depth: depth,
                        movetime_ms: Some(movetime_ms),
                        scorer: self.scorer,
                    },
                );
                out.info_lines
                    .extend(result.depth_reports.iter().map(|r| format!("info {r}")));
                out.info_lines.push(format!(
                    "info string reached_depth {} nodes {} nps {}",
                    result.reached_depth, result.nodes, result.nps
                ));
                out.best_move = result.best_move;
            }
            None => {
                let result = self
                    .searcher
                    .search_fixed_depth(game_state, self.mode, depth, self.scorer);
                out.info_lines.push(format!(
                    "info depth {depth} score {} nodes {}",
                    result.score, result.nodes
                ));
                out.best_move = result.best_move;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::congo_types::*;
    use crate::search::negamax_search::{SearchMode, SearcherOptions};

    fn engine(mode: SearchMode) -> SearchEngine {
        SearchEngine::with_options(mode, 2, SearcherOptions { zobrist_seed: Some(1) })
    }

    #[test]
    fn fixed_depth_search_takes_the_lion() {
        let game = GameState::from_fen("3l3/7/7/7/7/P6/3L3 w 0").expect("FEN should parse");
        let out = engine(SearchMode::Pvs)
            .choose_move(&game, &GoParams::default())
            .expect("search should produce output");
        assert_eq!(out.best_move, Some(Move::new(45, 3)));
    }

    #[test]
    fn timed_search_reports_depths() {
        let game = GameState::new_game();
        let params = GoParams {
            depth: Some(2),
            movetime_ms: Some(60_000),
        };
        let out = engine(SearchMode::AlphaBetaTt)
            .choose_move(&game, &params)
            .expect("search should produce output");
        assert!(out.best_move.is_some());
        assert!(out.info_lines.iter().any(|l| l.starts_with("info depth 2")));
    }

    #[test]
    fn finished_game_is_an_error() {
        let game = GameState::from_fen("3l3/7/7/7/7/7/3P3 w 5").expect("FEN should parse");
        assert!(engine(SearchMode::AlphaBeta)
            .choose_move(&game, &GoParams::default())
            .is_err());
    }
}
