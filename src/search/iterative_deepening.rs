//! Iterative deepening driver with a wall-clock budget.
//!
//! Runs the configured search at depths `1..=max_depth` against a single
//! deadline measured from the start of the call. The first depth that does
//! not finish stops the loop and the last finished depth answers. The
//! transposition table is cleared once per call and keeps its entries from
//! one depth to the next.

use std::fmt;
use std::time::{Duration, Instant};

use crate::game_state::congo_types::*;
use crate::search::board_scoring::ScorerKind;
use crate::search::negamax_search::{search_root, NodeContext, SearchMode, Searcher, SearcherOptions};
use crate::search::transposition_table::TTStats;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub max_depth: u32,
    pub movetime_ms: Option<u64>,
    /// Leaf heuristic; `None` picks the mode's default.
    pub scorer: Option<ScorerKind>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            max_depth: 4,
            movetime_ms: None,
            scorer: None,
        }
    }
}

/// Outcome of one fully completed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthReport {
    pub depth: u32,
    pub score: i32,
    pub best_move: Option<Move>,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

impl fmt::Display for DepthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "depth {} score {} move ", self.depth, self.score)?;
        match self.best_move {
            Some(mv) => write!(f, "{mv}")?,
            None => f.write_str("none")?,
        }
        write!(f, " nodes {} time {}ms", self.nodes, self.elapsed_ms)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    /// Deepest fully completed depth; 0 when not even depth 1 finished.
    pub reached_depth: u32,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub nps: u64,
    pub tt_stats: TTStats,
    pub depth_reports: Vec<DepthReport>,
}

/// One-shot search with a fresh searcher.
pub fn iterative_deepening_search(game_state: &GameState, config: SearchConfig) -> SearchResult {
    Searcher::new(SearcherOptions::default()).iterative_deepening(game_state, config)
}

impl Searcher {
    pub fn iterative_deepening(&mut self, game_state: &GameState, config: SearchConfig) -> SearchResult {
        let started_at = Instant::now();
        let deadline = config
            .movetime_ms
            .map(|ms| started_at + Duration::from_millis(ms.max(1)));
        let scorer = config.scorer.unwrap_or(config.mode.default_scorer()).scorer();

        self.tt.clear();
        let mut result = SearchResult::default();
        let mut total_nodes = 0u64;

        for depth in 1..=config.max_depth {
            let depth_started = Instant::now();
            let mut ctx = NodeContext {
                scorer,
                zobrist: &self.zobrist,
                tt: &mut self.tt,
                root_depth: depth,
                deadline,
                nodes: 0,
            };
            let outcome = search_root(&mut ctx, game_state, config.mode, depth);
            total_nodes += ctx.nodes;

            let Some(scored) = outcome else {
                log::debug!("depth {depth} abandoned at the deadline after {} nodes", ctx.nodes);
                break;
            };

            let report = DepthReport {
                depth,
                score: scored.score,
                best_move: scored.best_move,
                nodes: ctx.nodes,
                elapsed_ms: depth_started.elapsed().as_millis() as u64,
            };
            log::debug!("{report}");

            result.best_move = scored.best_move;
            result.best_score = scored.score;
            result.reached_depth = depth;
            result.depth_reports.push(report);
        }

        if result.reached_depth == 0 {
            result.best_move = game_state.generate_all_legal_moves().first().copied();
            result.best_score = scorer.score(game_state);
        }

        result.nodes = total_nodes;
        result.elapsed_ms = started_at.elapsed().as_millis() as u64;
        result.nps = if result.elapsed_ms == 0 {
            0
        } else {
            result.nodes.saturating_mul(1000) / result.elapsed_ms
        };
        result.tt_stats = self.tt.stats();

        log::info!(
            "{:?} search: depth {} score {} move {} nodes {} in {}ms",
            config.mode,
            result.reached_depth,
            result.best_score,
            result
                .best_move
                .map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
            result.nodes,
            result.elapsed_ms
        );

        result
    }
}
