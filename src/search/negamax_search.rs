//! Negamax family of fixed-depth searches.
//!
//! Four interchangeable strategies share one recursive shape: a node at depth
//! zero or in a finished game returns the scorer's value, otherwise every
//! generated move is applied to a copy of the position, the child is searched
//! and its value negated. Each call returns its own score together with the
//! move that produced it, so the root call's move is the answer.
//!
//! A node returns `None` once the deadline carried by [`NodeContext`] has
//! passed. The caller propagates it upward unchanged, so an abandoned
//! subtree can never be mistaken for a real score.

use std::time::Instant;

use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::search::board_scoring::{BoardScorer, ScorerKind};
use crate::search::transposition_table::{Bound, TTEntry, TTStats, TranspositionTable};
use crate::search::zobrist::ZobristKeys;

/// Window bound and the value of a node without legal moves.
pub const INF: i32 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Full-width negamax.
    Negamax,
    AlphaBeta,
    /// Alpha-beta backed by the transposition table.
    #[default]
    AlphaBetaTt,
    /// Principal-variation search.
    Pvs,
}

impl SearchMode {
    /// Leaf heuristic used when the caller does not pick one.
    pub const fn default_scorer(self) -> ScorerKind {
        match self {
            SearchMode::Negamax => ScorerKind::Basic,
            SearchMode::AlphaBeta | SearchMode::AlphaBetaTt | SearchMode::Pvs => ScorerKind::Full,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "negamax" => Some(SearchMode::Negamax),
            "alphabeta" | "ab" => Some(SearchMode::AlphaBeta),
            "alphabetatt" | "tt" => Some(SearchMode::AlphaBetaTt),
            "pvs" => Some(SearchMode::Pvs),
            _ => None,
        }
    }
}

/// Value of a searched node and the move that achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl Scored {
    #[inline]
    const fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    /// Starting point of every expansion; also the result of a node that has
    /// no legal moves.
    pub const NO_MOVES: Scored = Scored::leaf(-INF);
}

/// State threaded through one search call.
pub struct NodeContext<'a> {
    pub scorer: &'a dyn BoardScorer,
    pub zobrist: &'a ZobristKeys,
    pub tt: &'a mut TranspositionTable,
    /// Depth requested at the root; table entries of exactly this depth are
    /// never used to cut a node.
    pub root_depth: u32,
    pub deadline: Option<Instant>,
    pub nodes: u64,
}

impl NodeContext<'_> {
    /// Count the node; false once the deadline has passed.
    #[inline]
    fn enter_node(&mut self) -> bool {
        if let Some(limit) = self.deadline {
            if Instant::now() >= limit {
                return false;
            }
        }
        self.nodes += 1;
        true
    }

    #[inline]
    fn static_value(&self, game_state: &GameState, depth: u32) -> Option<Scored> {
        (depth == 0 || game_state.is_game_over())
            .then(|| Scored::leaf(self.scorer.score(game_state)))
    }
}

fn child_state(game_state: &GameState, mv: Move) -> Option<GameState> {
    match apply_move(game_state, mv) {
        Ok(next) => Some(next),
        Err(err) => {
            log::error!("generated move rejected: {err}");
            None
        }
    }
}

/// Full-width negamax.
pub fn negamax(ctx: &mut NodeContext<'_>, game_state: &GameState, depth: u32) -> Option<Scored> {
    if !ctx.enter_node() {
        return None;
    }
    if let Some(leaf) = ctx.static_value(game_state, depth) {
        return Some(leaf);
    }

    let mut best = Scored::NO_MOVES;
    for mv in game_state.generate_all_legal_moves() {
        let Some(child) = child_state(game_state, mv) else {
            continue;
        };
        let value = -negamax(ctx, &child, depth - 1)?.score;
        if value > best.score {
            best = Scored {
                score: value,
                best_move: Some(mv),
            };
        }
    }
    Some(best)
}

/// Fail-soft alpha-beta.
pub fn alpha_beta(
    ctx: &mut NodeContext<'_>,
    game_state: &GameState,
    depth: u32,
    mut alpha: i32,
    beta: i32,
) -> Option<Scored> {
    if !ctx.enter_node() {
        return None;
    }
    if let Some(leaf) = ctx.static_value(game_state, depth) {
        return Some(leaf);
    }

    let mut best = Scored::NO_MOVES;
    for mv in game_state.generate_all_legal_moves() {
        let Some(child) = child_state(game_state, mv) else {
            continue;
        };
        let value = -alpha_beta(ctx, &child, depth - 1, -beta, -alpha)?.score;
        if value > best.score {
            best = Scored {
                score: value,
                best_move: Some(mv),
            };
        }
        alpha = alpha.max(best.score);
        if alpha >= beta {
            break;
        }
    }
    Some(best)
}

/// Alpha-beta with transposition lookups.
///
/// A cached entry at least as deep as the request (and not written at the
/// root depth) either answers the node outright or narrows the window. The
/// stored score is negated when it was written for the other side.
pub fn alpha_beta_tt(
    ctx: &mut NodeContext<'_>,
    game_state: &GameState,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> Option<Scored> {
    if !ctx.enter_node() {
        return None;
    }

    let alpha_orig = alpha;
    let side = game_state.side_to_move;
    let key = ctx.zobrist.compute_key(game_state);

    if let Some(entry) = ctx.tt.probe(key) {
        if entry.depth >= depth && entry.depth != ctx.root_depth {
            let cached = Scored {
                score: entry.score_for(side),
                best_move: entry.best_move,
            };
            match entry.bound {
                Bound::Exact => return Some(cached),
                Bound::Lower => alpha = alpha.max(cached.score),
                Bound::Upper => beta = beta.min(cached.score),
            }
            if alpha >= beta {
                return Some(cached);
            }
        }
    }

    if let Some(leaf) = ctx.static_value(game_state, depth) {
        return Some(leaf);
    }

    let mut best = Scored::NO_MOVES;
    for mv in game_state.generate_all_legal_moves() {
        let Some(child) = child_state(game_state, mv) else {
            continue;
        };
        let value = -alpha_beta_tt(ctx, &child, depth - 1, -beta, -alpha)?.score;
        if value > best.score {
            best = Scored {
                score: value,
                best_move: Some(mv),
            };
        }
        alpha = alpha.max(best.score);
        if alpha >= beta {
            break;
        }
    }

    let bound = if best.score <= alpha_orig {
        Bound::Upper
    } else if best.score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.tt.store(TTEntry {
        key,
        depth,
        score: best.score,
        bound,
        best_move: best.best_move,
        side_to_move: side,
    });

    Some(best)
}

/// Principal-variation search.
///
/// The first child gets the full window, later ones a null window around
/// alpha; a probe landing strictly inside `(alpha, beta)` is searched again
/// with `(value, beta)`.
pub fn pvs(
    ctx: &mut NodeContext<'_>,
    game_state: &GameState,
    depth: u32,
    mut alpha: i32,
    beta: i32,
) -> Option<Scored> {
    if !ctx.enter_node() {
        return None;
    }
    if let Some(leaf) = ctx.static_value(game_state, depth) {
        return Some(leaf);
    }

    let mut best = Scored::NO_MOVES;
    for (i, mv) in game_state.generate_all_legal_moves().into_iter().enumerate() {
        let Some(child) = child_state(game_state, mv) else {
            continue;
        };
        let value = if i == 0 {
            -pvs(ctx, &child, depth - 1, -beta, -alpha)?.score
        } else {
            let probe = -pvs(ctx, &child, depth - 1, -alpha - 1, -alpha)?.score;
            if alpha < probe && probe < beta {
                -pvs(ctx, &child, depth - 1, -beta, -probe)?.score
            } else {
                probe
            }
        };
        if value > best.score {
            best = Scored {
                score: value,
                best_move: Some(mv),
            };
        }
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    Some(best)
}

/// Run one root search of `mode` with a full window.
pub fn search_root(
    ctx: &mut NodeContext<'_>,
    game_state: &GameState,
    mode: SearchMode,
    depth: u32,
) -> Option<Scored> {
    ctx.root_depth = depth;
    match mode {
        SearchMode::Negamax => negamax(ctx, game_state, depth),
        SearchMode::AlphaBeta => alpha_beta(ctx, game_state, depth, -INF, INF),
        SearchMode::AlphaBetaTt => alpha_beta_tt(ctx, game_state, depth, -INF, INF),
        SearchMode::Pvs => pvs(ctx, game_state, depth, -INF, INF),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearcherOptions {
    /// Fixed seed for the Zobrist keys; `None` draws them from the OS.
    pub zobrist_seed: Option<u64>,
}

/// Result of one fixed-depth search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDepthResult {
    pub score: i32,
    pub best_move: Option<Move>,
    pub nodes: u64,
}

/// Owns the Zobrist keys and the transposition table of one engine.
#[derive(Debug, Clone)]
pub struct Searcher {
    pub(crate) zobrist: ZobristKeys,
    pub(crate) tt: TranspositionTable,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearcherOptions::default())
    }
}

impl Searcher {
    pub fn new(options: SearcherOptions) -> Self {
        let zobrist = match options.zobrist_seed {
            Some(seed) => ZobristKeys::new(seed),
            None => ZobristKeys::from_os_rng(),
        };
        Self {
            zobrist,
            tt: TranspositionTable::new(),
        }
    }

    #[inline]
    pub fn zobrist(&self) -> &ZobristKeys {
        &self.zobrist
    }

    #[inline]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Search `game_state` to exactly `depth` plies without a time limit.
    /// The table starts empty on every call.
    pub fn search_fixed_depth(
        &mut self,
        game_state: &GameState,
        mode: SearchMode,
        depth: u32,
        scorer: Option<ScorerKind>,
    ) -> FixedDepthResult {
        self.tt.clear();
        let scorer = scorer.unwrap_or(mode.default_scorer()).scorer();
        let mut ctx = NodeContext {
            scorer,
            zobrist: &self.zobrist,
            tt: &mut self.tt,
            root_depth: depth,
            deadline: None,
            nodes: 0,
        };
        // Without a deadline the search always runs to completion.
        let scored = search_root(&mut ctx, game_state, mode, depth).unwrap_or(Scored::NO_MOVES);
        FixedDepthResult {
            score: scored.score,
            best_move: scored.best_move,
            nodes: ctx.nodes,
        }
    }

    /// Best move at `depth` with the mode's default scorer.
    pub fn best_move(&mut self, game_state: &GameState, mode: SearchMode, depth: u32) -> Option<Move> {
        self.search_fixed_depth(game_state, mode, depth, None).best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::WIN_SCORE;

    fn searcher() -> Searcher {
        Searcher::new(SearcherOptions {
            zobrist_seed: Some(0xC0FFEE),
        })
    }

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn depth_one_negamax_from_the_start_plays_a_generated_move() {
        let game = GameState::new_game();
        let mv = searcher()
            .best_move(&game, SearchMode::Negamax, 1)
            .expect("start position has moves");
        assert!(game.generate_all_legal_moves().contains(&mv));
        assert_ne!(game.piece_at(mv.from).map(|p| p.kind), Some(PieceKind::Lion));
    }

    #[test]
    fn every_mode_takes_the_lion_when_it_can() {
        let game = state("3l3/7/7/7/7/P6/3L3 w 0");
        for mode in [
            SearchMode::Negamax,
            SearchMode::AlphaBeta,
            SearchMode::AlphaBetaTt,
            SearchMode::Pvs,
        ] {
            let result = searcher().search_fixed_depth(&game, mode, 2, None);
            assert_eq!(result.best_move, Some(Move::new(45, 3)), "{mode:?}");
            assert_eq!(result.score, WIN_SCORE, "{mode:?}");
        }
    }

    #[test]
    fn depth_zero_returns_the_static_value() {
        let game = state("3l3/7/7/7/7/3Z3/3L3 b 0");
        let result = searcher().search_fixed_depth(&game, SearchMode::AlphaBeta, 0, Some(ScorerKind::Basic));
        assert_eq!(result.score, -300);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn pruning_matches_full_width_search() {
        let mut searcher = searcher();
        let mut game = GameState::new_game();
        for mv_text in ["c2c3", "e6e5", "g1f3"] {
            let mv = crate::utils::long_algebraic::long_algebraic_to_move(mv_text)
                .expect("move text should parse");
            game.apply_move(mv).expect("move should apply");
        }
        for scorer in [ScorerKind::Basic, ScorerKind::Full] {
            let full = searcher.search_fixed_depth(&game, SearchMode::Negamax, 3, Some(scorer));
            let ab = searcher.search_fixed_depth(&game, SearchMode::AlphaBeta, 3, Some(scorer));
            let pv = searcher.search_fixed_depth(&game, SearchMode::Pvs, 3, Some(scorer));
            assert_eq!(ab.score, full.score);
            assert_eq!(ab.best_move, full.best_move);
            assert_eq!(pv.score, full.score);
            assert!(ab.nodes <= full.nodes);
        }
    }

    #[test]
    fn table_search_matches_alpha_beta_and_records_entries() {
        let mut searcher = searcher();
        let game = GameState::new_game();
        let ab = searcher.search_fixed_depth(&game, SearchMode::AlphaBeta, 2, None);
        let tt = searcher.search_fixed_depth(&game, SearchMode::AlphaBetaTt, 2, None);
        assert_eq!((tt.score, tt.best_move), (ab.score, ab.best_move));
        assert!(searcher.tt_stats().stores > 0);
    }

    #[test]
    fn expired_deadline_abandons_the_search() {
        let mut searcher = searcher();
        let game = GameState::new_game();
        let mut ctx = NodeContext {
            scorer: ScorerKind::Full.scorer(),
            zobrist: &searcher.zobrist,
            tt: &mut searcher.tt,
            root_depth: 3,
            deadline: Some(Instant::now()),
            nodes: 0,
        };
        assert_eq!(search_root(&mut ctx, &game, SearchMode::AlphaBeta, 3), None);
        assert_eq!(ctx.nodes, 0);
    }

    /// White lion on d1 can take the black lion on d7; a white pawn on a2
    /// leaves every other reply at +100 under the basic scorer.
    fn lion_race() -> GameState {
        state("3l3/7/7/7/7/P6/3L3 w 0")
    }

    fn cached(searcher: &Searcher, game: &GameState, depth: u32, score: i32, bound: Bound, side: Color) -> TTEntry {
        TTEntry {
            key: searcher.zobrist.compute_key(game),
            depth,
            score,
            bound,
            best_move: Some(Move::new(35, 28)),
            side_to_move: side,
        }
    }

    /// Run `alpha_beta_tt` on `game` with `entry` as the only table content.
    fn search_with_entry(
        searcher: &mut Searcher,
        game: &GameState,
        entry: TTEntry,
        root_depth: u32,
        depth: u32,
        window: (i32, i32),
    ) -> (Scored, u64) {
        searcher.tt.clear();
        searcher.tt.store(entry);
        let mut ctx = NodeContext {
            scorer: ScorerKind::Basic.scorer(),
            zobrist: &searcher.zobrist,
            tt: &mut searcher.tt,
            root_depth,
            deadline: None,
            nodes: 0,
        };
        let scored = alpha_beta_tt(&mut ctx, game, depth, window.0, window.1).expect("no deadline set");
        (scored, ctx.nodes)
    }

    #[test]
    fn exact_entry_answers_the_node() {
        let mut searcher = searcher();
        let game = lion_race();
        let entry = cached(&searcher, &game, 2, 123, Bound::Exact, Color::White);
        let (scored, nodes) = search_with_entry(&mut searcher, &game, entry, 5, 1, (-INF, INF));
        assert_eq!(scored, Scored { score: 123, best_move: Some(Move::new(35, 28)) });
        assert_eq!(nodes, 1);
    }

    #[test]
    fn entry_written_for_the_other_side_is_negated() {
        let mut searcher = searcher();
        let game = lion_race();
        let entry = cached(&searcher, &game, 2, 123, Bound::Exact, Color::Black);
        let (scored, nodes) = search_with_entry(&mut searcher, &game, entry, 5, 1, (-INF, INF));
        assert_eq!(scored.score, -123);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn lower_bound_above_beta_cuts_with_the_cached_score() {
        let mut searcher = searcher();
        let game = lion_race();
        let entry = cached(&searcher, &game, 1, 500, Bound::Lower, Color::White);
        let (scored, nodes) = search_with_entry(&mut searcher, &game, entry, 5, 1, (-INF, 400));
        assert_eq!(scored.score, 500);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn upper_bound_below_alpha_cuts_with_the_cached_score() {
        let mut searcher = searcher();
        let game = lion_race();
        let entry = cached(&searcher, &game, 1, -500, Bound::Upper, Color::White);
        let (scored, nodes) = search_with_entry(&mut searcher, &game, entry, 5, 1, (-400, INF));
        assert_eq!(scored.score, -500);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn upper_bound_lowers_beta_and_stops_at_the_first_reply_above_it() {
        let mut searcher = searcher();
        let game = lion_race();
        let entry = cached(&searcher, &game, 1, 50, Bound::Upper, Color::White);
        let (scored, nodes) = search_with_entry(&mut searcher, &game, entry, 5, 1, (-INF, INF));

        // d1c1 is generated first and already reaches the lowered beta.
        assert_eq!(scored, Scored { score: 100, best_move: Some(Move::new(45, 44)) });
        assert_eq!(nodes, 2);

        let key = searcher.zobrist.compute_key(&game);
        let stored = searcher.tt.probe(key).expect("node result is stored");
        assert_eq!(stored.bound, Bound::Lower);
        assert_eq!(stored.score, 100);
    }

    #[test]
    fn lower_bound_raises_alpha_and_narrows_the_replies() {
        let mut searcher = searcher();
        // No lion capture for White; every line ends at +100.
        let game = state("3l3/7/7/7/7/P6/2L4 w 0");

        let ignored = cached(&searcher, &game, 0, 150, Bound::Lower, Color::White);
        let (plain, plain_nodes) = search_with_entry(&mut searcher, &game, ignored, 5, 2, (-INF, 200));

        let raised = cached(&searcher, &game, 2, 150, Bound::Lower, Color::White);
        let (narrowed, narrowed_nodes) = search_with_entry(&mut searcher, &game, raised, 5, 2, (-INF, 200));

        assert_eq!(plain.score, 100);
        assert_eq!(narrowed.score, 100);
        assert_eq!(narrowed.best_move, plain.best_move);
        assert!(narrowed_nodes < plain_nodes, "{narrowed_nodes} vs {plain_nodes}");
    }

    #[test]
    fn root_depth_and_shallow_entries_are_not_trusted() {
        let mut searcher = searcher();
        let game = lion_race();
        let at_root = cached(&searcher, &game, 1, 999, Bound::Exact, Color::White);
        let (scored, nodes) = search_with_entry(&mut searcher, &game, at_root, 1, 1, (-INF, INF));
        assert_eq!(scored, Scored { score: WIN_SCORE, best_move: Some(Move::new(45, 3)) });
        assert!(nodes > 1);

        let shallow = cached(&searcher, &game, 0, 999, Bound::Exact, Color::White);
        let (scored, _) = search_with_entry(&mut searcher, &game, shallow, 5, 1, (-INF, INF));
        assert_eq!(scored.score, WIN_SCORE);
    }

    #[test]
    fn search_modes_parse_from_text() {
        assert_eq!(SearchMode::parse("PVS"), Some(SearchMode::Pvs));
        assert_eq!(SearchMode::parse("tt"), Some(SearchMode::AlphaBetaTt));
        assert_eq!(SearchMode::parse("minimax"), None);
        assert_eq!(SearchMode::Negamax.default_scorer(), ScorerKind::Basic);
    }
}
