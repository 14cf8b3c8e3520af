//! Standalone engine-vs-engine runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match`
//! `RUST_LOG=debug cargo run --release --bin engine_match` to see every move.

use congo_engine::engines::engine_ordered::OrderedEngine;
use congo_engine::engines::engine_random::RandomEngine;
use congo_engine::engines::engine_search::SearchEngine;
use congo_engine::engines::engine_trait::Engine;
use congo_engine::errors::CongoResult;
use congo_engine::game_state::congo_types::GameState;
use congo_engine::search::negamax_search::SearchMode;
use congo_engine::utils::engine_match_harness::{play_engine_match, MatchConfig};

fn main() -> CongoResult<()> {
    env_logger::init();

    // Swap these to try other pairings.
    let pairings: Vec<(Box<dyn Engine>, Box<dyn Engine>)> = vec![
        (
            Box::new(SearchEngine::new(SearchMode::AlphaBeta, 3)),
            Box::new(OrderedEngine::new()),
        ),
        (
            Box::new(RandomEngine::new()),
            Box::new(SearchEngine::new(SearchMode::AlphaBetaTt, 3)),
        ),
        (
            Box::new(SearchEngine::new(SearchMode::Pvs, 3)),
            Box::new(SearchEngine::new(SearchMode::AlphaBeta, 2)),
        ),
    ];

    let config = MatchConfig::default();
    for (mut white, mut black) in pairings {
        let result = play_engine_match(white.as_mut(), black.as_mut(), GameState::new_game(), &config)?;
        println!("{} vs {}: {}", white.name(), black.name(), result.report());
    }
    Ok(())
}
