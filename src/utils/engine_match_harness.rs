//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any text
//! protocol. A game ends when the rules decide it or when Black has played
//! `max_full_moves` moves, which counts as a draw.

use std::fmt;
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{CongoError, CongoResult};
use crate::game_state::congo_rules::GameStatus;
use crate::game_state::congo_types::*;
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWins,
    BlackWins,
    /// Only the two lions are left and neither can take the other.
    DrawBareLions,
    DrawMoveLimit,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWins => Some(Color::White),
            MatchOutcome::BlackWins => Some(Color::Black),
            MatchOutcome::DrawBareLions | MatchOutcome::DrawMoveLimit => None,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchOutcome::WhiteWins => "white wins",
            MatchOutcome::BlackWins => "black wins",
            MatchOutcome::DrawBareLions => "draw (bare lions)",
            MatchOutcome::DrawMoveLimit => "draw (move limit)",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Black moves after which the game is adjudicated a draw.
    pub max_full_moves: u32,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_full_moves: 100,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={} white_moves={} black_moves={} white_ms={:.3} black_ms={:.3} final={}",
            self.outcome,
            self.white_move_count,
            self.black_move_count,
            self.white_total_time_ns as f64 / 1_000_000.0,
            self.black_total_time_ns as f64 / 1_000_000.0,
            self.final_state.get_fen()
        )
    }
}

/// Play one game from `start_state`. `engine_white` is White, `engine_black`
/// is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start_state: GameState,
    config: &MatchConfig,
) -> CongoResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut state = start_state;
    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let outcome = loop {
        match state.game_status() {
            GameStatus::WhiteWins => break MatchOutcome::WhiteWins,
            GameStatus::BlackWins => break MatchOutcome::BlackWins,
            GameStatus::Draw => break MatchOutcome::DrawBareLions,
            GameStatus::Ongoing => {}
        }
        if black_move_count >= config.max_full_moves {
            break MatchOutcome::DrawMoveLimit;
        }

        let mover = state.side_to_move;
        let legal_moves = state.generate_all_legal_moves();
        if legal_moves.is_empty() {
            // A side that cannot move loses, as in search.
            break match mover {
                Color::White => MatchOutcome::BlackWins,
                Color::Black => MatchOutcome::WhiteWins,
            };
        }

        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&state, &config.go_params)?,
            Color::Black => engine_black.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.unwrap_or(legal_moves[0]);
        if !legal_moves.contains(&chosen) {
            return Err(CongoError::EngineFailure(format!(
                "engine returned illegal move {chosen} in {}",
                state.get_fen()
            )));
        }

        state = apply_move(&state, chosen)?;
        log::debug!("{chosen} -> {}", state.get_fen());
        played_moves.push(chosen.to_string());
    };

    let result = MatchResult {
        outcome,
        final_state: state,
        played_moves,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    };
    log::info!(
        "{} vs {}: {}",
        engine_white.name(),
        engine_black.name(),
        result.outcome
    );
    Ok(result)
}
