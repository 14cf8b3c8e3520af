//! Crate root module declarations for the Congo engine.
//!
//! Exposes the board model, move generation, search, engines, the line-based
//! command loop and text helpers so binaries, tests and benchmarks can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod congo_rules;
    pub mod congo_types;
    pub mod game_state;
}

pub mod moves {
    pub mod elephant_moves;
    pub mod lion_moves;
    pub mod pawn_moves;
    pub mod zebra_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod negamax_search;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_ordered;
    pub mod engine_random;
    pub mod engine_search;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod command_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
