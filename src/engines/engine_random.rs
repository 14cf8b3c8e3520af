//! Random-move engine.
//!
//! Selects uniformly from the generated moves. Used as a sparring partner in
//! matches and for smoke tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::CongoResult;
use crate::game_state::congo_types::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Congo Random"
    }

    fn choose_move(&mut self, game_state: &GameState, _params: &GoParams) -> CongoResult<EngineOutput> {
        let legal_moves = game_state.generate_all_legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::congo_types::GameState;

    #[test]
    fn picks_a_generated_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(9);
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("random engine should not fail");
        let mv = out.best_move.expect("start position has moves");
        assert!(game.generate_all_legal_moves().contains(&mv));
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::new_game();
        let pick = |seed| {
            RandomEngine::with_seed(seed)
                .choose_move(&game, &GoParams::default())
                .expect("random engine should not fail")
                .best_move
        };
        assert_eq!(pick(5), pick(5));
    }
}
