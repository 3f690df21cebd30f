//! Lowest-tier random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for the easiest
//! difficulty setting, diagnostics, and integration testing.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "quince random"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let legal_moves = all_legal_moves(position);
        let mut rng = rand::rng();
        legal_moves.as_slice().choose(&mut rng).copied()
    }
}
