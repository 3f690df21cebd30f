//! Engine abstraction layer used by the game session.
//!
//! Defines the common move-selection interface so different opponent
//! strengths can be selected at runtime behind a single trait, keyed by the
//! difficulty tier chosen at game configuration time.

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::game_state::game_state::Position;
use crate::moves::move_descriptions::Move;

/// Opponent strength tiers, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Random,
    Heuristic,
    Minimax,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Select a move for the side to move. `None` means no legal move
    /// exists; callers must treat that like a terminal outcome and never
    /// feed it to the executor.
    fn choose_move(&mut self, position: &Position) -> Option<Move>;
}

pub fn engine_for_difficulty(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Random => Box::new(RandomEngine::new()),
        Difficulty::Heuristic => Box::new(GreedyEngine::new()),
        Difficulty::Minimax => Box::new(MinimaxEngine::new()),
    }
}
