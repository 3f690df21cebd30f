//! Mid-tier single-ply heuristic engine.
//!
//! Scores each legal move by captured-piece value plus a small center bonus
//! and random jitter, then plays the best. A small fixed probability of
//! playing a uniformly random move instead keeps this tier beatable.

use rand::prelude::IndexedRandom;
use rand::RngExt;

use crate::engines::board_scoring::MaterialScorer;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;

const RANDOM_FALLBACK_PROBABILITY: f64 = 0.1;
const JITTER_RANGE: i32 = 8;

pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Distance-scaled bonus for landing near the four center squares.
    fn center_bonus(square: Square) -> i32 {
        let row_spread = (2 * i32::from(square.row) - 7).abs();
        let col_spread = (2 * i32::from(square.col) - 7).abs();
        (14 - row_spread - col_spread) / 2
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "quince greedy"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let legal_moves = all_legal_moves(position);
        if legal_moves.is_empty() {
            return None;
        }

        let mut rng = rand::rng();
        if rng.random_bool(RANDOM_FALLBACK_PROBABILITY) {
            return legal_moves.as_slice().choose(&mut rng).copied();
        }

        let mut best_score = i32::MIN;
        let mut best_move = None;
        for mv in legal_moves {
            let capture_value = mv
                .captured
                .map(|piece| MaterialScorer::piece_value(piece.kind) * 100)
                .unwrap_or(0);
            let score =
                capture_value + Self::center_bonus(mv.to) * 4 + rng.random_range(0..JITTER_RANGE);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }
        best_move
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::game_state::Position;

    #[test]
    fn a_hanging_queen_is_usually_taken() {
        // White rook d1 can take the undefended queen on d5.
        let position =
            Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let mut engine = GreedyEngine::new();

        // The random fallback makes single calls nondeterministic; a capture
        // of this size must dominate across a handful of samples.
        let mut captures = 0;
        for _ in 0..20 {
            let mv = engine.choose_move(&position).expect("moves exist");
            if mv.to == Square::new(3, 3)
                && mv.captured.map(|p| p.kind) == Some(PieceKind::Queen)
            {
                captures += 1;
            }
        }
        assert!(captures >= 10, "queen capture picked only {captures}/20 times");
    }
}
