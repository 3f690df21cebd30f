//! Top-tier bounded-depth minimax engine.
//!
//! Applies each candidate to a freshly cloned position and recurses,
//! alternating maximizing and minimizing plies against the material-balance
//! scorer, with alpha-beta cutoffs. Per-ply cloning means no search branch
//! can leak board mutations into a sibling or into the caller's position,
//! whatever path unwinds the recursion. Branching at every ply is truncated
//! to a bounded candidate count to keep the tree tractable; ties keep the
//! first candidate in generation order.

use crate::engines::board_scoring::{BoardScorer, MaterialScorer};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;

/// Reference search depth in plies.
pub const SEARCH_DEPTH: u8 = 2;

/// Candidates examined per ply before truncation.
pub const BRANCH_LIMIT: usize = 24;

/// Outside any reachable material balance.
const MATE_SCORE: i32 = 10_000;

pub struct MinimaxEngine {
    depth: u8,
    branch_limit: usize,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            branch_limit: BRANCH_LIMIT,
            scorer: MaterialScorer,
        }
    }

    fn candidates(&self, position: &Position) -> Vec<Move> {
        let mut moves = all_legal_moves(position);
        moves.truncate(self.branch_limit);
        moves
    }

    /// Apply `mv` to a clone of `position` and evaluate the resulting
    /// subtree from `perspective`'s point of view.
    fn recurse(
        &self,
        position: &Position,
        mv: &Move,
        perspective: Color,
        depth_so_far: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let next = apply_move(position, mv);

        if depth_so_far == self.depth {
            return self.scorer.score(&next, perspective);
        }

        let replies = self.candidates(&next);
        if replies.is_empty() {
            return terminal_score(&next, perspective, depth_so_far);
        }

        let maximizing = next.side_to_move == perspective;
        if maximizing {
            let mut value = -MATE_SCORE;
            for reply in &replies {
                let child =
                    self.recurse(&next, reply, perspective, depth_so_far + 1, alpha, beta);
                if child > value {
                    value = child;
                }
                if value > alpha {
                    alpha = value;
                }
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = MATE_SCORE;
            for reply in &replies {
                let child =
                    self.recurse(&next, reply, perspective, depth_so_far + 1, alpha, beta);
                if child < value {
                    value = child;
                }
                if value < beta {
                    beta = value;
                }
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

/// The side to move has no reply: mate against it, or stalemate (draw).
fn terminal_score(position: &Position, perspective: Color, depth_so_far: u8) -> i32 {
    if is_king_in_check(&position.board, position.side_to_move) {
        let mate = MATE_SCORE - i32::from(depth_so_far);
        if position.side_to_move == perspective {
            -mate
        } else {
            mate
        }
    } else {
        0
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "quince minimax"
    }

    fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let root_moves = self.candidates(position);
        let perspective = position.side_to_move;

        let mut best_score = i32::MIN;
        let mut best_move = None;
        for mv in &root_moves {
            let score = self.recurse(position, mv, perspective, 1, -MATE_SCORE, MATE_SCORE);
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
        }
        best_move
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::Position;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::outcome::{evaluate, Outcome};

    #[test]
    fn finds_a_back_rank_mate_in_one() {
        // Re1-e8 is immediate mate.
        let position =
            Position::from_fen("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::new();
        let mv = engine.choose_move(&position).expect("moves exist");
        assert_eq!(mv.to, Square::new(0, 4));

        let next = apply_move(&position, &mv);
        assert_eq!(evaluate(&next), Outcome::Checkmate);
    }

    #[test]
    fn declines_a_poisoned_capture() {
        // Taking the b4 pawn with the queen loses her to a5xb4; depth-2
        // search must see the recapture.
        let position =
            Position::from_fen("4k3/8/8/p7/1p6/8/1Q6/4K3 w - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::new();
        let mv = engine.choose_move(&position).expect("moves exist");
        assert_ne!(
            mv.to,
            Square::new(4, 1),
            "queen should not grab the defended pawn"
        );
    }

    #[test]
    fn search_does_not_mutate_the_input_position() {
        let position = Position::new_game();
        let snapshot = position.clone();
        let mut engine = MinimaxEngine::new();
        engine.choose_move(&position);
        assert_eq!(position, snapshot);
    }
}
