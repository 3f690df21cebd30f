//! Perft: legal-move tree walks with known node counts.
//!
//! The standard cross-check for move generation and application. Each node
//! clones the position, so a miscount points at generation or application
//! logic, never at state restoration.

use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub fn perft_legal(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = all_legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft_legal(&apply_move(position, mv), depth - 1))
        .sum()
}
