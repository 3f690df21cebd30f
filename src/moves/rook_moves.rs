use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::Move;

/// Orthogonal ray directions, shared with the attack oracle.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    generate_sliding_moves(position, from, piece, &ROOK_DIRECTIONS, out);
}
