use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_queen_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    generate_sliding_moves(position, from, piece, &ROOK_DIRECTIONS, out);
    generate_sliding_moves(position, from, piece, &BISHOP_DIRECTIONS, out);
}
