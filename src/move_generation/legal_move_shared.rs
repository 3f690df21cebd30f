//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::Position;
use crate::moves::move_descriptions::Move;

/// Fixed-offset movement (knight, king): each reachable in-bounds square is a
/// quiet move onto empty or a capture of an enemy piece.
pub fn generate_step_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(row_delta, col_delta) in offsets {
        let Some(to) = from.offset(row_delta, col_delta) else {
            continue;
        };
        match position.board.piece_at(to) {
            None => out.push(Move::quiet(from, to, piece)),
            Some(target) if target.color != piece.color => {
                out.push(Move::capture(from, to, piece, target));
            }
            Some(_) => {}
        }
    }
}

/// Ray movement (bishop, rook, queen): walk each direction until the board
/// edge, an own piece (stop before), or an enemy piece (capture, then stop).
pub fn generate_sliding_moves(
    position: &Position,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(row_delta, col_delta) in directions {
        let mut current = from;
        while let Some(to) = current.offset(row_delta, col_delta) {
            match position.board.piece_at(to) {
                None => {
                    out.push(Move::quiet(from, to, piece));
                    current = to;
                }
                Some(target) if target.color != piece.color => {
                    out.push(Move::capture(from, to, piece, target));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
