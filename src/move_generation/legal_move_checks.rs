//! Attack oracle and check predicates.
//!
//! `is_square_attacked` is computed per piece kind straight from the offset
//! and direction tables, never through the move generator, so castling and
//! check legality cannot recurse back into it. It is pure over an arbitrary
//! board and attacker color and takes no side-to-move.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::Board;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Is `target` attacked by any piece of `by_color` on `board`?
pub fn is_square_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    // Pawns: a pawn attacks diagonally forward, so an attacker sits one row
    // behind the target relative to its own direction of travel.
    let pawn_row_back = -by_color.pawn_row_step();
    for col_delta in [-1i8, 1] {
        if let Some(from) = target.offset(pawn_row_back, col_delta) {
            if board.piece_at(from) == Some(Piece::new(by_color, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    // Knights and the enemy king: fixed offset probes.
    if offset_probe_hits(board, target, by_color, &KNIGHT_OFFSETS, PieceKind::Knight) {
        return true;
    }
    if offset_probe_hits(board, target, by_color, &KING_OFFSETS, PieceKind::King) {
        return true;
    }

    // Sliders: walk each ray to the first occupied square and test its
    // identity.
    if ray_probe_hits(board, target, by_color, &ROOK_DIRECTIONS, PieceKind::Rook) {
        return true;
    }
    if ray_probe_hits(board, target, by_color, &BISHOP_DIRECTIONS, PieceKind::Bishop) {
        return true;
    }

    false
}

/// Is the king of `color` attacked? `false` when the king is missing; the
/// caller decides how to report that corruption.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king_square) => is_square_attacked(board, king_square, color.opposite()),
        None => false,
    }
}

fn offset_probe_hits(
    board: &Board,
    target: Square,
    by_color: Color,
    offsets: &[(i8, i8)],
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|&(row_delta, col_delta)| {
        target
            .offset(row_delta, col_delta)
            .and_then(|from| board.piece_at(from))
            == Some(Piece::new(by_color, kind))
    })
}

fn ray_probe_hits(
    board: &Board,
    target: Square,
    by_color: Color,
    directions: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(row_delta, col_delta) in directions {
        let mut current = target;
        while let Some(next) = current.offset(row_delta, col_delta) {
            match board.piece_at(next) {
                None => current = next,
                Some(piece) => {
                    if piece.color == by_color
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::Position;

    #[test]
    fn pawn_attack_direction_depends_on_attacker_color() {
        // White pawn e4 attacks d5 and f5, never d3/f3.
        let position =
            Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let board = &position.board;
        assert!(is_square_attacked(board, Square::new(3, 3), Color::White));
        assert!(is_square_attacked(board, Square::new(3, 5), Color::White));
        assert!(!is_square_attacked(board, Square::new(5, 3), Color::White));
        assert!(!is_square_attacked(board, Square::new(4, 3), Color::White));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_occupied_square() {
        // Black rook d8, White pawn d5: d4 is shielded, d6 is not.
        let position =
            Position::from_fen("3rk3/8/8/3P4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let board = &position.board;
        assert!(is_square_attacked(board, Square::new(2, 3), Color::Black));
        assert!(is_square_attacked(board, Square::new(3, 3), Color::Black));
        assert!(!is_square_attacked(board, Square::new(4, 3), Color::Black));
    }

    #[test]
    fn queen_attacks_along_both_ray_families() {
        let position =
            Position::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let board = &position.board;
        // Rank, file, and diagonal away from d5.
        assert!(is_square_attacked(board, Square::new(3, 0), Color::Black));
        assert!(is_square_attacked(board, Square::new(7, 3), Color::Black));
        assert!(is_square_attacked(board, Square::new(6, 0), Color::Black));
        assert!(!is_square_attacked(board, Square::new(5, 4), Color::Black));
    }

    #[test]
    fn check_detection_uses_the_opponent_color() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&position.board, Color::White));
        assert!(!is_king_in_check(&position.board, Color::Black));
    }
}
