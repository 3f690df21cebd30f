use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::Position;
use crate::moves::move_descriptions::Move;

/// Promotion choices offered when a pawn reaches the farthest rank. One
/// candidate move is generated per kind.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn generate_pawn_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let color = piece.color;
    let step = color.pawn_row_step();

    // Forward advances. The double step requires both squares empty.
    if let Some(one) = from.offset(step, 0) {
        if position.board.piece_at(one).is_none() {
            push_with_promotions(Move::quiet(from, one, piece), out);

            if from.row == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * step, 0) {
                    if position.board.piece_at(two).is_none() {
                        out.push(Move::quiet(from, two, piece));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant onto the (empty) target square.
    for col_delta in [-1i8, 1] {
        let Some(to) = from.offset(step, col_delta) else {
            continue;
        };
        match position.board.piece_at(to) {
            Some(target) if target.color != color => {
                push_with_promotions(Move::capture(from, to, piece, target), out);
            }
            None if position.en_passant_target == Some(to) => {
                out.push(Move::en_passant_capture(from, to, piece));
            }
            _ => {}
        }
    }
}

/// Expand a move that ends on the farthest rank into one candidate per
/// promotion kind; pass every other move through unchanged.
fn push_with_promotions(mv: Move, out: &mut Vec<Move>) {
    if mv.to.row == mv.piece.color.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::game_state::Position;

    fn moves_from(position: &Position, from: Square) -> Vec<crate::moves::move_descriptions::Move> {
        let piece = position.piece_at(from).expect("square occupied");
        let mut out = Vec::new();
        generate_pawn_moves(position, from, piece, &mut out);
        out
    }

    #[test]
    fn starting_pawn_offers_single_and_double_step() {
        let position = Position::new_game();
        let e2 = Square::new(6, 4);
        let moves = moves_from(&position, e2);
        let mut targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        targets.sort_by_key(|sq| sq.row);
        assert_eq!(targets, vec![Square::new(4, 4), Square::new(5, 4)]);
    }

    #[test]
    fn double_step_is_blocked_by_any_intervening_piece() {
        // White pawn e2, blocker e3.
        let position =
            Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = moves_from(&position, Square::new(6, 4));
        assert!(moves.is_empty());
    }

    #[test]
    fn capture_requires_enemy_occupancy() {
        // White pawn e4; black pawn d5; own pawn f5.
        let position =
            Position::from_fen("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = moves_from(&position, Square::new(4, 4));
        assert!(moves.iter().any(|m| m.to == Square::new(3, 3) && m.is_capture()));
        assert!(!moves.iter().any(|m| m.to == Square::new(3, 5)));
    }

    #[test]
    fn en_passant_is_offered_onto_the_target_square_only() {
        // Black just played d7-d5; White pawn on e5 may capture d6 in passing.
        let position = Position::from_fen(
            "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .expect("FEN should parse");
        let moves = moves_from(&position, Square::new(3, 4));
        let ep = moves
            .iter()
            .find(|m| m.en_passant)
            .expect("en passant should be generated");
        assert_eq!(ep.to, Square::new(2, 3));
        assert!(ep.is_capture());
    }

    #[test]
    fn reaching_the_farthest_rank_expands_into_four_promotions() {
        let position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = moves_from(&position, Square::new(1, 0));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to == Square::new(0, 0)));
        assert!(moves.iter().any(|m| m.promotion == Some(PieceKind::Queen)));
        assert!(moves.iter().any(|m| m.promotion == Some(PieceKind::Knight)));
    }
}
