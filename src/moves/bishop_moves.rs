use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::move_descriptions::Move;

/// Diagonal ray directions, shared with the attack oracle.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    generate_sliding_moves(position, from, piece, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::Position;

    #[test]
    fn bishop_rays_stop_before_own_piece_and_on_enemy() {
        // White bishop d4, own pawn f6, black rook b6.
        let position =
            Position::from_fen("4k3/8/1r3P2/8/3B4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let d4 = Square::new(4, 3);
        let piece = position.piece_at(d4).expect("d4 occupied");

        let mut moves = Vec::new();
        generate_bishop_moves(&position, d4, piece, &mut moves);

        // Up-right ray ends at e5 (f6 holds an own pawn).
        assert!(moves.iter().any(|m| m.to == Square::new(3, 4)));
        assert!(!moves.iter().any(|m| m.to == Square::new(2, 5)));
        // Up-left ray includes capturing the rook on b6 and stops there.
        let capture = moves
            .iter()
            .find(|m| m.to == Square::new(2, 1))
            .expect("bishop should reach b6");
        assert!(capture.is_capture());
        assert!(!moves.iter().any(|m| m.to == Square::new(1, 0)));
    }
}
