use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::move_descriptions::Move;

/// (row, col) deltas of the eight knight jumps. Shared with the attack
/// oracle, which probes these offsets directly instead of generating moves.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<Move>) {
    generate_step_moves(position, from, piece, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::Square;
    use crate::game_state::game_state::Position;

    #[test]
    fn starting_knight_has_two_targets() {
        let position = Position::new_game();
        let b1 = Square::new(7, 1);
        let piece = position.piece_at(b1).expect("b1 occupied");

        let mut moves = Vec::new();
        generate_knight_moves(&position, b1, piece, &mut moves);

        let mut targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        targets.sort_by_key(|sq| (sq.row, sq.col));
        assert_eq!(targets, vec![Square::new(5, 0), Square::new(5, 2)]);
    }
}
