//! Long-algebraic move resolution.
//!
//! Converts between coordinate move text (for example `e2e4`, `a7a8q`) and
//! resolved `Move` values. Resolution always goes through the legality
//! filter, so the result carries the correct capture/castling/en-passant
//! metadata and an illegal move text is an error rather than a bad `Move`.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::new();
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(kind) = mv.promotion {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

/// Resolve move text against the legal moves of `position`. A promotion
/// without an explicit piece letter resolves to the queen variant.
pub fn long_algebraic_to_move(text: &str, position: &Position) -> Result<Move, String> {
    if text.len() != 4 && text.len() != 5 {
        return Err(format!("Invalid long algebraic move: {text}"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'n') => Some(PieceKind::Knight),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'q') => Some(PieceKind::Queen),
        Some(other) => {
            return Err(format!("Invalid promotion piece: {}", *other as char));
        }
    };

    let candidates: Vec<Move> = legal_moves(position, from)
        .into_iter()
        .filter(|m| m.to == to)
        .collect();
    if candidates.is_empty() {
        return Err(format!("Not a legal move: {text}"));
    }

    let wanted = promotion.or_else(|| {
        candidates
            .iter()
            .any(|m| m.promotion.is_some())
            .then_some(PieceKind::Queen)
    });

    candidates
        .into_iter()
        .find(|m| m.promotion == wanted)
        .ok_or_else(|| format!("Not a legal move: {text}"))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::game_state::Position;

    #[test]
    fn resolution_attaches_board_metadata() {
        let position = Position::from_fen(
            "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .expect("FEN should parse");

        let ep = long_algebraic_to_move("e5d6", &position).expect("en passant should resolve");
        assert!(ep.en_passant);
        assert!(ep.is_capture());

        assert!(long_algebraic_to_move("e5e7", &position).is_err());
        assert!(long_algebraic_to_move("e5", &position).is_err());
    }

    #[test]
    fn promotion_letter_selects_the_variant_and_defaults_to_queen() {
        let position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");

        let rook = long_algebraic_to_move("a7a8r", &position).expect("should resolve");
        assert_eq!(rook.promotion, Some(PieceKind::Rook));

        let default = long_algebraic_to_move("a7a8", &position).expect("should resolve");
        assert_eq!(default.promotion, Some(PieceKind::Queen));

        assert_eq!(move_to_long_algebraic(&rook), "a7a8r");
    }

    #[test]
    fn castling_resolves_from_the_king_move_text() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle = long_algebraic_to_move("e1g1", &position).expect("should resolve");
        assert!(castle.castle_kingside);
        assert_eq!(castle.to, Square::new(7, 6));
        assert_eq!(move_to_long_algebraic(&castle), "e1g1");
    }
}
