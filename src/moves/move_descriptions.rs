//! Candidate move description shared by generation, legality filtering,
//! application, and search.
//!
//! A `Move` records everything needed to apply it and to notate it later:
//! origin, destination, the moving piece, the captured piece if any, and the
//! special-move flags (castling wings, en passant, promotion kind).

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub castle_kingside: bool,
    pub castle_queenside: bool,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            castle_kingside: false,
            castle_queenside: false,
            en_passant: false,
            promotion: None,
        }
    }

    pub fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            ..Self::quiet(from, to, piece)
        }
    }

    /// Diagonal pawn capture onto the (empty) en-passant target square.
    pub fn en_passant_capture(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            captured: Some(Piece::new(piece.color.opposite(), PieceKind::Pawn)),
            en_passant: true,
            ..Self::quiet(from, to, piece)
        }
    }

    pub fn with_promotion(self, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..self
        }
    }

    /// King move e-file -> g-file on the back rank; the rook slide is part of
    /// move application.
    pub fn castle_kingside(color: Color) -> Self {
        let row = color.back_rank_row();
        Self {
            castle_kingside: true,
            ..Self::quiet(
                Square::new(row, 4),
                Square::new(row, 6),
                Piece::new(color, PieceKind::King),
            )
        }
    }

    /// King move e-file -> c-file on the back rank.
    pub fn castle_queenside(color: Color) -> Self {
        let row = color.back_rank_row();
        Self {
            castle_queenside: true,
            ..Self::quiet(
                Square::new(row, 4),
                Square::new(row, 2),
                Piece::new(color, PieceKind::King),
            )
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle_kingside || self.castle_queenside
    }

    /// A pawn advance of two rows, the only move that creates an en-passant
    /// target.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn double_pawn_push_is_derived_from_row_distance() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let double = Move::quiet(Square::new(6, 4), Square::new(4, 4), pawn);
        let single = Move::quiet(Square::new(6, 4), Square::new(5, 4), pawn);
        assert!(double.is_double_pawn_push());
        assert!(!single.is_double_pawn_push());

        let rook = Piece::new(Color::White, PieceKind::Rook);
        let rook_move = Move::quiet(Square::new(7, 0), Square::new(5, 0), rook);
        assert!(!rook_move.is_double_pawn_push());
    }

    #[test]
    fn castle_constructors_use_back_rank_squares() {
        let white_short = Move::castle_kingside(Color::White);
        assert_eq!(white_short.from, Square::new(7, 4));
        assert_eq!(white_short.to, Square::new(7, 6));
        assert!(white_short.is_castle());

        let black_long = Move::castle_queenside(Color::Black);
        assert_eq!(black_long.from, Square::new(0, 4));
        assert_eq!(black_long.to, Square::new(0, 2));
        assert!(black_long.castle_queenside);
    }

    #[test]
    fn en_passant_capture_records_the_passed_pawn() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = Move::en_passant_capture(Square::new(3, 4), Square::new(2, 3), pawn);
        assert!(mv.en_passant);
        assert_eq!(
            mv.captured,
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }
}
