//! Core board and position representation.
//!
//! `Position` is the central model for the engine: an owned snapshot of the
//! board plus side-to-move, castling rights, en-passant target, and the
//! halfmove clock. It is the single source of truth threaded explicitly
//! through every call; components never read or write state they were not
//! handed. Copying a `Position` copies its board (value semantics).

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// 8x8 piece placement, at most one piece per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return the piece on `square`, if any.
    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    /// Locate the king of `color`. `None` signals a corrupted board; callers
    /// decide how loudly to report that.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Iterate over every occupied square of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.all_pieces()
            .filter(move |(_, piece)| piece.color == color)
    }

    /// Iterate over every occupied square, row 0 (rank 8) first.
    pub fn all_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8)
            .flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

/// Immutable-by-convention snapshot of a game position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped over on its immediately preceding double step,
    /// valid for exactly one following ply.
    pub en_passant_target: Option<Square>,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u16,
}

impl Position {
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    #[test]
    fn new_game_places_pieces_in_array_convention() {
        let position = Position::new_game();
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.en_passant_target, None);

        // Row 0 is Black's back rank, row 7 is White's.
        let black_king = position.piece_at(Square::new(0, 4)).expect("e8 occupied");
        assert_eq!(black_king.color, Color::Black);
        assert_eq!(black_king.kind, PieceKind::King);

        let white_king = position.piece_at(Square::new(7, 4)).expect("e1 occupied");
        assert_eq!(white_king.color, Color::White);
        assert_eq!(white_king.kind, PieceKind::King);

        let white_pawn = position.piece_at(Square::new(6, 0)).expect("a2 occupied");
        assert_eq!(white_pawn.kind, PieceKind::Pawn);
        assert!(position.piece_at(Square::new(4, 4)).is_none());
    }

    #[test]
    fn king_square_finds_both_kings() {
        let position = Position::new_game();
        assert_eq!(
            position.board.king_square(Color::White),
            Some(Square::new(7, 4))
        );
        assert_eq!(
            position.board.king_square(Color::Black),
            Some(Square::new(0, 4))
        );
    }

    #[test]
    fn cloned_position_owns_its_board() {
        let original = Position::new_game();
        let mut copy = original.clone();
        copy.board.set_piece(Square::new(4, 4), None);
        assert_ne!(original, copy);
        assert!(original.piece_at(Square::new(6, 0)).is_some());
    }
}
