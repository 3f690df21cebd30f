//! Move application.
//!
//! `apply_move` is a deterministic, total function over legal moves: it
//! returns a fresh `Position` with every side effect of the move reflected
//! atomically (board mutation, castling-rights clearing, en-passant target,
//! halfmove clock, side-to-move flip). Illegal moves must be rejected before
//! this layer; a corrupted call is logged and leaves the position unchanged
//! rather than panicking.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::{Board, Position};
use crate::moves::move_descriptions::Move;

pub fn apply_move(position: &Position, mv: &Move) -> Position {
    if position.board.piece_at(mv.from).is_none() {
        log::error!(
            "apply_move called with empty origin {}{}; position left unchanged",
            mv.from.file_char(),
            mv.from.rank_char()
        );
        return position.clone();
    }

    let mut next = position.clone();
    let mover = next.side_to_move;

    apply_move_to_board(&mut next.board, mv);
    update_castling_rights(&mut next, mv, mover);

    // The en-passant target lives for exactly one ply.
    next.en_passant_target = if mv.is_double_pawn_push() {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    };

    if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.side_to_move = mover.opposite();
    next
}

/// Board-only effects of a move: piece relocation, en-passant pawn removal,
/// capture overwrite, castling rook slide, promotion replacement. Shared
/// between full application and the legality filter's structural probe.
pub fn apply_move_to_board(board: &mut Board, mv: &Move) {
    let Some(piece) = board.take_piece(mv.from) else {
        return;
    };

    if mv.en_passant {
        // The passed pawn sits beside the destination, on the mover's row.
        board.set_piece(Square::new(mv.from.row, mv.to.col), None);
    }

    let placed = promotion_replacement(piece, mv);
    board.set_piece(mv.to, Some(placed));

    if mv.castle_kingside {
        slide_rook(board, piece.color, 7, 5);
    } else if mv.castle_queenside {
        slide_rook(board, piece.color, 0, 3);
    }
}

/// A pawn arriving on the farthest rank is replaced by the chosen promotion
/// kind; an unset kind defaults to Queen rather than leaving an illegal pawn
/// on the last rank.
fn promotion_replacement(piece: Piece, mv: &Move) -> Piece {
    if piece.kind != PieceKind::Pawn || mv.to.row != piece.color.promotion_row() {
        return piece;
    }
    Piece::new(piece.color, mv.promotion.unwrap_or(PieceKind::Queen))
}

fn slide_rook(board: &mut Board, color: Color, from_col: u8, to_col: u8) {
    let row = color.back_rank_row();
    let rook = board.take_piece(Square::new(row, from_col));
    board.set_piece(Square::new(row, to_col), rook);
}

/// Rights are cleared when a king or rook moves, and when anything lands on
/// a rook home square (capturing the rook). Never restored.
fn update_castling_rights(position: &mut Position, mv: &Move, mover: Color) {
    if mv.piece.kind == PieceKind::King {
        position.castling_rights.clear_both(mover);
    }

    for square in [mv.from, mv.to] {
        match (square.row, square.col) {
            (7, 0) => position.castling_rights.clear_queenside(Color::White),
            (7, 7) => position.castling_rights.clear_kingside(Color::White),
            (0, 0) => position.castling_rights.clear_queenside(Color::Black),
            (0, 7) => position.castling_rights.clear_kingside(Color::Black),
            _ => {}
        }
    }
}
