//! Pseudo-legal and legal move generation.
//!
//! Orchestrates piece-wise pseudo-legal generation and filters out every
//! candidate whose structural application would leave the mover's own king
//! attacked. Illegality is ordinary here: callers get shorter vectors, never
//! errors.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Structurally valid moves for the piece on `from`, which may still leave
/// the mover's king in check. Empty when `from` does not hold a piece of the
/// side to move; callers are expected to pre-check.
pub fn pseudo_legal_moves(position: &Position, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    let Some(piece) = position.board.piece_at(from) else {
        return out;
    };
    if piece.color != position.side_to_move {
        return out;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(position, from, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(position, from, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(position, from, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(position, from, piece, &mut out),
        PieceKind::King => generate_king_moves(position, from, piece, &mut out),
    }

    out
}

/// Pseudo-legal moves minus those that leave the mover's own king attacked.
pub fn legal_moves(position: &Position, from: Square) -> Vec<Move> {
    pseudo_legal_moves(position, from)
        .into_iter()
        .filter(|mv| !leaves_own_king_attacked(position, mv))
        .collect()
}

/// Legal moves for every piece of the side to move, in board scan order.
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    let mut out = Vec::new();
    for (from, _) in position.board.pieces_of(position.side_to_move) {
        out.extend(legal_moves(position, from));
    }
    out
}

/// Does `color` have at least one legal move? Short-circuits on the first
/// hit; checkmate/stalemate detection relies on this never enumerating the
/// full move set once one legal move is found.
pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    let probe_storage;
    let probe = if position.side_to_move == color {
        position
    } else {
        probe_storage = Position {
            side_to_move: color,
            ..position.clone()
        };
        &probe_storage
    };

    for (from, _) in probe.board.pieces_of(color) {
        for mv in pseudo_legal_moves(probe, from) {
            if !leaves_own_king_attacked(probe, &mv) {
                return true;
            }
        }
    }
    false
}

/// Apply `mv` structurally to a board clone (piece relocation, en-passant
/// removal, castling rook slide; no rights/clock bookkeeping) and test the
/// mover's king. A missing king means an upstream invariant was violated:
/// report it and treat every move as illegal.
fn leaves_own_king_attacked(position: &Position, mv: &Move) -> bool {
    let mut board = position.board.clone();
    apply_move_to_board(&mut board, mv);

    let mover = position.side_to_move;
    match board.king_square(mover) {
        Some(king_square) => is_square_attacked(&board, king_square, mover.opposite()),
        None => {
            log::error!(
                "no {mover:?} king on board while filtering candidate moves; discarding all"
            );
            true
        }
    }
}
