//! Position outcome classification.
//!
//! Pure evaluation over a `Position`: check and legal-move status decide
//! checkmate/stalemate, then the rule-based draws (fifty-move clock,
//! insufficient material) are tested. Calling it twice on the same position
//! yields the same answer and mutates nothing.

use crate::game_state::chess_rules::FIFTY_MOVE_DRAW_CLOCK;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::{Board, Position};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawInsufficientMaterial,
    DrawFiftyMove,
}

impl Outcome {
    /// Terminal outcomes end the game; `Check` does not.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing | Outcome::Check)
    }

    /// PGN result token. On checkmate the side to move is the mated side.
    pub fn result_token(self, side_to_move: Color) -> &'static str {
        match self {
            Outcome::Checkmate => match side_to_move {
                Color::White => "0-1",
                Color::Black => "1-0",
            },
            Outcome::Stalemate
            | Outcome::DrawInsufficientMaterial
            | Outcome::DrawFiftyMove => "1/2-1/2",
            Outcome::Ongoing | Outcome::Check => "*",
        }
    }
}

pub fn evaluate(position: &Position) -> Outcome {
    let side = position.side_to_move;

    let in_check = match position.board.king_square(side) {
        Some(king_square) => is_square_attacked(&position.board, king_square, side.opposite()),
        None => {
            log::error!("position has no {side:?} king; reporting a terminal outcome");
            false
        }
    };
    let has_move = has_any_legal_move(position, side);

    if in_check && !has_move {
        return Outcome::Checkmate;
    }
    if !in_check && !has_move {
        return Outcome::Stalemate;
    }
    if position.halfmove_clock >= FIFTY_MOVE_DRAW_CLOCK {
        return Outcome::DrawFiftyMove;
    }
    if insufficient_material(&position.board) {
        return Outcome::DrawInsufficientMaterial;
    }
    if in_check {
        Outcome::Check
    } else {
        Outcome::Ongoing
    }
}

/// Deliberately narrowed rule: kings alone, or at most a single minor piece
/// per side, cannot force mate. Anything with a pawn, rook, or queen, or two
/// minors on one side, plays on.
fn insufficient_material(board: &Board) -> bool {
    let mut minor_count = [0u8; 2];
    for (_, piece) in board.all_pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => {
                let index = match piece.color {
                    Color::White => 0,
                    Color::Black => 1,
                };
                minor_count[index] += 1;
            }
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }
    minor_count[0] <= 1 && minor_count[1] <= 1
}
