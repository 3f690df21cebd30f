//! FEN-to-Position parser.
//!
//! Builds a fully-populated `Position` from a Forsyth-Edwards Notation
//! string: piece placement, side to move, castling rights, en-passant
//! target, and clocks. The fullmove number is validated but not stored;
//! `Position` does not track it.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::{Board, Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    Ok(Position {
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
    })
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0 in the array convention.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            board.set_piece(Square::new(row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(CastlingRights::none());
    }

    let mut rights = CastlingRights::none();

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
