//! Position-to-FEN serializer.
//!
//! Mirror of the parser. `Position` does not track the fullmove number, so
//! the final field is always emitted as `1`.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = position
        .en_passant_target
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} 1",
        board, side_to_move, castling, en_passant, position.halfmove_clock
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    // Row 0 is rank 8, which FEN lists first.
    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            if let Some(piece) = position.board.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn piece_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::Position;

    #[test]
    fn starting_position_round_trips() {
        let position = Position::new_game();
        assert_eq!(position.get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn partial_rights_and_en_passant_round_trip() {
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w Kq e6 12 1";
        let position = Position::from_fen(fen).expect("FEN should parse");
        assert_eq!(position.get_fen(), fen);
    }
}
