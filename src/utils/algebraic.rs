//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! row/col square representation reused by the FEN and PGN components. Row 0
//! is rank 8, so rank = `8 - row`.

use crate::game_state::chess_types::Square;

/// Convert an algebraic coordinate (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to its algebraic coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", square.file_char(), square.rank_char())
}
