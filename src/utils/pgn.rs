//! PGN export for game history interchange.
//!
//! Serializes a `MoveHistory` and header tags to PGN text: seven tag pairs,
//! a blank line, the numbered movetext, and a terminal result token.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::move_history::MoveHistory;
use crate::moves::move_descriptions::Move;

/// Header tag values. `Date` is stamped at write time.
#[derive(Debug, Clone)]
pub struct PgnMetadata {
    pub event: String,
    pub site: String,
    pub round: String,
    pub white: String,
    pub black: String,
}

impl Default for PgnMetadata {
    fn default() -> Self {
        Self {
            event: "Quince Chess Game".to_owned(),
            site: "Local".to_owned(),
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
        }
    }
}

/// Notation for one committed move: `O-O`/`O-O-O` for castling, otherwise
/// the piece letter (empty for pawns), an `x` when a piece was captured,
/// and the destination coordinate.
pub fn move_notation(mv: &Move) -> String {
    if mv.castle_kingside {
        return "O-O".to_owned();
    }
    if mv.castle_queenside {
        return "O-O-O".to_owned();
    }

    let mut out = String::new();
    if mv.piece.kind != PieceKind::Pawn {
        out.push(mv.piece.kind.letter());
    }
    if mv.captured.is_some() {
        out.push('x');
    }
    out.push(mv.to.file_char());
    out.push(mv.to.rank_char());
    out
}

/// Render a complete PGN document. `result` should be one of `1-0`, `0-1`,
/// `1/2-1/2`, or `*` for a game still in progress.
pub fn write_pgn(history: &MoveHistory, result: &str, metadata: &PgnMetadata) -> String {
    let result = normalize_result(result);
    let date = chrono::Local::now().format("%Y.%m.%d").to_string();

    let mut out = String::new();
    let tags = [
        ("Event", metadata.event.as_str()),
        ("Site", metadata.site.as_str()),
        ("Date", date.as_str()),
        ("Round", metadata.round.as_str()),
        ("White", metadata.white.as_str()),
        ("Black", metadata.black.as_str()),
        ("Result", result),
    ];
    for (key, value) in tags {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);
    for (ply, entry) in history.entries().iter().enumerate() {
        let notation = move_notation(&entry.mv);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, notation));
        } else {
            movetext_parts.push(notation);
        }
    }
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" | "*" => result,
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{move_notation, write_pgn, PgnMetadata};
    use crate::game_state::game_state::Position;
    use crate::game_state::move_history::MoveHistory;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn recorded_history(lans: &[&str]) -> MoveHistory {
        let mut history = MoveHistory::new();
        let mut position = Position::new_game();
        for lan in lans {
            let mv = long_algebraic_to_move(lan, &position).expect("move should resolve");
            history.push(mv, position.clone());
            position = apply_move(&position, &mv);
        }
        history
    }

    #[test]
    fn notation_follows_the_platform_conventions() {
        let position = Position::from_fen(
            "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .expect("FEN should parse");
        let ep = long_algebraic_to_move("e5d6", &position).expect("should resolve");
        assert_eq!(move_notation(&ep), "xd6");

        let castle_position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let short = long_algebraic_to_move("e1g1", &castle_position).expect("should resolve");
        assert_eq!(move_notation(&short), "O-O");
        let long = long_algebraic_to_move("e1c1", &castle_position).expect("should resolve");
        assert_eq!(move_notation(&long), "O-O-O");
    }

    #[test]
    fn document_has_tags_blank_line_movetext_and_result() {
        let history = recorded_history(&["e2e4", "e7e5", "g1f3"]);
        let pgn = write_pgn(&history, "*", &PgnMetadata::default());

        assert!(pgn.starts_with("[Event \"Quince Chess Game\"]\n"));
        for tag in ["[Site ", "[Date ", "[Round ", "[White ", "[Black ", "[Result "] {
            assert!(pgn.contains(tag), "missing tag {tag}");
        }
        assert!(pgn.contains("\n\n1. e4 e5 2. Nf3 *\n"));
    }

    #[test]
    fn unknown_result_tokens_are_normalized_to_ongoing() {
        let history = recorded_history(&["e2e4"]);
        let pgn = write_pgn(&history, "resigned", &PgnMetadata::default());
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.trim_end().ends_with("1. e4 *"));
    }
}
