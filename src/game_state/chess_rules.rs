//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN used to initialize and validate game state setup.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove-clock value at which the fifty-move rule draws the game
/// (50 full moves = 100 plies without a pawn move or capture).
pub const FIFTY_MOVE_DRAW_CLOCK: u16 = 100;
