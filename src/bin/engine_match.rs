//! Standalone engine-vs-engine match runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match`
//! `cargo run --release --bin engine_match -- --verbose`

use quince_chess::engines::engine_trait::{engine_for_difficulty, Difficulty};
use quince_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use quince_chess::utils::pgn::{write_pgn, PgnMetadata};
use quince_chess::utils::render_game_state::render_game_state;

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different tiers.
    let mut white = engine_for_difficulty(Difficulty::Minimax);
    let mut black = engine_for_difficulty(Difficulty::Heuristic);

    let config = MatchConfig {
        max_plies: 200,
        opening_plies: 4,
        seed: 1234,
    };

    let white_name = white.name().to_owned();
    let black_name = black.name().to_owned();
    let result = play_engine_match(white.as_mut(), black.as_mut(), &config);

    println!(
        "{} vs {}: {:?} after {} plies",
        white_name, black_name, result.verdict, result.plies_played
    );
    println!("{}", render_game_state(&result.final_position));

    if verbose {
        let token = quince_chess::move_generation::outcome::evaluate(&result.final_position)
            .result_token(result.final_position.side_to_move);
        let metadata = PgnMetadata {
            white: white_name,
            black: black_name,
            ..PgnMetadata::default()
        };
        println!("\n{}", write_pgn(&result.history, token, &metadata));
    }
}
