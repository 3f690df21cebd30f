//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any UI,
//! with an optional seeded random opening prefix so repeated series do not
//! replay a single deterministic game.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::Position;
use crate::game_state::move_history::MoveHistory;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::outcome::{evaluate, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    WhiteWin,
    BlackWin,
    Draw(Outcome),
    /// The ply cap was reached with the game still in progress.
    Unfinished,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_plies: u8,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 4,
            seed: 0,
        }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub verdict: MatchVerdict,
    pub final_position: Position,
    pub history: MoveHistory,
    pub plies_played: u16,
}

/// Play a single seeded engine-vs-engine match. `white` moves first.
pub fn play_engine_match<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: &MatchConfig,
) -> MatchResult {
    let mut position = Position::new_game();
    let mut history = MoveHistory::new();
    let mut rng = StdRng::seed_from_u64(config.seed);

    // Random opening prefix keeps deterministic engines from mirroring each
    // other across a series.
    for _ in 0..config.opening_plies {
        let legal = all_legal_moves(&position);
        let Some(mv) = legal.as_slice().choose(&mut rng).copied() else {
            break;
        };
        history.push(mv, position.clone());
        position = apply_move(&position, &mv);
    }

    let mut plies_played = history.len() as u16;
    while plies_played < config.max_plies {
        let outcome = evaluate(&position);
        if outcome.is_terminal() {
            return MatchResult {
                verdict: verdict_for(outcome, position.side_to_move),
                final_position: position,
                history,
                plies_played,
            };
        }

        let engine = match position.side_to_move {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let Some(mv) = engine.choose_move(&position) else {
            break;
        };

        history.push(mv, position.clone());
        position = apply_move(&position, &mv);
        plies_played += 1;
    }

    let outcome = evaluate(&position);
    let verdict = if outcome.is_terminal() {
        verdict_for(outcome, position.side_to_move)
    } else {
        MatchVerdict::Unfinished
    };
    MatchResult {
        verdict,
        final_position: position,
        history,
        plies_played,
    }
}

fn verdict_for(outcome: Outcome, side_to_move: Color) -> MatchVerdict {
    match outcome {
        Outcome::Checkmate => match side_to_move {
            Color::White => MatchVerdict::BlackWin,
            Color::Black => MatchVerdict::WhiteWin,
        },
        Outcome::Stalemate | Outcome::DrawInsufficientMaterial | Outcome::DrawFiftyMove => {
            MatchVerdict::Draw(outcome)
        }
        Outcome::Ongoing | Outcome::Check => MatchVerdict::Unfinished,
    }
}
