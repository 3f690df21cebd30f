//! Game session: the boundary the UI/social-platform collaborator talks to.
//!
//! The session owns the authoritative `Position` and `MoveHistory`. The
//! collaborator never mutates board cells; it submits square selections or
//! candidate moves and receives new state. Everything runs synchronously on
//! the caller's thread: the engine's "thinking" pause is wall-clock
//! bookkeeping drained by `poll_ai`, not a background thread.

use std::time::Instant;

use crate::engines::engine_trait::{engine_for_difficulty, Engine};
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::Position;
use crate::game_state::move_history::MoveHistory;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::outcome::{evaluate, Outcome};
use crate::moves::move_descriptions::Move;
use crate::session::game_config::{ConfigError, GameConfig, OpponentMode};
use crate::utils::pgn::{write_pgn, PgnMetadata};

/// Supplies the promotion piece when a pawn reaches the last rank. Returning
/// `None` defers the choice; the move stays pending until
/// `resolve_promotion` is called.
pub trait PromotionChooser: Send {
    fn choose(&mut self, color: Color) -> Option<PieceKind>;
}

/// What happened to a square selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionResponse {
    /// Input not currently accepted, or the square holds nothing selectable.
    Ignored,
    /// A previous selection was dropped.
    Cleared,
    /// A piece was selected; `targets` are its legal destinations.
    Selected { from: Square, targets: Vec<Square> },
    /// A move was committed.
    Moved(MoveReport),
    /// The move needs a promotion kind before it can commit.
    PromotionPending { color: Color },
}

/// What happened to a submitted candidate move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSubmission {
    Committed(MoveReport),
    PromotionPending { color: Color },
    /// Not a legal move: a no-op, never an error.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub notation: String,
    pub outcome: Outcome,
}

struct PendingPromotion {
    candidates: Vec<Move>,
}

struct PendingAiMove {
    mv: Move,
    ready_at: Instant,
    position_version: u64,
}

pub struct GameSession {
    config: GameConfig,
    position: Position,
    history: MoveHistory,
    selected: Option<Square>,
    pending_promotion: Option<PendingPromotion>,
    pending_ai: Option<PendingAiMove>,
    /// Bumped on every commit, undo, and reset; a queued engine move whose
    /// version no longer matches is stale and must not be applied.
    position_version: u64,
    engine: Option<Box<dyn Engine>>,
    promotion_chooser: Option<Box<dyn PromotionChooser>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("position", &self.position)
            .field("history", &self.history)
            .field("selected", &self.selected)
            .field("pending_promotion", &self.pending_promotion.is_some())
            .field("pending_ai", &self.pending_ai.is_some())
            .field("position_version", &self.position_version)
            .field("engine", &self.engine.is_some())
            .field("promotion_chooser", &self.promotion_chooser.is_some())
            .finish()
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = match (config.opponent_mode, config.difficulty) {
            (OpponentMode::Ai, Some(difficulty)) => Some(engine_for_difficulty(difficulty)),
            _ => None,
        };
        Ok(Self {
            config,
            position: Position::new_game(),
            history: MoveHistory::new(),
            selected: None,
            pending_promotion: None,
            pending_ai: None,
            position_version: 0,
            engine,
            promotion_chooser: None,
        })
    }

    pub fn with_promotion_chooser(mut self, chooser: Box<dyn PromotionChooser>) -> Self {
        self.promotion_chooser = Some(chooser);
        self
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.position)
    }

    pub fn pgn(&self) -> String {
        write_pgn(
            &self.history,
            self.outcome().result_token(self.position.side_to_move),
            &PgnMetadata::default(),
        )
    }

    pub fn is_ai_turn(&self) -> bool {
        self.config.opponent_mode == OpponentMode::Ai
            && self.config.ai_color == Some(self.position.side_to_move)
    }

    pub fn promotion_pending(&self) -> Option<Color> {
        self.pending_promotion
            .as_ref()
            .map(|_| self.position.side_to_move)
    }

    pub fn ai_move_pending(&self) -> bool {
        self.pending_ai.is_some()
    }

    /// Click routing: first selection highlights a piece's legal
    /// destinations, a second selection on a highlighted square submits the
    /// move. Input is ignored while the turn is not the local human's to
    /// spend (engine turn, pending engine delay, pending promotion,
    /// finished game).
    pub fn on_square_selected(&mut self, row: u8, col: u8) -> SelectionResponse {
        if row > 7 || col > 7 {
            return SelectionResponse::Ignored;
        }
        if self.pending_promotion.is_some()
            || self.pending_ai.is_some()
            || self.is_ai_turn()
            || self.outcome().is_terminal()
        {
            return SelectionResponse::Ignored;
        }

        let square = Square::new(row, col);

        if let Some(from) = self.selected {
            if square == from {
                self.selected = None;
                return SelectionResponse::Cleared;
            }
            if legal_moves(&self.position, from).iter().any(|m| m.to == square) {
                self.selected = None;
                return match self.submit_move(from, square) {
                    MoveSubmission::Committed(report) => SelectionResponse::Moved(report),
                    MoveSubmission::PromotionPending { color } => {
                        SelectionResponse::PromotionPending { color }
                    }
                    MoveSubmission::Rejected => SelectionResponse::Ignored,
                };
            }
            // Fall through: maybe the player is picking a different piece.
        }

        match self.position.piece_at(square) {
            Some(piece) if piece.color == self.position.side_to_move => {
                let mut targets: Vec<Square> = legal_moves(&self.position, square)
                    .iter()
                    .map(|m| m.to)
                    .collect();
                targets.dedup();
                self.selected = Some(square);
                SelectionResponse::Selected {
                    from: square,
                    targets,
                }
            }
            _ => {
                self.selected = None;
                SelectionResponse::Ignored
            }
        }
    }

    /// Submit a candidate move. Anything not in the legal move set is a
    /// rejected no-op: the position is untouched and nothing is raised.
    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveSubmission {
        if self.pending_promotion.is_some()
            || self.pending_ai.is_some()
            || self.is_ai_turn()
            || self.outcome().is_terminal()
        {
            return MoveSubmission::Rejected;
        }

        let candidates: Vec<Move> = legal_moves(&self.position, from)
            .into_iter()
            .filter(|m| m.to == to)
            .collect();
        let Some(first) = candidates.first().copied() else {
            return MoveSubmission::Rejected;
        };

        if first.promotion.is_some() {
            let color = self.position.side_to_move;
            if let Some(chooser) = self.promotion_chooser.as_mut() {
                if let Some(kind) = chooser.choose(color) {
                    let mv = promotion_candidate(&candidates, kind);
                    return MoveSubmission::Committed(self.commit(mv));
                }
            }
            self.pending_promotion = Some(PendingPromotion { candidates });
            return MoveSubmission::PromotionPending { color };
        }

        MoveSubmission::Committed(self.commit(first))
    }

    /// Resolve a paused promotion. `None` (dialog cancelled) falls back to
    /// Queen rather than leaving a pawn on the last rank.
    pub fn resolve_promotion(&mut self, kind: Option<PieceKind>) -> MoveSubmission {
        let Some(pending) = self.pending_promotion.take() else {
            return MoveSubmission::Rejected;
        };
        let mv = promotion_candidate(&pending.candidates, kind.unwrap_or(PieceKind::Queen));
        MoveSubmission::Committed(self.commit(mv))
    }

    /// Cooperative tick. Applies a due engine move, drops a stale one, and
    /// restarts engine scheduling when an undo left the engine on move.
    pub fn poll_ai(&mut self) -> Option<MoveReport> {
        if self.pending_ai.is_none() {
            if self.is_ai_turn() && self.pending_promotion.is_none() && !self.outcome().is_terminal()
            {
                self.schedule_ai_move();
            }
            return None;
        }

        let due = self
            .pending_ai
            .as_ref()
            .map(|p| Instant::now() >= p.ready_at)
            .unwrap_or(false);
        if !due {
            return None;
        }

        let pending = self.pending_ai.take()?;
        if pending.position_version != self.position_version {
            log::warn!(
                "dropping stale engine move computed for position version {} (now {})",
                pending.position_version,
                self.position_version
            );
            return None;
        }
        Some(self.commit(pending.mv))
    }

    /// Undo the last committed move, restoring the exact pre-move position.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.pop() else {
            return false;
        };
        self.position = entry.position_before;
        self.position_version += 1;
        self.invalidate_transient_state();
        true
    }

    pub fn reset(&mut self) {
        self.position = Position::new_game();
        self.history.clear();
        self.position_version += 1;
        self.invalidate_transient_state();
    }

    fn invalidate_transient_state(&mut self) {
        self.selected = None;
        self.pending_promotion = None;
        self.pending_ai = None;
    }

    fn commit(&mut self, mv: Move) -> MoveReport {
        self.history.push(mv, self.position.clone());
        self.position = apply_move(&self.position, &mv);
        self.position_version += 1;
        self.selected = None;

        let outcome = evaluate(&self.position);
        if !outcome.is_terminal() && self.is_ai_turn() {
            self.schedule_ai_move();
        }

        MoveReport {
            notation: crate::utils::pgn::move_notation(&mv),
            mv,
            outcome,
        }
    }

    fn schedule_ai_move(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        match engine.choose_move(&self.position) {
            Some(mv) => {
                self.pending_ai = Some(PendingAiMove {
                    mv,
                    ready_at: Instant::now() + self.config.ai_think_delay,
                    position_version: self.position_version,
                });
            }
            None => log::warn!(
                "{} returned no move in a non-terminal position",
                engine.name()
            ),
        }
    }
}

fn promotion_candidate(candidates: &[Move], kind: PieceKind) -> Move {
    let kind = match kind {
        PieceKind::Pawn | PieceKind::King => PieceKind::Queen,
        other => other,
    };
    candidates
        .iter()
        .copied()
        .find(|m| m.promotion == Some(kind))
        .unwrap_or_else(|| {
            candidates[0].with_promotion(PieceKind::Queen)
        })
}
