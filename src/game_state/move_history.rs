//! Append-only record of committed moves.
//!
//! Every committed move stores the full pre-move `Position` snapshot, which
//! makes undo an exact restore and keeps notation/PGN generation independent
//! of the live game state. The sequence is never mutated retroactively
//! except by an explicit undo (pop).

use crate::game_state::game_state::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub mv: Move,
    pub position_before: Position,
}

#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move, position_before: Position) {
        self.entries.push(HistoryEntry { mv, position_before });
    }

    /// Undo support: remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
