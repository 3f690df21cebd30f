//! Per-game configuration, read once at game start.
//!
//! Configuration problems are rejected before the first ply, never
//! discovered mid-game.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::engines::engine_trait::Difficulty;
use crate::game_state::chess_types::Color;

/// Who sits across the board. Remote play shares the local submission path;
/// the transport delivering the remote side's moves lives outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMode {
    HumanLocal,
    HumanRemote,
    Ai,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub opponent_mode: OpponentMode,
    pub ai_color: Option<Color>,
    pub difficulty: Option<Difficulty>,
    /// Artificial "thinking" pause before an engine move is applied.
    pub ai_think_delay: Duration,
}

impl GameConfig {
    pub fn human_local() -> Self {
        Self {
            opponent_mode: OpponentMode::HumanLocal,
            ai_color: None,
            difficulty: None,
            ai_think_delay: Duration::ZERO,
        }
    }

    pub fn human_remote() -> Self {
        Self {
            opponent_mode: OpponentMode::HumanRemote,
            ..Self::human_local()
        }
    }

    pub fn against_ai(ai_color: Color, difficulty: Difficulty) -> Self {
        Self {
            opponent_mode: OpponentMode::Ai,
            ai_color: Some(ai_color),
            difficulty: Some(difficulty),
            ai_think_delay: Duration::from_millis(600),
        }
    }

    pub fn with_ai_think_delay(mut self, delay: Duration) -> Self {
        self.ai_think_delay = delay;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opponent_mode == OpponentMode::Ai {
            if self.difficulty.is_none() {
                return Err(ConfigError::MissingDifficulty);
            }
            if self.ai_color.is_none() {
                return Err(ConfigError::MissingAiColor);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingDifficulty,
    MissingAiColor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDifficulty => {
                write!(f, "AI opponent mode requires a difficulty tier")
            }
            ConfigError::MissingAiColor => {
                write!(f, "AI opponent mode requires an AI color")
            }
        }
    }
}

impl Error for ConfigError {}
