//! Session configuration.
//!
//! `GameMode` picks who sits in the second seat; `SessionConfig` carries the
//! tunables: seed, win bonus, and the pacing delays a presentation layer
//! waits on between actions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Who plays the second seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One human against the computer.
    Single,
    /// Two humans sharing the board.
    Multi,
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            other => Err(format!("unknown game mode `{other}` (expected `single` or `multi`)")),
        }
    }
}

/// Session tunables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Score added to the shared context when a player wins.
    pub win_bonus: i64,

    /// How long the toss animation runs before the result is applied.
    pub toss_animation_ms: u64,

    /// Interval between cosmetic animation frames.
    pub animation_frame_ms: u64,

    /// Pause before the AI acts.
    pub ai_think_ms: u64,

    /// Extra pause before the AI moves its chosen piece.
    pub ai_move_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            win_bonus: 1000,
            toss_animation_ms: 1000,
            animation_frame_ms: 50,
            ai_think_ms: 1000,
            ai_move_ms: 500,
        }
    }
}

impl SessionConfig {
    /// Config with every pacing delay set to zero (tests, headless runs).
    #[must_use]
    pub fn instant() -> Self {
        Self {
            toss_animation_ms: 0,
            animation_frame_ms: 0,
            ai_think_ms: 0,
            ai_move_ms: 0,
            ..Self::default()
        }
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the win bonus.
    #[must_use]
    pub fn with_win_bonus(mut self, bonus: i64) -> Self {
        self.win_bonus = bonus;
        self
    }

    /// Set the AI think and move delays.
    #[must_use]
    pub fn with_ai_delays(mut self, think_ms: u64, move_ms: u64) -> Self {
        self.ai_think_ms = think_ms;
        self.ai_move_ms = move_ms;
        self
    }

    /// Set the toss animation length.
    #[must_use]
    pub fn with_toss_animation(mut self, ms: u64) -> Self {
        self.toss_animation_ms = ms;
        self
    }

    #[must_use]
    pub fn toss_animation(&self) -> Duration {
        Duration::from_millis(self.toss_animation_ms)
    }

    #[must_use]
    pub fn ai_think(&self) -> Duration {
        Duration::from_millis(self.ai_think_ms)
    }

    #[must_use]
    pub fn ai_move(&self) -> Duration {
        Duration::from_millis(self.ai_move_ms)
    }
}
