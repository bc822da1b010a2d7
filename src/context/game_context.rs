//! The shared context record and the trait sessions report through.

use log::debug;
use serde::{Deserialize, Serialize};

/// Difficulty tier used by the sibling games' timing and scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Score multiplier applied by games that scale with difficulty.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
            Self::Expert => 3.0,
        }
    }

    /// Stable lowercase name, used as a localization key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the shared record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContextState {
    pub current_score: i64,
    pub current_level: u32,
    pub is_playing: bool,
    pub is_paused: bool,
    pub difficulty: Difficulty,
}

impl Default for ContextState {
    fn default() -> Self {
        Self {
            current_score: 0,
            current_level: 1,
            is_playing: false,
            is_paused: false,
            difficulty: Difficulty::Easy,
        }
    }
}

/// What a game session needs from the shared context.
pub trait SharedContext {
    /// Current snapshot.
    fn state(&self) -> ContextState;

    /// Replace the current score.
    fn update_score(&mut self, score: i64);

    /// Mark a game as running, resetting score and level.
    fn start_game(&mut self);

    /// Mark the running game as finished.
    fn end_game(&mut self);
}

/// The session-wide record shared by every mini-game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    state: ContextState,
}

impl GameContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_level(&mut self, level: u32) {
        self.state.current_level = level;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.difficulty = difficulty;
    }

    pub fn pause_game(&mut self) {
        self.state.is_paused = true;
    }

    pub fn resume_game(&mut self) {
        self.state.is_paused = false;
    }
}

impl SharedContext for GameContext {
    fn state(&self) -> ContextState {
        self.state
    }

    fn update_score(&mut self, score: i64) {
        debug!("score {} -> {score}", self.state.current_score);
        self.state.current_score = score;
    }

    fn start_game(&mut self) {
        self.state = ContextState {
            current_score: 0,
            current_level: 1,
            is_playing: true,
            is_paused: false,
            ..self.state
        };
    }

    fn end_game(&mut self) {
        self.state.is_playing = false;
        self.state.is_paused = false;
    }
}

impl<C: SharedContext + ?Sized> SharedContext for &mut C {
    fn state(&self) -> ContextState {
        (**self).state()
    }

    fn update_score(&mut self, score: i64) {
        (**self).update_score(score);
    }

    fn start_game(&mut self) {
        (**self).start_game();
    }

    fn end_game(&mut self) {
        (**self).end_game();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_record() {
        let ctx = GameContext::new();
        let state = ctx.state();
        assert_eq!(state.current_score, 0);
        assert_eq!(state.current_level, 1);
        assert!(!state.is_playing);
        assert!(!state.is_paused);
        assert_eq!(state.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_start_resets_score_and_level() {
        let mut ctx = GameContext::new();
        ctx.set_difficulty(Difficulty::Hard);
        ctx.update_score(300);
        ctx.update_level(4);
        ctx.pause_game();

        ctx.start_game();

        let state = ctx.state();
        assert_eq!(state.current_score, 0);
        assert_eq!(state.current_level, 1);
        assert!(state.is_playing);
        assert!(!state.is_paused);
        assert_eq!(state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_pause_resume_end() {
        let mut ctx = GameContext::new();
        ctx.start_game();
        ctx.pause_game();
        assert!(ctx.state().is_paused);
        ctx.resume_game();
        assert!(!ctx.state().is_paused);

        ctx.pause_game();
        ctx.end_game();
        assert!(!ctx.state().is_playing);
        assert!(!ctx.state().is_paused);
    }

    #[test]
    fn test_multipliers() {
        let multipliers: Vec<_> = Difficulty::ALL.iter().map(|d| d.multiplier()).collect();
        assert_eq!(multipliers, vec![1.0, 1.5, 2.0, 3.0]);
    }

    #[test]
    fn test_borrowed_context() {
        let mut ctx = GameContext::new();
        {
            let mut borrowed = &mut ctx;
            SharedContext::update_score(&mut borrowed, 42);
        }
        assert_eq!(ctx.state().current_score, 42);
    }
}
