//! # rust-yut
//!
//! A Yut Nori engine: two players race four pieces each around a 29-square
//! track, moving by the outcome of four thrown sticks.
//!
//! ## Design Principles
//!
//! 1. **One entry point for play**: humans and the AI both go through
//!    `YutNoriSession::submit`, which validates against the turn rules.
//!
//! 2. **Atomic actions**: a call either applies completely or is rejected
//!    with an `InvalidAction` and leaves the state untouched.
//!
//! 3. **Deterministic with a seed**: tosses, AI choices, and animation
//!    frames draw from separate streams of one seeded `GameRng`.
//!
//! 4. **No clocks in the engine**: toss animations and AI pauses are
//!    reported as delays; `pacing` runs them for presentation layers.
//!
//! ## Modules
//!
//! - `core`: Players, pieces, state, actions, RNG, configuration
//! - `rules`: Tosses, board arithmetic, captures, the turn state machine
//! - `ai`: Random-move AI and seat controllers
//! - `context`: Shared score/level context
//! - `session`: The game session and its builder
//! - `pacing`: Delayed cues for animations and AI turns
//! - `error`: Rejected actions and setup failures
//!
//! ## Example
//!
//! ```
//! use rust_yut::{GameContext, GameMode, SessionConfig, YutNoriSession};
//!
//! let mut session = YutNoriSession::builder()
//!     .mode(GameMode::Single)
//!     .config(SessionConfig::instant().with_seed(7))
//!     .build(GameContext::new())
//!     .unwrap();
//!
//! let toss = session.roll().unwrap();
//! assert!(toss.outcome.delta() > 0);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod ai;
pub mod context;
pub mod session;
pub mod pacing;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, GameMode, GameRng, MoveResult, Notice, Phase, Piece, PieceId, Player,
    PlayerId, PlayerRole, Position, SessionConfig, SessionState, PIECES_PER_PLAYER, TRACK_LENGTH,
};
pub use crate::error::{InvalidAction, SetupError};
pub use crate::rules::{GameResult, RollOutcome, RulesEngine, ScriptedTosses, Toss, TossSource};
pub use crate::ai::{AiPolicy, PlayerController};
pub use crate::context::{ContextState, Difficulty, GameContext, SharedContext};
pub use crate::session::{SessionBuilder, YutNoriSession};
pub use crate::pacing::{Pacer, PacingCue};
