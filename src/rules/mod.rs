//! Yut Nori rules.
//!
//! - `roll`: stick tosses and movement outcomes
//! - `board`: track arithmetic
//! - `capture`: sending opponent pieces home
//! - `turn`: the turn state machine and the `RulesEngine` seam
//!
//! The session calls into `RulesEngine`; the state types in `core` never
//! decide legality themselves.

pub mod roll;
pub mod board;
pub mod capture;
pub mod turn;

pub use roll::{
    animation_frame, RollOutcome, RollResolver, ScriptedTosses, Sticks, Toss, TossSource,
    STICK_COUNT,
};
pub use board::{compute_target, target_from_index};
pub use capture::{resolve_capture, CaptureResult};
pub use turn::{check_move, check_roll, GameResult, RulesEngine, TurnScheduler};
