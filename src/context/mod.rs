//! Shared score/level context for the mini-game collection.
//!
//! Every game in the collection reports into one `GameContext`. Yut Nori
//! only starts the game, adds its win bonus, and ends the game; it never
//! reads `difficulty`.

pub mod game_context;

pub use game_context::{ContextState, Difficulty, GameContext, SharedContext};
