//! Core engine types: players, pieces, state, actions, RNG, configuration.
//!
//! These are the data the turn rules operate on. Nothing here decides
//! legality; see `rules` for that.

pub mod piece;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use piece::{Piece, PieceId, Position, PIECES_PER_PLAYER, TRACK_LENGTH};
pub use player::{Player, PlayerId, PlayerPair, PlayerRole, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{GameMode, SessionConfig};
pub use action::{Action, ActionOutcome, MoveResult};
pub use state::{Notice, Phase, SessionState};
