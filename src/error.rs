//! Rejected actions and setup failures.
//!
//! Every action rejection is recoverable and leaves the session untouched.
//! Each reason carries a stable `code()` for presentation layers to key
//! messages on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{PieceId, PlayerId, TRACK_LENGTH};

/// Why an action was refused.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidAction {
    #[error("the game is over")]
    GameOver,

    #[error("the session was abandoned")]
    SessionAbandoned,

    #[error("{actor} acted during {current}'s turn")]
    NotYourTurn { actor: PlayerId, current: PlayerId },

    #[error("a rolled outcome must be used before rolling again")]
    OutcomePending,

    #[error("no rolls are owed to the current player")]
    NoRollsOwed,

    #[error("nothing has been rolled yet")]
    NoPendingOutcome,

    #[error("piece {piece} does not exist")]
    UnknownPiece { piece: PieceId },

    #[error("piece {piece} belongs to the other player")]
    NotYourPiece { piece: PieceId },

    #[error("piece {piece} has already finished")]
    PieceAlreadyFinished { piece: PieceId },
}

impl InvalidAction {
    /// Stable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::GameOver => "game_over",
            Self::SessionAbandoned => "session_abandoned",
            Self::NotYourTurn { .. } => "not_your_turn",
            Self::OutcomePending => "outcome_pending",
            Self::NoRollsOwed => "no_rolls_owed",
            Self::NoPendingOutcome => "no_pending_outcome",
            Self::UnknownPiece { .. } => "unknown_piece",
            Self::NotYourPiece { .. } => "not_your_piece",
            Self::PieceAlreadyFinished { .. } => "piece_finished",
        }
    }
}

/// Why a session could not be set up.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("cannot place piece {piece}: no such piece")]
    UnknownPiece { piece: PieceId },

    #[error(
        "cannot place piece {piece} at square {index}: the track ends at {last}",
        last = TRACK_LENGTH - 1
    )]
    OffTrack { piece: PieceId, index: u8 },

    #[error("opposing pieces cannot share square {index}")]
    Colocated { index: u8 },

    #[error("{player} would start with every piece finished")]
    AlreadyWon { player: PlayerId },
}
