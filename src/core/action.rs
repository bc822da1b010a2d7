//! Player actions and what they produced.
//!
//! There are only two verbs: throw the sticks, or move a piece by the
//! outcome just thrown. Humans and the AI submit the same `Action` values.

use serde::{Deserialize, Serialize};

use super::piece::{PieceId, Position};
use super::player::PlayerId;
use crate::rules::{CaptureResult, Toss};

/// A legal-action candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Throw the sticks.
    Roll,
    /// Move one of the current player's pieces by the pending outcome.
    SelectAndMove(PieceId),
}

impl Action {
    /// The piece this action moves, if any.
    #[must_use]
    pub const fn piece(&self) -> Option<PieceId> {
        match self {
            Self::Roll => None,
            Self::SelectAndMove(piece) => Some(*piece),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roll => f.write_str("roll"),
            Self::SelectAndMove(piece) => write!(f, "move {piece}"),
        }
    }
}

/// The effect of a completed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub piece: PieceId,
    /// Where the piece ended up.
    pub position: Position,
    /// Opponent pieces sent back to the start by this move.
    pub captured: Vec<PieceId>,
    /// Whether the piece crossed the finish line.
    pub finished: bool,
    /// Whether this move won the game.
    pub session_ended: bool,
    /// Who acts next (`None` once the game is over).
    pub next_player: Option<PlayerId>,
}

impl MoveResult {
    pub(crate) fn new(piece: PieceId, position: Position, capture: &CaptureResult) -> Self {
        Self {
            piece,
            position,
            captured: capture.captured.to_vec(),
            finished: position.is_finished(),
            session_ended: false,
            next_player: None,
        }
    }

    /// Whether any opponent piece was captured.
    #[must_use]
    pub fn captured_any(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// What a submitted action produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Rolled(Toss),
    Moved(MoveResult),
}
