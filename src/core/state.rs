//! Session state.
//!
//! ## SessionState
//!
//! Everything a presentation layer needs to draw the board:
//! - Both players and their pieces
//! - Whose turn it is, the phase, and how many rolls they are owed
//! - The outcome waiting to be spent on a move
//! - The winner, once there is one
//! - A `Notice` describing the latest transition
//!
//! Callers only ever see clones; the session mutates its own copy through
//! the turn rules.

use serde::{Deserialize, Serialize};

use super::config::GameMode;
use super::piece::{Piece, PieceId};
use super::player::{Player, PlayerId, PlayerPair, PlayerRole};
use crate::rules::RollOutcome;

/// Where the turn state machine stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current player must throw the sticks.
    AwaitingRoll,
    /// The current player must pick a piece to move by the pending outcome.
    AwaitingPieceSelection,
    /// Terminal: a player won or the session was abandoned.
    GameOver,
}

/// Latest transition, for localized status messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    GameStarted { player: PlayerId },
    /// A bonus outcome was thrown; the player moves, then rolls again.
    RollAgain { outcome: RollOutcome },
    SelectPiece { outcome: RollOutcome },
    PieceFinished { piece: PieceId },
    PieceCaptured { count: usize },
    TurnPassed { player: PlayerId },
    PlayerWon { player: PlayerId },
    Abandoned,
}

/// Observable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub mode: GameMode,

    /// Both seats, indexed by `PlayerId`.
    pub players: PlayerPair<Player>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Outcome rolled but not yet spent on a move.
    pub pending_outcome: Option<RollOutcome>,

    /// Rolls the current player may still take this turn.
    pub rolls_owed: u32,

    pub phase: Phase,

    /// Set once, when a player finishes all four pieces.
    pub winner: Option<PlayerId>,

    /// Set when the session was ended from outside.
    pub abandoned: bool,

    /// Turn counter (starts at 1, bumps on every hand-over).
    pub turn_number: u32,

    pub notice: Option<Notice>,
}

impl SessionState {
    /// Fresh state: both players' pieces at the start, player 1 to roll once.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        let players = PlayerPair::new(|id| match (id, mode) {
            (PlayerId::FIRST, _) => Player::new(id, "Player 1", PlayerRole::Human, "#3b82f6"),
            (_, GameMode::Single) => Player::new(id, "Computer", PlayerRole::Ai, "#ef4444"),
            (_, GameMode::Multi) => Player::new(id, "Player 2", PlayerRole::Human, "#ef4444"),
        });

        Self {
            mode,
            players,
            current_player: PlayerId::FIRST,
            pending_outcome: None,
            rolls_owed: 1,
            phase: Phase::AwaitingRoll,
            winner: None,
            abandoned: false,
            turn_number: 1,
            notice: Some(Notice::GameStarted { player: PlayerId::FIRST }),
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Look up a player; `None` for an out-of-range ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Look up a piece; `None` if the ID names no piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.players.get(id.owner)?.piece(id.slot_index())
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.players.get_mut(id.owner)?.piece_mut(id.slot_index())
    }

    /// Whether no further actions will be accepted.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Pieces (of either player) on a given track square.
    pub fn pieces_at(&self, index: u8) -> impl Iterator<Item = &Piece> {
        self.players
            .values()
            .flat_map(|p| p.pieces().iter())
            .filter(move |piece| piece.track_index() == Some(index))
    }
}
