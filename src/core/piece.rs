//! Pieces and their positions on the track.
//!
//! ## Track Layout
//!
//! The track is a linear race of `TRACK_LENGTH` squares:
//! - `0`: the start square, where every piece begins and captured pieces return
//! - `1..TRACK_LENGTH`: squares on the board
//! - `Finished`: past the last square, permanently off the board
//!
//! ## Usage
//!
//! ```
//! use rust_yut::core::{PieceId, PlayerId, Position};
//!
//! let piece = PieceId::new(PlayerId::FIRST, 2);
//! assert_eq!(piece.to_string(), "p1-2");
//!
//! assert_eq!(Position::Track(3).track_index(), Some(3));
//! assert_eq!(Position::Finished.track_index(), None);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Number of squares on the track; index `TRACK_LENGTH` and beyond is off the board.
pub const TRACK_LENGTH: u8 = 29;

/// Pieces each player races around the track.
pub const PIECES_PER_PLAYER: usize = 4;

/// Identifier for a piece: its owner plus a slot in `0..PIECES_PER_PLAYER`.
///
/// A `PieceId` can be built for any slot; IDs whose slot or owner is out of
/// range simply do not resolve to a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    pub owner: PlayerId,
    pub slot: u8,
}

impl PieceId {
    #[must_use]
    pub const fn new(owner: PlayerId, slot: u8) -> Self {
        Self { owner, slot }
    }

    /// Slot index within the owner's piece list.
    #[must_use]
    pub const fn slot_index(self) -> usize {
        self.slot as usize
    }

    /// Whether this ID names an existing piece.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.owner.is_valid() && self.slot_index() < PIECES_PER_PLAYER
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}-{}", self.owner.0 + 1, self.slot)
    }
}

/// Where a piece currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// A square in `0..TRACK_LENGTH`.
    Track(u8),
    /// Crossed the finish line.
    Finished,
}

impl Position {
    /// The start square.
    pub const START: Self = Self::Track(0);

    /// Track index, or `None` once finished.
    #[must_use]
    pub const fn track_index(self) -> Option<u8> {
        match self {
            Self::Track(index) => Some(index),
            Self::Finished => None,
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Build a position from a track index, mapping anything past the
    /// last square to `Finished`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        if index >= TRACK_LENGTH {
            Self::Finished
        } else {
            Self::Track(index)
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Track(index) => write!(f, "{index}"),
            Self::Finished => f.write_str("finished"),
        }
    }
}

/// A single piece.
///
/// Mutated only while a move resolves; callers see pieces through
/// read-only snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
    pub finished: bool,
}

impl Piece {
    /// A fresh piece on the start square.
    #[must_use]
    pub const fn new(id: PieceId) -> Self {
        Self {
            id,
            position: Position::START,
            finished: false,
        }
    }

    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.id.owner
    }

    /// Track index while on the board.
    #[must_use]
    pub const fn track_index(&self) -> Option<u8> {
        self.position.track_index()
    }

    pub(crate) fn place(&mut self, position: Position) {
        if position.is_finished() {
            self.finish();
        } else {
            self.position = position;
            self.finished = false;
        }
    }

    pub(crate) fn finish(&mut self) {
        self.position = Position::Finished;
        self.finished = true;
    }

    /// Send a captured piece back to the start square.
    pub(crate) fn send_home(&mut self) {
        self.position = Position::START;
    }
}
