//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats at the board.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`. Both players' pieces live
//! in one pair, so neither collection ever aliases the other.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::{Piece, PieceId, PIECES_PER_PLAYER};

/// Number of seats in a session.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: `PlayerId(0)` moves first, `PlayerId(1)` second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player (always human).
    pub const FIRST: Self = Self(0);
    /// The second player (human or AI, depending on mode).
    pub const SECOND: Self = Self(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this ID names one of the two seats.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < PLAYER_COUNT
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }

    /// Both player IDs in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Whether a seat is driven by a person or by the engine's AI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    Human,
    Ai,
}

/// A seat at the board with its four pieces.
///
/// The piece list is fixed at session start: pieces are never added or
/// removed, only their position and finished flag change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: PlayerRole,
    /// Rendering color (CSS hex).
    pub color: String,
    pieces: [Piece; PIECES_PER_PLAYER],
}

impl Player {
    /// Create a player with all pieces at the start square.
    #[must_use]
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        role: PlayerRole,
        color: impl Into<String>,
    ) -> Self {
        let pieces = std::array::from_fn(|slot| Piece::new(PieceId::new(id, slot as u8)));
        Self {
            id,
            name: name.into(),
            role,
            color: color.into(),
            pieces,
        }
    }

    /// All four pieces in slot order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up one of this player's pieces by slot.
    #[must_use]
    pub fn piece(&self, slot: usize) -> Option<&Piece> {
        self.pieces.get(slot)
    }

    pub(crate) fn piece_mut(&mut self, slot: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(slot)
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut [Piece] {
        &mut self.pieces
    }

    /// Pieces still on their way around the track.
    pub fn unfinished_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| !p.finished)
    }

    /// Number of pieces that have crossed the finish.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.finished).count()
    }

    /// True once every piece has finished.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.pieces.iter().all(|p| p.finished)
    }
}

/// Per-player storage for exactly two players.
///
/// ## Example
///
/// ```
/// use rust_yut::core::{PlayerId, PlayerPair};
///
/// let mut rolls: PlayerPair<u32> = PlayerPair::new(|_| 0);
/// rolls[PlayerId::SECOND] += 2;
///
/// assert_eq!(rolls[PlayerId::FIRST], 0);
/// assert_eq!(rolls[PlayerId::SECOND], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Get a reference to a player's data, `None` for an out-of-range ID.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Borrow a player's data and the opponent's data at the same time.
    pub fn split_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if player == PlayerId::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Iterate over the stored values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Position;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
        assert!(!PlayerId::new(2).is_valid());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    }

    #[test]
    fn test_new_player_pieces_at_start() {
        let player = Player::new(PlayerId::SECOND, "Computer", PlayerRole::Ai, "#ef4444");

        assert_eq!(player.pieces().len(), PIECES_PER_PLAYER);
        for (slot, piece) in player.pieces().iter().enumerate() {
            assert_eq!(piece.id, PieceId::new(PlayerId::SECOND, slot as u8));
            assert_eq!(piece.position, Position::Track(0));
            assert!(!piece.finished);
        }
        assert_eq!(player.finished_count(), 0);
        assert!(!player.all_finished());
    }

    #[test]
    fn test_all_finished() {
        let mut player = Player::new(PlayerId::FIRST, "Player 1", PlayerRole::Human, "#3b82f6");
        for piece in player.pieces_mut() {
            piece.finish();
        }
        assert!(player.all_finished());
        assert_eq!(player.unfinished_pieces().count(), 0);
    }

    #[test]
    fn test_pair_split_mut() {
        let mut pair: PlayerPair<i32> = PlayerPair::new(|p| p.index() as i32 * 10);

        let (mine, theirs) = pair.split_mut(PlayerId::SECOND);
        *mine += 1;
        assert_eq!(*theirs, 0);

        assert_eq!(pair[PlayerId::FIRST], 0);
        assert_eq!(pair[PlayerId::SECOND], 11);
    }

    #[test]
    fn test_pair_get_out_of_range() {
        let pair: PlayerPair<i32> = PlayerPair::new(|_| 1);
        assert!(pair.get(PlayerId::new(7)).is_none());
        assert_eq!(pair.iter().count(), 2);
    }

    #[test]
    fn test_pair_serialization() {
        let pair: PlayerPair<u32> = PlayerPair::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
