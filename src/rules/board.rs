//! Track arithmetic.

use crate::core::{Piece, Position, TRACK_LENGTH};

use super::roll::RollOutcome;

/// Where `piece` would land after moving by `outcome`.
///
/// Pure: the piece is not touched. Reaching or passing the end of the track
/// finishes the piece, however far it overshoots. Moving back from the start
/// square stays on the start square.
#[must_use]
pub fn compute_target(piece: &Piece, outcome: RollOutcome) -> Position {
    match piece.position {
        Position::Finished => Position::Finished,
        Position::Track(index) => target_from_index(index, outcome.delta()),
    }
}

/// Target for a raw track index and signed delta.
#[must_use]
pub fn target_from_index(index: u8, delta: i8) -> Position {
    let target = i16::from(index) + i16::from(delta);
    if target >= i16::from(TRACK_LENGTH) {
        Position::Finished
    } else {
        // Below zero clamps to the start; the upper bound is excluded above.
        Position::Track(target.max(0) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceId, PlayerId};

    fn piece_at(index: u8) -> Piece {
        let mut piece = Piece::new(PieceId::new(PlayerId::FIRST, 0));
        piece.place(Position::Track(index));
        piece
    }

    #[test]
    fn test_simple_advance() {
        assert_eq!(compute_target(&piece_at(0), RollOutcome::Do), Position::Track(1));
        assert_eq!(compute_target(&piece_at(10), RollOutcome::Mo), Position::Track(15));
    }

    #[test]
    fn test_exact_finish() {
        assert_eq!(compute_target(&piece_at(25), RollOutcome::Yut), Position::Finished);
    }

    #[test]
    fn test_overshoot_finishes() {
        assert_eq!(compute_target(&piece_at(27), RollOutcome::Yut), Position::Finished);
        assert_eq!(compute_target(&piece_at(28), RollOutcome::Mo), Position::Finished);
    }

    #[test]
    fn test_last_square_reachable() {
        assert_eq!(compute_target(&piece_at(26), RollOutcome::Gae), Position::Track(28));
    }

    #[test]
    fn test_back_do() {
        assert_eq!(compute_target(&piece_at(5), RollOutcome::BackDo), Position::Track(4));
        assert_eq!(compute_target(&piece_at(0), RollOutcome::BackDo), Position::START);
    }

    #[test]
    fn test_does_not_mutate() {
        let piece = piece_at(3);
        let _ = compute_target(&piece, RollOutcome::Geol);
        assert_eq!(piece.position, Position::Track(3));
    }
}
